use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::OptionsError;
use super::errors::RegistryError;
use crate::contract::Identifier;

/// Options handed to an identifier constructor.
pub type IdentifierOptions = serde_json::Map<String, Value>;

type Constructor =
    dyn Fn(&IdentifierOptions) -> Result<Arc<dyn Identifier>, OptionsError> + Send + Sync;

const TYPE_SUFFIX: &str = "Identifier";

/// Maps identifier type names to constructors.
///
/// Type names are resolved exactly first, then with the `Identifier` suffix
/// added or removed, so `"Password"` and `"PasswordIdentifier"` reach the
/// same constructor.
#[derive(Default)]
pub struct IdentifierFactory {
    constructors: HashMap<String, Box<Constructor>>,
}

impl IdentifierFactory {
    /// Create a factory without any known types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor working on raw options.
    ///
    /// Registering the same type name again replaces the constructor.
    ///
    /// # Arguments
    /// * `type_name` - Name configuration refers to
    /// * `constructor` - Builds an identifier from its options
    pub fn register<I, F>(&mut self, type_name: impl Into<String>, constructor: F)
    where
        I: Identifier + 'static,
        F: Fn(&IdentifierOptions) -> Result<I, OptionsError> + Send + Sync + 'static,
    {
        self.constructors.insert(
            type_name.into(),
            Box::new(move |options: &IdentifierOptions| {
                constructor(options).map(|identifier| Arc::new(identifier) as Arc<dyn Identifier>)
            }),
        );
    }

    /// Register a constructor taking typed options.
    ///
    /// The options map is deserialized into `O` before the constructor runs;
    /// a map that does not fit `O` is reported as `DeserializationFailed`.
    ///
    /// # Arguments
    /// * `type_name` - Name configuration refers to
    /// * `constructor` - Builds an identifier from deserialized options
    pub fn register_with_options<O, I, F>(&mut self, type_name: impl Into<String>, constructor: F)
    where
        O: DeserializeOwned,
        I: Identifier + 'static,
        F: Fn(O) -> Result<I, OptionsError> + Send + Sync + 'static,
    {
        self.register(type_name, move |options: &IdentifierOptions| {
            let typed: O = serde_json::from_value(Value::Object(options.clone()))
                .map_err(|e| OptionsError::DeserializationFailed(e.to_string()))?;
            constructor(typed)
        });
    }

    /// Check whether a type name resolves to a constructor.
    pub fn contains(&self, type_name: &str) -> bool {
        self.resolve(type_name).is_some()
    }

    /// Registered type names, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Resolve and construct an identifier.
    ///
    /// # Arguments
    /// * `name` - Registry name the identifier is built for (used in errors)
    /// * `type_name` - Type to resolve
    /// * `options` - Options passed to the constructor
    ///
    /// # Returns
    /// Newly constructed identifier
    ///
    /// # Errors
    /// * `NotFound` - No constructor matches `type_name`
    /// * `Configuration` - The constructor rejected the options
    pub fn build(
        &self,
        name: &str,
        type_name: &str,
        options: &IdentifierOptions,
    ) -> Result<Arc<dyn Identifier>, RegistryError> {
        let constructor = self
            .resolve(type_name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
                type_name: type_name.to_string(),
            })?;

        constructor(options).map_err(|source| RegistryError::Configuration {
            name: name.to_string(),
            source,
        })
    }

    fn resolve(&self, type_name: &str) -> Option<&Constructor> {
        if let Some(constructor) = self.constructors.get(type_name) {
            return Some(constructor.as_ref());
        }

        let alternative = match type_name.strip_suffix(TYPE_SUFFIX) {
            Some(short) if !short.is_empty() => short.to_string(),
            Some(_) => return None,
            None => format!("{}{}", type_name, TYPE_SUFFIX),
        };

        self.constructors
            .get(&alternative)
            .map(|constructor| constructor.as_ref())
    }
}

impl fmt::Debug for IdentifierFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut type_names: Vec<&str> = self.type_names().collect();
        type_names.sort_unstable();
        f.debug_struct("IdentifierFactory")
            .field("types", &type_names)
            .finish()
    }
}
