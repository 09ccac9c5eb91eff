use std::fmt;
use std::sync::Arc;

use super::errors::RegistryError;
use super::factory::IdentifierFactory;
use super::factory::IdentifierOptions;
use super::lookup::IdentifierLookup;
use crate::config::IdentificationConfig;
use crate::contract::Identifier;

/// How an identifier is provided at registration.
pub enum IdentifierSpec {
    /// A ready-made identifier; registration options are ignored.
    Instance(Arc<dyn Identifier>),
    /// A type name resolved through the registry's factory.
    Type(String),
}

impl IdentifierSpec {
    /// Wrap a concrete identifier.
    pub fn instance(identifier: impl Identifier + 'static) -> Self {
        Self::Instance(Arc::new(identifier))
    }
}

impl From<Arc<dyn Identifier>> for IdentifierSpec {
    fn from(identifier: Arc<dyn Identifier>) -> Self {
        Self::Instance(identifier)
    }
}

impl From<&str> for IdentifierSpec {
    fn from(type_name: &str) -> Self {
        Self::Type(type_name.to_string())
    }
}

impl From<String> for IdentifierSpec {
    fn from(type_name: String) -> Self {
        Self::Type(type_name)
    }
}

struct Entry {
    name: String,
    identifier: Arc<dyn Identifier>,
}

/// Ordered, name-indexed collection of identifiers.
///
/// Registration order is priority order: the first identifier registered is
/// the first one a dispatcher tries. Names are unique; registering an
/// existing name swaps the identifier without moving it.
///
/// Identifiers are constructed when they are registered, so a bad type name
/// or bad options fail the registration instead of surfacing on a request.
#[derive(Default)]
pub struct IdentifierRegistry {
    entries: Vec<Entry>,
    factory: IdentifierFactory,
}

impl IdentifierRegistry {
    /// Create an empty registry that can only accept identifier instances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry resolving type names through `factory`.
    pub fn with_factory(factory: IdentifierFactory) -> Self {
        Self {
            entries: Vec::new(),
            factory,
        }
    }

    /// Build a registry from configuration.
    ///
    /// Entries are registered in the order they appear in `config`.
    ///
    /// # Errors
    /// The first `RegistryError` raised by an entry; no partially built
    /// registry is returned.
    pub fn from_config(
        config: &IdentificationConfig,
        factory: IdentifierFactory,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::with_factory(factory);

        for entry in &config.identifiers {
            registry.register(
                entry.name.as_str(),
                entry.type_name.as_str(),
                entry.options.clone(),
            )?;
        }

        tracing::info!(
            identifiers = registry.len(),
            "Identifier registry built from configuration"
        );

        Ok(registry)
    }

    /// Register an identifier under `name`.
    ///
    /// # Arguments
    /// * `name` - Unique registry name (also the key used in error sets)
    /// * `spec` - Identifier instance, or type name to resolve
    /// * `options` - Constructor options (ignored for instances)
    ///
    /// # Returns
    /// The registered identifier
    ///
    /// # Errors
    /// * `EmptyName` - `name` is empty
    /// * `NotFound` - The type name does not resolve
    /// * `Configuration` - The constructor rejected `options`
    pub fn register(
        &mut self,
        name: impl Into<String>,
        spec: impl Into<IdentifierSpec>,
        options: IdentifierOptions,
    ) -> Result<Arc<dyn Identifier>, RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let identifier = match spec.into() {
            IdentifierSpec::Instance(identifier) => identifier,
            IdentifierSpec::Type(type_name) => {
                self.factory
                    .build(&name, &type_name, &options)
                    .map_err(|e| {
                        tracing::error!(
                            identifier = %name,
                            type_name = %type_name,
                            error = %e,
                            "Identifier registration failed"
                        );
                        e
                    })?
            }
        };

        match self.position(&name) {
            Some(index) => {
                self.entries[index].identifier = Arc::clone(&identifier);
                tracing::info!(identifier = %name, position = index, "Identifier replaced");
            }
            None => {
                self.entries.push(Entry {
                    name: name.clone(),
                    identifier: Arc::clone(&identifier),
                });
                tracing::info!(
                    identifier = %name,
                    position = self.entries.len() - 1,
                    "Identifier registered"
                );
            }
        }

        Ok(identifier)
    }

    /// Identifier registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Identifier>> {
        self.position(name)
            .map(|index| Arc::clone(&self.entries[index].identifier))
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove the identifier registered under `name`.
    ///
    /// Later identifiers move up one position.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Identifier>> {
        let index = self.position(name)?;
        let entry = self.entries.remove(index);
        tracing::info!(identifier = %name, "Identifier removed");
        Some(entry.identifier)
    }

    /// (name, identifier) pairs in registration order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
}

impl IdentifierLookup for IdentifierRegistry {
    fn get(&self, name: &str) -> Option<Arc<dyn Identifier>> {
        IdentifierRegistry::get(self, name)
    }

    fn all(&self) -> Box<dyn Iterator<Item = (&str, &Arc<dyn Identifier>)> + '_> {
        Box::new(self.iter())
    }
}

impl fmt::Debug for IdentifierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .field("factory", &self.factory)
            .finish()
    }
}

/// Iterator over a registry in registration order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Arc<dyn Identifier>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| (entry.name.as_str(), &entry.identifier))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IdentifierRegistry {
    type Item = (&'a str, &'a Arc<dyn Identifier>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
