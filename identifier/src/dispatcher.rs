use std::sync::Arc;

use indexmap::IndexMap;

use crate::contract::Credentials;
use crate::contract::ErrorMap;
use crate::contract::Identifier;
use crate::contract::IdentifierError;
use crate::contract::Identity;
use crate::registry::IdentifierLookup;
use crate::registry::IdentifierRegistry;

/// Rejection reasons of one identification attempt, keyed by identifier name.
///
/// Entries are kept in the order the identifiers were tried.
pub type ErrorSet = IndexMap<String, ErrorMap>;

/// Runs a chain of identifiers against credentials.
///
/// Identifiers are tried in registry order and the first one returning an
/// identity wins; the rest are not invoked. The dispatcher remembers the
/// rejection reasons and the winning identifier of its most recent attempt,
/// which is why `identify` takes `&mut self`. Create one dispatcher per
/// request and share the registry between them.
pub struct IdentificationDispatcher<R = IdentifierRegistry>
where
    R: IdentifierLookup + ?Sized,
{
    registry: Arc<R>,
    errors: ErrorSet,
    successful: Option<String>,
}

impl<R> IdentificationDispatcher<R>
where
    R: IdentifierLookup + ?Sized,
{
    /// Create a dispatcher over a registry.
    ///
    /// # Arguments
    /// * `registry` - Identifiers to try, in priority order
    ///
    /// # Returns
    /// Dispatcher with no recorded attempt
    pub fn new(registry: Arc<R>) -> Self {
        Self {
            registry,
            errors: ErrorSet::new(),
            successful: None,
        }
    }

    /// Resolve credentials through the identifier chain.
    ///
    /// State from the previous call is discarded first, so errors and the
    /// successful identifier always describe this call alone.
    ///
    /// # Arguments
    /// * `credentials` - Credentials presented by the caller
    ///
    /// # Returns
    /// Identity from the first identifier accepting the credentials, or
    /// `None` when all of them reject (see `errors()`)
    ///
    /// # Errors
    /// The `IdentifierError` of an identifier that failed internally,
    /// unchanged. Identifiers after it are not tried.
    pub fn identify(
        &mut self,
        credentials: &Credentials,
    ) -> Result<Option<Identity>, IdentifierError> {
        self.errors = ErrorSet::new();
        self.successful = None;

        for (name, identifier) in self.registry.all() {
            let result = identifier.identify(credentials).map_err(|e| {
                tracing::warn!(identifier = %name, error = %e, "Identifier failed");
                e
            })?;

            match result {
                Some(identity) => {
                    tracing::debug!(identifier = %name, "Credentials identified");
                    self.successful = Some(name.to_string());
                    return Ok(Some(identity));
                }
                None => {
                    let errors = identifier.errors();
                    tracing::debug!(
                        identifier = %name,
                        errors = errors.len(),
                        "Credentials rejected"
                    );
                    self.errors.insert(name.to_string(), errors);
                }
            }
        }

        tracing::debug!(
            attempted = self.errors.len(),
            "No identifier accepted the credentials"
        );

        Ok(None)
    }

    /// Rejection reasons recorded by the most recent `identify` call.
    ///
    /// Contains one entry per identifier that rejected the credentials
    /// before the chain stopped, in the order they were tried. Empty before
    /// the first call.
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Identifier that produced the most recent successful identification.
    ///
    /// `None` before the first call and after a call that did not identify
    /// the credentials.
    pub fn identification_provider(&self) -> Option<Arc<dyn Identifier>> {
        self.successful
            .as_deref()
            .and_then(|name| self.registry.get(name))
    }

    /// Registry name of the identifier returned by `identification_provider`.
    pub fn identification_provider_name(&self) -> Option<&str> {
        self.successful.as_deref()
    }
}

impl<R> Clone for IdentificationDispatcher<R>
where
    R: IdentifierLookup + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            errors: self.errors.clone(),
            successful: self.successful.clone(),
        }
    }
}
