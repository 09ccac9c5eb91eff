use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::contract::Credentials;
use crate::contract::ErrorMap;
use crate::contract::Identifier;
use crate::contract::IdentifierError;
use crate::contract::Identity;
use crate::dispatcher::ErrorSet;
use crate::dispatcher::IdentificationDispatcher;
use crate::registry::IdentifierLookup;
use crate::registry::IdentifierRegistry;

/// A whole identifier chain usable as a single identifier.
///
/// Wraps a dispatcher so a chain can be registered inside another registry
/// or handed to code expecting one `Identifier`. Calls are serialized on an
/// internal lock since the dispatcher keeps per-call state.
///
/// `errors()` flattens the chain's error set into `"<identifier>.<field>"`
/// keys; `chain_errors()` returns it unflattened.
pub struct ChainIdentifier<R = IdentifierRegistry>
where
    R: IdentifierLookup + ?Sized,
{
    dispatcher: Mutex<IdentificationDispatcher<R>>,
}

impl<R> ChainIdentifier<R>
where
    R: IdentifierLookup + ?Sized,
{
    /// Create a chain identifier over a registry.
    ///
    /// # Arguments
    /// * `registry` - Identifiers the chain tries, in priority order
    ///
    /// # Returns
    /// ChainIdentifier with no recorded attempt
    pub fn new(registry: Arc<R>) -> Self {
        Self {
            dispatcher: Mutex::new(IdentificationDispatcher::new(registry)),
        }
    }

    /// Error set of the most recent `identify` call, per inner identifier.
    pub fn chain_errors(&self) -> ErrorSet {
        self.lock().errors().clone()
    }

    /// Name of the inner identifier behind the most recent success.
    pub fn identification_provider_name(&self) -> Option<String> {
        self.lock().identification_provider_name().map(str::to_string)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, IdentificationDispatcher<R>> {
        self.dispatcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> Identifier for ChainIdentifier<R>
where
    R: IdentifierLookup + ?Sized,
{
    fn identify(&self, credentials: &Credentials) -> Result<Option<Identity>, IdentifierError> {
        self.lock().identify(credentials)
    }

    fn errors(&self) -> ErrorMap {
        self.lock()
            .errors()
            .iter()
            .flat_map(|(name, errors)| {
                errors.iter().map(move |(field, message)| {
                    (format!("{}.{}", name, field), message.clone())
                })
            })
            .collect()
    }
}

impl<R> fmt::Debug for ChainIdentifier<R>
where
    R: IdentifierLookup + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainIdentifier")
            .field("errors", &self.chain_errors())
            .field("provider", &self.identification_provider_name())
            .finish()
    }
}
