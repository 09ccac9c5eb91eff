use std::fmt;
use std::sync::PoisonError;
use std::sync::RwLock;

use super::credentials::Credentials;
use super::credentials::ErrorMap;
use super::credentials::Identity;
use super::errors::IdentifierError;
use super::identifier::Identifier;

type Callback = dyn Fn(&Credentials) -> Result<Identity, ErrorMap> + Send + Sync;

/// Identifier backed by a closure.
///
/// The closure accepts credentials by returning an identity, or rejects them
/// by returning the errors to report. Rejection errors are kept until the
/// next call so that `errors()` can describe them.
pub struct CallbackIdentifier {
    callback: Box<Callback>,
    errors: RwLock<ErrorMap>,
}

impl CallbackIdentifier {
    /// Create a new callback identifier.
    ///
    /// # Arguments
    /// * `callback` - Closure deciding whether credentials are accepted
    ///
    /// # Returns
    /// CallbackIdentifier instance with no recorded errors
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Credentials) -> Result<Identity, ErrorMap> + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
            errors: RwLock::new(ErrorMap::new()),
        }
    }
}

impl Identifier for CallbackIdentifier {
    fn identify(&self, credentials: &Credentials) -> Result<Option<Identity>, IdentifierError> {
        let outcome = (self.callback)(credentials);

        let mut errors = self.errors.write().unwrap_or_else(PoisonError::into_inner);
        match outcome {
            Ok(identity) => {
                errors.clear();
                Ok(Some(identity))
            }
            Err(rejection) => {
                *errors = rejection;
                Ok(None)
            }
        }
    }

    fn errors(&self) -> ErrorMap {
        self.errors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl fmt::Debug for CallbackIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackIdentifier")
            .field("errors", &self.errors())
            .finish_non_exhaustive()
    }
}
