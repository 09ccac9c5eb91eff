use super::credentials::Credentials;
use super::credentials::ErrorMap;
use super::credentials::Identity;
use super::errors::IdentifierError;

/// Capability contract every identification strategy satisfies.
///
/// Identifiers are shared between dispatchers through `Arc`, so both methods
/// take `&self`. An implementation that remembers its last rejection keeps
/// that state behind interior mutability.
pub trait Identifier: Send + Sync {
    /// Try to resolve credentials into an identity.
    ///
    /// # Arguments
    /// * `credentials` - Credentials presented by the caller
    ///
    /// # Returns
    /// `Some(identity)` when the credentials are accepted, `None` when they
    /// are rejected (the reason is then available through `errors()`)
    ///
    /// # Errors
    /// Any `IdentifierError` means the strategy itself failed. Such errors
    /// are propagated to the caller of the chain, never turned into a
    /// rejection.
    fn identify(&self, credentials: &Credentials) -> Result<Option<Identity>, IdentifierError>;

    /// Reasons the most recent `identify` call returned `None`.
    ///
    /// Unspecified before the first call.
    fn errors(&self) -> ErrorMap;
}
