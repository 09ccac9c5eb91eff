use thiserror::Error;

/// Error type for failures inside an identifier.
///
/// Rejecting credentials is not an error: identifiers report that by
/// returning `Ok(None)` and describing the reason through `errors()`.
/// These variants are for strategies that could not reach a verdict at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier backend unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed credentials: {0}")]
    MalformedCredentials(String),

    #[error("Identifier failed: {0}")]
    Internal(String),
}
