use thiserror::Error;

/// Error type for identifier option handling.
///
/// Returned by identifier constructors when the options they were given
/// cannot produce a working identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Missing required option: {0}")]
    MissingOption(String),

    #[error("Invalid option `{key}`: {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("Failed to deserialize options: {0}")]
    DeserializationFailed(String),
}

/// Error type for identifier registration.
///
/// Both variants are deployment defects: the registration is refused and the
/// registry keeps its previous contents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Identifier type `{type_name}` was not found (registering `{name}`)")]
    NotFound { name: String, type_name: String },

    #[error("Identifier `{name}` is misconfigured: {source}")]
    Configuration { name: String, source: OptionsError },

    #[error("Identifier name must not be empty")]
    EmptyName,
}
