pub mod callback;
pub mod credentials;
pub mod errors;
pub mod identifier;

pub use callback::CallbackIdentifier;
pub use credentials::Credentials;
pub use credentials::ErrorMap;
pub use credentials::Identity;
pub use errors::IdentifierError;
pub use identifier::Identifier;
