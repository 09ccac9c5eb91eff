//! Identifier chain library
//!
//! Answers "who is this caller?" by trying an ordered list of pluggable
//! identification strategies until one accepts the credentials:
//! - Identifier contract (credentials in, identity or rejection out)
//! - Ordered, named identifier registry with type-name construction
//! - Dispatcher with first-success-wins resolution and per-identifier errors
//! - Chain adapter so a whole chain can stand in for a single identifier
//!
//! Concrete strategies (password, token, session...) live with the services
//! that own the credential stores. They plug in either as instances or
//! through constructors registered on an `IdentifierFactory`.
//!
//! # Examples
//!
//! ## Resolving Credentials
//! ```
//! use std::sync::Arc;
//!
//! use identifier::{
//!     CallbackIdentifier, Credentials, ErrorMap, IdentificationDispatcher, IdentifierOptions,
//!     IdentifierRegistry, IdentifierSpec, Identity,
//! };
//!
//! let mut registry = IdentifierRegistry::new();
//! registry
//!     .register(
//!         "token",
//!         IdentifierSpec::instance(CallbackIdentifier::new(|credentials| {
//!             match credentials.get_str("token") {
//!                 Some("valid-token") => Ok(Identity::new().with("id", 42)),
//!                 _ => Err(ErrorMap::from([("token".to_string(), "invalid".to_string())])),
//!             }
//!         })),
//!         IdentifierOptions::new(),
//!     )
//!     .unwrap();
//!
//! let mut dispatcher = IdentificationDispatcher::new(Arc::new(registry));
//!
//! let identity = dispatcher
//!     .identify(&Credentials::new().with("token", "valid-token"))
//!     .unwrap();
//! assert!(identity.is_some());
//! assert_eq!(dispatcher.identification_provider_name(), Some("token"));
//!
//! let identity = dispatcher
//!     .identify(&Credentials::new().with("token", "forged"))
//!     .unwrap();
//! assert!(identity.is_none());
//! assert_eq!(dispatcher.errors()["token"]["token"], "invalid");
//! ```
//!
//! ## Building From Configuration
//! ```
//! use identifier::config::FileFormat;
//! use identifier::{
//!     CallbackIdentifier, IdentificationConfig, IdentifierFactory, IdentifierOptions,
//!     IdentifierRegistry, Identity,
//! };
//!
//! let mut factory = IdentifierFactory::new();
//! factory.register("Anonymous", |_options: &IdentifierOptions| {
//!     Ok(CallbackIdentifier::new(|_| Ok(Identity::new())))
//! });
//!
//! let config = IdentificationConfig::from_str(
//!     r#"
//!     [[identifiers]]
//!     name = "anonymous"
//!     type = "AnonymousIdentifier"
//!     "#,
//!     FileFormat::Toml,
//! )
//! .unwrap();
//!
//! let registry = IdentifierRegistry::from_config(&config, factory).unwrap();
//! assert!(registry.has("anonymous"));
//! ```

pub mod chain;
pub mod config;
pub mod contract;
pub mod dispatcher;
pub mod registry;

// Re-export commonly used items
pub use chain::ChainIdentifier;
pub use crate::config::IdentificationConfig;
pub use crate::config::IdentifierConfig;
pub use contract::CallbackIdentifier;
pub use contract::Credentials;
pub use contract::ErrorMap;
pub use contract::Identifier;
pub use contract::IdentifierError;
pub use contract::Identity;
pub use dispatcher::ErrorSet;
pub use dispatcher::IdentificationDispatcher;
pub use registry::IdentifierFactory;
pub use registry::IdentifierLookup;
pub use registry::IdentifierOptions;
pub use registry::IdentifierRegistry;
pub use registry::IdentifierSpec;
pub use registry::OptionsError;
pub use registry::RegistryError;
