pub mod collection;
pub mod errors;
pub mod factory;
pub mod lookup;

pub use collection::IdentifierRegistry;
pub use collection::IdentifierSpec;
pub use errors::OptionsError;
pub use errors::RegistryError;
pub use factory::IdentifierFactory;
pub use factory::IdentifierOptions;
pub use lookup::IdentifierLookup;
