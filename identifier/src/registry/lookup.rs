use std::sync::Arc;

use crate::contract::Identifier;

/// Read-only view of an ordered identifier collection.
///
/// This is all a dispatcher needs from a registry: lookup by name and
/// iteration in priority order.
pub trait IdentifierLookup: Send + Sync {
    /// Identifier registered under `name`, if any.
    fn get(&self, name: &str) -> Option<Arc<dyn Identifier>>;

    /// (name, identifier) pairs in priority order.
    ///
    /// Calling this again restarts the iteration from the first identifier.
    fn all(&self) -> Box<dyn Iterator<Item = (&str, &Arc<dyn Identifier>)> + '_>;
}
