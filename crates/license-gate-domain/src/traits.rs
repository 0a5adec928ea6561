//! Trait definitions for external interactions
//!
//! These traits define the boundary between the license logic and whatever
//! hosts it. Implementations live in other crates.

use crate::PropertyValue;

/// Read-only access to a project's properties
///
/// Implemented by the params layer (`MapPropertyStore`) and by any build-tool
/// integration. Stores are never mutated through this trait.
pub trait PropertyStore {
    /// Look up a property by name
    fn find_property(&self, name: &str) -> PropertyValue;

    /// The root scope used for fallback lookups
    ///
    /// A store without a parent scope returns itself.
    fn root(&self) -> &dyn PropertyStore;
}

impl<S: PropertyStore + ?Sized> PropertyStore for &S {
    fn find_property(&self, name: &str) -> PropertyValue {
        (**self).find_property(name)
    }

    fn root(&self) -> &dyn PropertyStore {
        (**self).root()
    }
}
