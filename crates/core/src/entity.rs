//! Entity trait: identity that survives field changes.

/// An object whose equality is decided by its identifier, not its fields.
///
/// A product keeps its id across full and partial updates; only delete ends it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
