//! Entity trait: identity + continuity across state changes.

/// Something that keeps its identity while its attributes change.
///
/// An order whose details are replaced is still the same order; that is what
/// separates it from a [`ValueObject`](crate::ValueObject).
pub trait Entity {
    /// Identifier type. Upstream systems may hand us opaque strings.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
