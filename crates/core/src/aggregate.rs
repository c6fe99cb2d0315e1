//! Aggregate root trait for consistency-boundary domain models.

/// Aggregate root marker + minimal interface.
///
/// Kept small so the shipping module decides how it models state transitions
/// without pulling in infrastructure concerns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped once per accepted state change; rejected operations leave it alone.
    fn version(&self) -> u64;
}
