//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are built once, validated at construction, and never mutated
/// afterwards. Two value objects holding the same attributes are equal.
///
/// A consignment is the canonical example here: once a courier has minted its
/// id and name, nothing about it changes. Re-dispatching means building a new
/// consignment, not editing the old one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct TrackingLabel {
///     courier_name: String,
///     consignment_id: String,
/// }
///
/// impl ValueObject for TrackingLabel {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
