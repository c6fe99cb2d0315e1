//! `dispatch-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model shared by every dispatch module, identifiers, and the small
//! set of traits the shipping aggregates implement.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DispatchError, DispatchResult};
pub use id::BatchId;
pub use value_object::ValueObject;
