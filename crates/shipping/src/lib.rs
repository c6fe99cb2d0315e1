//! Shipping dispatch domain module.
//!
//! Orders are wrapped into consignments by couriers, and consignments are
//! collected into batches. Everything here is deterministic domain logic
//! (no IO, no storage); the only stateful rules live on [`Batch`].

pub mod batch;
pub mod consignment;
pub mod courier;
pub mod order;
pub mod shared;

pub use batch::{Batch, BatchStatus};
pub use consignment::Consignment;
pub use courier::{CounterCourier, Courier, TokenCourier};
pub use order::{Order, OrderDetails};
pub use shared::SharedBatch;
