//! One dispatch run: manifest orders in, closed batch out.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;

use dispatch_core::DispatchResult;
use dispatch_shipping::{Batch, Consignment, Courier, Order};

use crate::config::DispatchConfig;
use crate::manifest::Manifest;
use crate::report::BatchReport;

/// Assign `orders` to `couriers` round-robin, record every consignment in a new
/// batch, then close it.
///
/// The first domain error aborts the run.
pub fn dispatch_orders(orders: Vec<Order>, couriers: &[Arc<dyn Courier>]) -> DispatchResult<Batch> {
    let mut batch = Batch::new();
    let batch_id = batch.id_typed();
    tracing::info!(
        batch_id = %batch_id,
        orders = orders.len(),
        couriers = couriers.len(),
        "dispatch started"
    );

    for (order, courier) in orders.into_iter().zip(couriers.iter().cycle()) {
        let consignment = Consignment::new(order, Arc::clone(courier))?;
        tracing::debug!(
            batch_id = %batch_id,
            courier = consignment.courier_name(),
            consignment_id = consignment.id(),
            "consignment created"
        );
        if let Err(err) = batch.add_consignment(consignment) {
            tracing::warn!(batch_id = %batch_id, error = %err, "consignment rejected");
            return Err(err);
        }
    }

    batch.close();
    tracing::info!(batch_id = %batch_id, consignments = batch.len(), "batch closed");
    Ok(batch)
}

pub fn run(config: &DispatchConfig) -> anyhow::Result<BatchReport> {
    let manifest = Manifest::load(&config.manifest)?;
    let couriers = config.build_couriers();

    let batch = dispatch_orders(manifest.orders, &couriers)
        .with_context(|| format!("dispatch of {} failed", config.manifest.display()))?;

    Ok(BatchReport::from_batch(&batch, Utc::now()))
}
