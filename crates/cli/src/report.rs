//! JSON summary of a dispatched batch.

use chrono::{DateTime, Utc};
use serde::Serialize;

use dispatch_core::{AggregateRoot, BatchId};
use dispatch_shipping::{Batch, BatchStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsignmentLine {
    pub consignment_id: String,
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourierReport {
    pub courier: String,
    pub consignments: Vec<ConsignmentLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub batch_id: BatchId,
    pub status: BatchStatus,
    pub version: u64,
    pub total: usize,
    pub couriers: Vec<CourierReport>,
    pub generated_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn from_batch(batch: &Batch, generated_at: DateTime<Utc>) -> Self {
        let couriers = batch
            .courier_names()
            .into_iter()
            .map(|name| CourierReport {
                courier: name.to_string(),
                consignments: batch
                    .consignments_by_courier_name(name)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|c| ConsignmentLine {
                        consignment_id: c.id().to_string(),
                        order_id: c.order().id().to_string(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            batch_id: *batch.id(),
            status: batch.status(),
            version: batch.version(),
            total: batch.len(),
            couriers,
            generated_at,
        }
    }
}
