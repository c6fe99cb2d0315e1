//! Thread-safe batch handle.
//!
//! One mutex guards the whole aggregate, so the duplicate check and the insert
//! happen under the same lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use dispatch_core::{AggregateRoot, BatchId, DispatchResult};

use crate::batch::{Batch, BatchStatus};
use crate::consignment::Consignment;
use crate::courier::Courier;

/// A [`Batch`] that can be shared between threads (typically as `Arc<SharedBatch>`).
#[derive(Debug)]
pub struct SharedBatch {
    id: BatchId,
    inner: Mutex<Batch>,
}

impl SharedBatch {
    pub fn new(batch: Batch) -> Self {
        Self {
            id: batch.id_typed(),
            inner: Mutex::new(batch),
        }
    }

    pub fn id(&self) -> BatchId {
        self.id
    }

    // Every Batch mutation is all-or-nothing, so a panic while holding the lock
    // cannot leave it half-updated and the poisoned state is still consistent.
    fn lock(&self) -> MutexGuard<'_, Batch> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_consignment(&self, consignment: Consignment) -> DispatchResult<()> {
        let courier = consignment.courier_name().to_string();
        let consignment_id = consignment.id().to_string();

        let mut batch = self.lock();
        match batch.add_consignment(consignment) {
            Ok(()) => {
                tracing::debug!(
                    batch_id = %self.id,
                    courier = %courier,
                    consignment_id = %consignment_id,
                    "consignment added"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    batch_id = %self.id,
                    courier = %courier,
                    consignment_id = %consignment_id,
                    error = %err,
                    "consignment rejected"
                );
                Err(err)
            }
        }
    }

    pub fn close(&self) {
        let mut batch = self.lock();
        if !batch.is_closed() {
            batch.close();
            tracing::info!(batch_id = %self.id, consignments = batch.len(), "batch closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_closed()
    }

    pub fn status(&self) -> BatchStatus {
        self.lock().status()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn version(&self) -> u64 {
        self.lock().version()
    }

    /// Owned copy of every consignment, in insertion order.
    pub fn all_consignments(&self) -> Vec<Consignment> {
        self.lock().all_consignments().to_vec()
    }

    pub fn consignments_by_courier_name(&self, name: &str) -> DispatchResult<Vec<Consignment>> {
        let batch = self.lock();
        let found = batch.consignments_by_courier_name(name)?;
        Ok(found.into_iter().cloned().collect())
    }

    pub fn consignments_by_courier(&self, courier: &dyn Courier) -> DispatchResult<Vec<Consignment>> {
        self.consignments_by_courier_name(courier.name())
    }

    /// Clone of the current aggregate state.
    pub fn snapshot(&self) -> Batch {
        self.lock().clone()
    }

    pub fn into_inner(self) -> Batch {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Batch> for SharedBatch {
    fn from(batch: Batch) -> Self {
        Self::new(batch)
    }
}
