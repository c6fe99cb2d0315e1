use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use dispatch_core::{AggregateRoot, BatchId, DispatchError, DispatchResult};

use crate::consignment::Consignment;
use crate::courier::Courier;

/// Batch lifecycle. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Open,
    Closed,
}

/// Per-courier slice of the batch: ids seen plus positions in insertion order.
#[derive(Debug, Clone, Default)]
struct CourierSlot {
    ids: HashSet<String>,
    positions: Vec<usize>,
}

/// Aggregate root: Batch.
///
/// Invariants:
/// - no two consignments share both courier name and consignment id;
/// - once closed, nothing more can be added.
///
/// Consignments are kept in insertion order. The courier index only ever points
/// into that list, so queries return matches in the order they were added.
#[derive(Debug, Clone)]
pub struct Batch {
    id: BatchId,
    status: BatchStatus,
    consignments: Vec<Consignment>,
    index: HashMap<String, CourierSlot>,
    version: u64,
}

impl Batch {
    /// Create an empty, open batch with a fresh id.
    pub fn new() -> Self {
        Self::with_id(BatchId::new())
    }

    pub fn with_id(id: BatchId) -> Self {
        Self {
            id,
            status: BatchStatus::Open,
            consignments: Vec::new(),
            index: HashMap::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> BatchId {
        self.id
    }

    pub fn status(&self) -> BatchStatus {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.status, BatchStatus::Closed)
    }

    pub fn len(&self) -> usize {
        self.consignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consignments.is_empty()
    }

    /// Record `consignment` in the batch.
    ///
    /// Checks run in a fixed order: closed batch, empty courier name, empty id,
    /// duplicate `(courier name, id)` pair. On any failure the batch is unchanged.
    pub fn add_consignment(&mut self, consignment: Consignment) -> DispatchResult<()> {
        if self.is_closed() {
            return Err(DispatchError::BatchClosed);
        }

        if consignment.courier_name().is_empty() {
            return Err(DispatchError::invalid_argument(
                "cannot add a consignment with an empty courier name",
            ));
        }

        if consignment.id().is_empty() {
            return Err(DispatchError::invalid_argument(
                "cannot add a consignment with an empty id",
            ));
        }

        if self.contains(consignment.courier_name(), consignment.id()) {
            return Err(DispatchError::duplicate(
                consignment.id(),
                consignment.courier_name(),
            ));
        }

        let position = self.consignments.len();
        let slot = self
            .index
            .entry(consignment.courier_name().to_string())
            .or_default();
        slot.ids.insert(consignment.id().to_string());
        slot.positions.push(position);
        self.consignments.push(consignment);

        self.version += 1;
        Ok(())
    }

    /// Close the batch. Closing a closed batch does nothing.
    pub fn close(&mut self) {
        if self.is_closed() {
            return;
        }
        self.status = BatchStatus::Closed;
        self.version += 1;
    }

    /// Whether a consignment with this `(courier name, id)` pair is recorded.
    pub fn contains(&self, courier_name: &str, consignment_id: &str) -> bool {
        self.index
            .get(courier_name)
            .is_some_and(|slot| slot.ids.contains(consignment_id))
    }

    /// Every consignment, in insertion order.
    pub fn all_consignments(&self) -> &[Consignment] {
        &self.consignments
    }

    /// Consignments shipped by the courier called `name`, in insertion order.
    ///
    /// An unknown courier yields an empty list; an empty `name` is an error.
    pub fn consignments_by_courier_name(&self, name: &str) -> DispatchResult<Vec<&Consignment>> {
        if name.is_empty() {
            return Err(DispatchError::invalid_argument(
                "cannot get consignments with an empty courier name",
            ));
        }

        Ok(self
            .index
            .get(name)
            .map(|slot| {
                slot.positions
                    .iter()
                    .map(|&position| &self.consignments[position])
                    .collect()
            })
            .unwrap_or_default())
    }

    pub fn consignments_by_courier(&self, courier: &dyn Courier) -> DispatchResult<Vec<&Consignment>> {
        self.consignments_by_courier_name(courier.name())
    }

    /// Distinct courier names, in order of their first consignment.
    pub fn courier_names(&self) -> Vec<&str> {
        let mut names: Vec<(usize, &str)> = self
            .index
            .iter()
            .filter_map(|(name, slot)| slot.positions.first().map(|&first| (first, name.as_str())))
            .collect();
        names.sort_unstable_by_key(|(first, _)| *first);
        names.into_iter().map(|(_, name)| name).collect()
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Batch {
    type Id = BatchId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
