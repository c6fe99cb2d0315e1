//! Courier capability and the two stock id-minting strategies.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::order::Order;

/// A courier that ships consignments.
///
/// Implementations name themselves and mint consignment ids. The core never
/// picks a strategy; callers hand in whichever courier they want to use.
pub trait Courier: core::fmt::Debug + Send + Sync {
    /// Courier name. Expected to be non-empty; consignment construction checks.
    fn name(&self) -> &str;

    /// Mint a consignment id for `order`. Expected to be non-empty.
    fn generate_consignment_id(&self, order: &Order) -> String;
}

/// Issues ids from a per-instance counter: "1", "2", "3", ...
#[derive(Debug)]
pub struct CounterCourier {
    name: String,
    index: AtomicU64,
}

impl CounterCourier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: AtomicU64::new(0),
        }
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.index.load(Ordering::Relaxed)
    }
}

impl Courier for CounterCourier {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate_consignment_id(&self, _order: &Order) -> String {
        let next = self.index.fetch_add(1, Ordering::Relaxed) + 1;
        next.to_string()
    }
}

/// Issues time-ordered random tokens, prefixed with the order id.
///
/// Tokens come from UUIDv7, so they sort by issue time and never repeat within
/// a process.
#[derive(Debug, Clone)]
pub struct TokenCourier {
    name: String,
}

impl TokenCourier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Courier for TokenCourier {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate_consignment_id(&self, order: &Order) -> String {
        let token = Uuid::now_v7().simple().to_string().to_uppercase();
        format!("{}-{token}", order.id())
    }
}
