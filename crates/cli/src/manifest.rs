//! JSON order manifest: `{"orders": [{"id": "...", "details": {...}}, ...]}`.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use dispatch_shipping::Order;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub orders: Vec<Order>,
}

impl Manifest {
    /// Parse a manifest. Every order is validated while deserializing.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid manifest {}", path.display()))
    }
}
