//! Environment-driven configuration for the `dispatch` binary.
//!
//! | variable              | meaning                                        | default           |
//! |-----------------------|------------------------------------------------|-------------------|
//! | `DISPATCH_MANIFEST`   | JSON order manifest (CLI argument overrides)   | required          |
//! | `DISPATCH_COURIERS`   | comma list of `name[:counter\|token]`          | `Example:counter` |
//! | `DISPATCH_LOG_FORMAT` | `json` or `pretty`                             | `json`            |

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use dispatch_observability::{LogFormat, ParseLogFormatError};
use dispatch_shipping::{CounterCourier, Courier, TokenCourier};

pub const MANIFEST_VAR: &str = "DISPATCH_MANIFEST";
pub const COURIERS_VAR: &str = "DISPATCH_COURIERS";
pub const LOG_FORMAT_VAR: &str = "DISPATCH_LOG_FORMAT";

const DEFAULT_COURIERS: &str = "Example:counter";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no order manifest given (pass a path or set DISPATCH_MANIFEST)")]
    MissingManifest,

    #[error("courier entry `{0}` has an empty name")]
    EmptyCourierName(String),

    #[error("unknown id strategy `{strategy}` for courier `{courier}` (expected `counter` or `token`)")]
    UnknownStrategy { courier: String, strategy: String },

    #[error("courier `{0}` is configured more than once")]
    DuplicateCourier(String),

    #[error(transparent)]
    LogFormat(#[from] ParseLogFormatError),
}

/// How a configured courier mints consignment ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CourierStrategy {
    #[default]
    Counter,
    Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourierSpec {
    pub name: String,
    pub strategy: CourierStrategy,
}

impl CourierSpec {
    pub fn build(&self) -> Arc<dyn Courier> {
        match self.strategy {
            CourierStrategy::Counter => Arc::new(CounterCourier::new(self.name.clone())),
            CourierStrategy::Token => Arc::new(TokenCourier::new(self.name.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub manifest: PathBuf,
    pub couriers: Vec<CourierSpec>,
    pub log_format: LogFormat,
}

impl DispatchConfig {
    /// Read configuration from the process environment.
    pub fn from_env(manifest_arg: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), manifest_arg)
    }

    /// Read configuration through `lookup`, with `manifest_arg` taking
    /// precedence over `DISPATCH_MANIFEST`.
    pub fn from_lookup<F>(lookup: F, manifest_arg: Option<PathBuf>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let manifest = manifest_arg
            .or_else(|| lookup(MANIFEST_VAR).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .ok_or(ConfigError::MissingManifest)?;

        let couriers = lookup(COURIERS_VAR).unwrap_or_else(|| DEFAULT_COURIERS.to_string());
        let couriers = parse_couriers(&couriers)?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            manifest,
            couriers,
            log_format,
        })
    }

    pub fn build_couriers(&self) -> Vec<Arc<dyn Courier>> {
        self.couriers.iter().map(CourierSpec::build).collect()
    }
}

fn parse_couriers(raw: &str) -> Result<Vec<CourierSpec>, ConfigError> {
    let mut seen = HashSet::new();
    let mut specs = Vec::new();

    for entry in raw.split(',').map(str::trim) {
        let (name, strategy) = match entry.split_once(':') {
            Some((name, strategy)) => (name.trim(), Some(strategy.trim())),
            None => (entry, None),
        };

        if name.is_empty() {
            return Err(ConfigError::EmptyCourierName(entry.to_string()));
        }

        let strategy = match strategy.map(str::to_ascii_lowercase).as_deref() {
            None | Some("counter") => CourierStrategy::Counter,
            Some("token") => CourierStrategy::Token,
            Some(other) => {
                return Err(ConfigError::UnknownStrategy {
                    courier: name.to_string(),
                    strategy: other.to_string(),
                });
            }
        };

        if !seen.insert(name.to_string()) {
            return Err(ConfigError::DuplicateCourier(name.to_string()));
        }

        specs.push(CourierSpec {
            name: name.to_string(),
            strategy,
        });
    }

    Ok(specs)
}
