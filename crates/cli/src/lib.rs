//! `dispatch` binary internals: configuration, manifest loading, the dispatch
//! run itself and the JSON report it prints.

pub mod config;
pub mod manifest;
pub mod report;
pub mod run;

pub use config::{ConfigError, CourierSpec, CourierStrategy, DispatchConfig};
pub use manifest::Manifest;
pub use report::BatchReport;
pub use run::{dispatch_orders, run};
