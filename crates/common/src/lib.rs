//! Plumbing shared by the booking crates: logging setup, the health payload
//! and process-wide Prometheus counters.

pub mod types;
pub mod utils;
pub mod metrics;
