//! TaskPing Daemon Library
//!
//! Monitor logic exposed as a library for testing.

pub mod monitor;

pub use monitor::{CheckOutcome, Monitor, MonitorError};
