//! Simulation driver.
//!
//! # Components
//! - [`Simulator`] - Runs replacers over a reference string
//! - [`simulate`] - Drives a single replacer
//! - [`Report`] - Fault count, final frames and eviction history per policy
//! - [`AccessStats`] - Hit/fault/eviction counters

mod report;
mod simulator;
mod stats;

pub use report::Report;
pub use simulator::{simulate, Simulator};
pub use stats::AccessStats;
