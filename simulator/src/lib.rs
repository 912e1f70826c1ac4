//! Offline scenario driver for the radar core.
//!
//! Loads a radar and its target batch from YAML, optionally extends the batch
//! with a seeded synthetic field, and runs the scan with outcome metrics.

pub mod generator;
pub mod workflow;

pub use generator::{build_target_field, TargetFieldConfig};
pub use workflow::{Runner, ScenarioConfig, ScenarioResult};
