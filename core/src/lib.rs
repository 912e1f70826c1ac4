//! Detection and threat classification for a simulated radar sensor.
//!
//! A [`Radar`] scans a batch of [`Target`]s from a sensor fixed at the origin,
//! keeps the ones inside its range and above its SNR threshold, and classifies
//! each survivor into a [`ThreatLevel`].

pub mod math;
pub mod model;
pub mod prelude;
pub mod processing;
pub mod radar;
pub mod telemetry;

pub use model::{Detection, Priority, Target, ThreatLevel};
pub use prelude::{RadarError, RadarResult};
pub use radar::{Radar, RadarConfig, ScanOutcome};
