use crate::prelude::Gate;

/// Signal-to-noise score of a return with cross-section `rcs` at `distance_km`.
///
/// The denominator is at least 1, so the score never exceeds `rcs` and falls
/// monotonically with range.
pub fn signal_to_noise(rcs: f64, distance_km: f64) -> f64 {
    rcs / (1.0 + distance_km)
}

/// Admits returns whose SNR reaches the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnrGate {
    threshold: f64,
}

impl SnrGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Gate for SnrGate {
    fn name(&self) -> &'static str {
        "snr"
    }

    fn admits(&self, snr: f64) -> bool {
        snr >= self.threshold
    }
}
