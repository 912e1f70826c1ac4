use serde::Serialize;

use crate::model::threat::{Priority, ThreatLevel};

/// Result record for a target that passed both scan gates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    target_id: String,
    distance_km: f64,
    bearing_deg: f64,
    snr: f64,
    threat: ThreatLevel,
}

impl Detection {
    pub(crate) fn new(
        target_id: String,
        distance_km: f64,
        bearing_deg: f64,
        snr: f64,
        threat: ThreatLevel,
    ) -> Self {
        Self {
            target_id,
            distance_km,
            bearing_deg,
            snr,
            threat,
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn bearing_deg(&self) -> f64 {
        self.bearing_deg
    }

    pub fn snr(&self) -> f64 {
        self.snr
    }

    pub fn threat(&self) -> ThreatLevel {
        self.threat
    }

    /// High confidence is its own notion; today only the high tier qualifies.
    pub fn is_high_confidence(&self) -> bool {
        self.threat == ThreatLevel::High
    }

    pub fn assess_priority(&self) -> Priority {
        Priority::assess(self.threat, self.distance_km, self.snr)
    }
}
