use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal threat tier assigned to a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    pub fn label(self) -> &'static str {
        match self {
            ThreatLevel::Low => "LOW",
            ThreatLevel::Medium => "MEDIUM",
            ThreatLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handling priority derived from a detection's tier, range and SNR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "PRIORITY_1_INTERCEPT")]
    Intercept,
    #[serde(rename = "PRIORITY_2_MONITOR")]
    Monitor,
    #[serde(rename = "PRIORITY_3_TRACK")]
    Track,
    #[serde(rename = "PRIORITY_4_LOG")]
    Log,
}

impl Priority {
    /// Range below which a high-tier detection is intercepted rather than monitored.
    pub const INTERCEPT_RANGE_KM: f64 = 10.0;
    /// SNR above which a medium-tier detection is tracked rather than logged.
    pub const TRACK_SNR: f64 = 3.0;

    /// First matching rule wins.
    pub fn assess(threat: ThreatLevel, distance_km: f64, snr: f64) -> Self {
        match threat {
            ThreatLevel::High if distance_km < Self::INTERCEPT_RANGE_KM => Priority::Intercept,
            ThreatLevel::High => Priority::Monitor,
            ThreatLevel::Medium if snr > Self::TRACK_SNR => Priority::Track,
            _ => Priority::Log,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Intercept => "PRIORITY_1_INTERCEPT",
            Priority::Monitor => "PRIORITY_2_MONITOR",
            Priority::Track => "PRIORITY_3_TRACK",
            Priority::Log => "PRIORITY_4_LOG",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
