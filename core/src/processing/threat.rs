use crate::model::ThreatLevel;
use crate::prelude::{RadarError, RadarResult};

/// Maps an SNR onto a tier using cut points scaled by the detection threshold.
///
/// Cut points are strict, so an SNR equal to a cut point takes the lower tier.
/// Callers only classify SNRs that already passed the threshold; below it the
/// result is `Low`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatClassifier {
    threshold: f64,
}

impl ThreatClassifier {
    pub const MEDIUM_FACTOR: f64 = 1.2;
    pub const HIGH_FACTOR: f64 = 2.0;

    /// Classifier for an already validated radar threshold, which may be zero.
    /// A zero threshold collapses both cut points to zero.
    pub(crate) fn for_radar(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn tier(&self, snr: f64) -> ThreatLevel {
        if snr > Self::HIGH_FACTOR * self.threshold {
            ThreatLevel::High
        } else if snr > Self::MEDIUM_FACTOR * self.threshold {
            ThreatLevel::Medium
        } else {
            ThreatLevel::Low
        }
    }
}

/// Classifies `snr` against `threshold`, rejecting NaN inputs and thresholds `<= 0`.
pub fn classify(snr: f64, threshold: f64) -> RadarResult<ThreatLevel> {
    if snr.is_nan() || threshold.is_nan() || threshold <= 0.0 {
        return Err(RadarError::InvalidClassificationInput { snr, threshold });
    }
    Ok(ThreatClassifier::for_radar(threshold).tier(snr))
}
