//! Radar configuration and the scan that turns a target batch into detections.
//!
//! Every range is measured from a sensor fixed at the origin. A target is
//! first range-gated, then SNR-gated, and only a target passing both gets a
//! bearing, a threat tier and a [`Detection`]. Results are ordered by target id.

use serde::{Deserialize, Serialize};

use crate::math::{bearing, distance, Point};
use crate::model::{Detection, Target};
use crate::prelude::{Gate, RadarError, RadarResult};
use crate::processing::{signal_to_noise, RangeGate, SnrGate, ThreatClassifier};
use crate::telemetry::{ScanLog, ScanMetrics};

/// Serializable radar parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    pub id: String,
    pub max_range_km: f64,
    pub snr_threshold: f64,
}

/// Per-target result of running both gates.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    OutOfRange { distance_km: f64 },
    BelowThreshold { snr: f64 },
    Detected(Detection),
}

impl ScanOutcome {
    pub fn into_detection(self) -> Option<Detection> {
        match self {
            ScanOutcome::Detected(detection) => Some(detection),
            _ => None,
        }
    }
}

/// Immutable sensor configuration. Scanning holds no state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Radar {
    id: String,
    range_gate: RangeGate,
    snr_gate: SnrGate,
    classifier: ThreatClassifier,
}

impl Radar {
    /// Fails unless `max_range_km > 0` and `snr_threshold >= 0`.
    pub fn new(id: impl Into<String>, max_range_km: f64, snr_threshold: f64) -> RadarResult<Self> {
        let id = id.into();
        // Written as negated comparisons so NaN is rejected too.
        if !(max_range_km > 0.0) || !(snr_threshold >= 0.0) {
            return Err(RadarError::InvalidRadarParameters {
                id,
                max_range_km,
                snr_threshold,
            });
        }
        Ok(Self {
            id,
            range_gate: RangeGate::new(max_range_km),
            snr_gate: SnrGate::new(snr_threshold),
            classifier: ThreatClassifier::for_radar(snr_threshold),
        })
    }

    pub fn from_config(config: &RadarConfig) -> RadarResult<Self> {
        Self::new(config.id.clone(), config.max_range_km, config.snr_threshold)
    }

    pub fn config(&self) -> RadarConfig {
        RadarConfig {
            id: self.id.clone(),
            max_range_km: self.max_range_km(),
            snr_threshold: self.snr_threshold(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn max_range_km(&self) -> f64 {
        self.range_gate.max_range_km()
    }

    pub fn snr_threshold(&self) -> f64 {
        self.snr_gate.threshold()
    }

    /// Runs one target through the range gate, the SNR gate and the classifier.
    pub fn evaluate(&self, target: &Target) -> ScanOutcome {
        let log = ScanLog::new(&self.id);
        let position = target.position();

        let distance_km = distance(Point::ORIGIN, position);
        if !self.range_gate.admits(distance_km) {
            log.rejected(target.id(), self.range_gate.name(), distance_km);
            return ScanOutcome::OutOfRange { distance_km };
        }

        let snr = signal_to_noise(target.rcs(), distance_km);
        if !self.snr_gate.admits(snr) {
            log.rejected(target.id(), self.snr_gate.name(), snr);
            return ScanOutcome::BelowThreshold { snr };
        }

        let bearing_deg = bearing(Point::ORIGIN, position);
        let threat = self.classifier.tier(snr);
        ScanOutcome::Detected(Detection::new(
            target.id().to_owned(),
            distance_km,
            bearing_deg,
            snr,
            threat,
        ))
    }

    /// Detections for every target passing both gates, sorted by target id.
    pub fn scan(&self, targets: &[Target]) -> Vec<Detection> {
        let detections = targets
            .iter()
            .filter_map(|target| self.evaluate(target).into_detection())
            .collect();
        self.finish(targets.len(), detections)
    }

    /// Same as [`Radar::scan`], additionally recording each outcome in `metrics`.
    pub fn scan_with_metrics(&self, targets: &[Target], metrics: &ScanMetrics) -> Vec<Detection> {
        let detections = targets
            .iter()
            .filter_map(|target| {
                let outcome = self.evaluate(target);
                metrics.record_outcome(&outcome);
                outcome.into_detection()
            })
            .collect();
        self.finish(targets.len(), detections)
    }

    /// Evaluates targets on the rayon pool. Output is identical to [`Radar::scan`].
    #[cfg(feature = "parallel")]
    pub fn par_scan(&self, targets: &[Target]) -> Vec<Detection> {
        use rayon::prelude::*;

        let detections = targets
            .par_iter()
            .filter_map(|target| self.evaluate(target).into_detection())
            .collect();
        self.finish(targets.len(), detections)
    }

    /// Parallel counterpart of [`Radar::scan_with_metrics`].
    #[cfg(feature = "parallel")]
    pub fn par_scan_with_metrics(
        &self,
        targets: &[Target],
        metrics: &ScanMetrics,
    ) -> Vec<Detection> {
        use rayon::prelude::*;

        let detections = targets
            .par_iter()
            .filter_map(|target| {
                let outcome = self.evaluate(target);
                metrics.record_outcome(&outcome);
                outcome.into_detection()
            })
            .collect();
        self.finish(targets.len(), detections)
    }

    fn finish(&self, scanned: usize, mut detections: Vec<Detection>) -> Vec<Detection> {
        // Stable, so duplicate ids keep their input order.
        detections.sort_by(|a, b| a.target_id().cmp(b.target_id()));
        ScanLog::new(&self.id).record(&format!(
            "scan detections {} of {} targets",
            detections.len(),
            scanned
        ));
        detections
    }
}
