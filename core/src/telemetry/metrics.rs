use serde::Serialize;
use std::sync::Mutex;

use crate::radar::ScanOutcome;

/// Running totals of scan outcomes, safe to share between scans and worker threads.
pub struct ScanMetrics {
    inner: Mutex<ScanCounts>,
}

/// Point-in-time copy of the counters held by [`ScanMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounts {
    pub scanned: usize,
    pub out_of_range: usize,
    pub below_threshold: usize,
    pub detected: usize,
}

impl ScanMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ScanCounts::default()),
        }
    }

    pub fn record_outcome(&self, outcome: &ScanOutcome) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.scanned += 1;
            match outcome {
                ScanOutcome::OutOfRange { .. } => counts.out_of_range += 1,
                ScanOutcome::BelowThreshold { .. } => counts.below_threshold += 1,
                ScanOutcome::Detected(_) => counts.detected += 1,
            }
        }
    }

    pub fn snapshot(&self) -> ScanCounts {
        if let Ok(counts) = self.inner.lock() {
            *counts
        } else {
            ScanCounts::default()
        }
    }

    pub fn reset(&self) {
        if let Ok(mut counts) = self.inner.lock() {
            *counts = ScanCounts::default();
        }
    }
}

impl Default for ScanMetrics {
    fn default() -> Self {
        Self::new()
    }
}
