use crate::prelude::Gate;

/// Admits targets no farther than the configured maximum range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeGate {
    max_range_km: f64,
}

impl RangeGate {
    pub fn new(max_range_km: f64) -> Self {
        Self { max_range_km }
    }

    pub fn max_range_km(&self) -> f64 {
        self.max_range_km
    }
}

impl Gate for RangeGate {
    fn name(&self) -> &'static str {
        "range"
    }

    /// The boundary itself is inside the gate. A NaN distance is never admitted.
    fn admits(&self, distance_km: f64) -> bool {
        distance_km <= self.max_range_km
    }
}
