use log::{debug, info};

/// Log sink for a single radar, tagging every line with the radar id.
pub struct ScanLog<'a> {
    radar_id: &'a str,
}

impl<'a> ScanLog<'a> {
    pub fn new(radar_id: &'a str) -> Self {
        Self { radar_id }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.radar_id, message);
    }

    pub fn rejected(&self, target_id: &str, gate: &str, measurement: f64) {
        debug!(
            "[{}] target {} rejected by {} gate at {:.4}",
            self.radar_id, target_id, gate, measurement
        );
    }
}
