pub mod log;
pub mod metrics;

pub use log::ScanLog;
pub use metrics::{ScanCounts, ScanMetrics};
