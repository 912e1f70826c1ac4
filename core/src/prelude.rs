/// Errors raised when a radar object cannot be constructed from its inputs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RadarError {
    #[error("invalid target parameters for {id}: rcs {rcs} must be >= 0")]
    InvalidTargetParameters { id: String, rcs: f64 },
    #[error("invalid radar parameters for {id}: max range {max_range_km} km must be > 0 and snr threshold {snr_threshold} must be >= 0")]
    InvalidRadarParameters {
        id: String,
        max_range_km: f64,
        snr_threshold: f64,
    },
    #[error("invalid classification input: snr {snr}, threshold {threshold}")]
    InvalidClassificationInput { snr: f64, threshold: f64 },
}

pub type RadarResult<T> = Result<T, RadarError>;

/// Admission filter applied to a single scalar measurement during a scan.
pub trait Gate {
    /// Short name used when logging rejections.
    fn name(&self) -> &'static str;
    fn admits(&self, measurement: f64) -> bool;
}
