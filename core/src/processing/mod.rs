pub mod range;
pub mod snr;
pub mod threat;

pub use range::RangeGate;
pub use snr::{signal_to_noise, SnrGate};
pub use threat::{classify, ThreatClassifier};
