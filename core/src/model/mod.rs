pub mod detection;
pub mod target;
pub mod threat;

pub use detection::Detection;
pub use target::Target;
pub use threat::{Priority, ThreatLevel};
