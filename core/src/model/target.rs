use serde::{Deserialize, Serialize};

use crate::math::Point;
use crate::prelude::{RadarError, RadarResult};

/// Simulated object presented to a radar scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTarget")]
pub struct Target {
    id: String,
    x: f64,
    y: f64,
    rcs: f64,
}

/// Unvalidated wire shape of a [`Target`].
#[derive(Deserialize)]
struct RawTarget {
    id: String,
    x: f64,
    y: f64,
    rcs: f64,
}

impl TryFrom<RawTarget> for Target {
    type Error = RadarError;

    fn try_from(raw: RawTarget) -> RadarResult<Self> {
        Target::new(raw.id, raw.x, raw.y, raw.rcs)
    }
}

impl Target {
    /// Builds a target at `(x, y)` km. Fails unless `rcs >= 0`.
    pub fn new(id: impl Into<String>, x: f64, y: f64, rcs: f64) -> RadarResult<Self> {
        let id = id.into();
        // NaN fails this comparison as well.
        if !(rcs >= 0.0) {
            return Err(RadarError::InvalidTargetParameters { id, rcs });
        }
        Ok(Self { id, x, y, rcs })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn rcs(&self) -> f64 {
        self.rcs
    }
}
