use serde::{Deserialize, Serialize};

/// Planar position in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Fixed sensor location every scan measures from.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points. Non-finite coordinates propagate.
pub fn distance(origin: Point, point: Point) -> f64 {
    (point.x - origin.x).hypot(point.y - origin.y)
}

/// Angle of the vector from `origin` to `point`, counter-clockwise from +x, in `[0, 360)`.
///
/// Coincident points yield `0.0`.
pub fn bearing(origin: Point, point: Point) -> f64 {
    let angle = (point.y - origin.y).atan2(point.x - origin.x).to_degrees();
    // rem_euclid can round up to exactly 360.0 for tiny negative angles; this form cannot.
    ((angle % 360.0) + 360.0) % 360.0
}
