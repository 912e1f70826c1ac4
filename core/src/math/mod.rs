pub mod geometry;

pub use geometry::{bearing, distance, Point};
