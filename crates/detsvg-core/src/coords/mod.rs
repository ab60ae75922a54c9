//! Coordinate types shared across primitives and the display layer.
//!
//! Canonical drawing space:
//! - Abstract view units (the caller picks the scale)
//! - +X right, +Y up (detector convention; document writers flip Y)
//!
//! Raw descriptor points are 3D; a view projector maps them into the
//! 2D plane being drawn.

mod point;

pub use point::{Point2, Point3};
