//! Contour generators.
//!
//! Pure point-sequence builders used by the display layer before a shape
//! node exists. Sampling is deterministic: the same arguments always yield
//! the same vertex list.

use crate::coords::Point2;

/// Arc sampling density: one segment per this many radians of swept angle.
const SEGMENT_STEP: f32 = 4.0_f32 * core::f32::consts::PI / 180.0;

/// Minimum number of segments per arc, so tiny sectors stay polygons.
const MIN_SEGMENTS: usize = 2;

/// Builds the closed boundary of an annular sector.
///
/// The contour runs along the outer arc from `angle_start` to `angle_end`,
/// then back along the inner arc. A zero inner radius collapses the inner
/// arc to the origin, producing a pie slice.
///
/// Angles are in radians, measured counterclockwise from +X. No validation:
/// swapped radii or a reversed angle interval produce the corresponding
/// degenerate contour.
pub fn sector_contour(inner_r: f32, outer_r: f32, angle_start: f32, angle_end: f32) -> Vec<Point2> {
    let mut contour = arc_points(outer_r, angle_start, angle_end);
    if inner_r > 0.0 {
        // Sampled end-to-start, so the contour walks back along the inner arc.
        contour.extend(arc_points(inner_r, angle_end, angle_start));
    } else {
        contour.push(Point2::zero());
    }
    contour
}

/// Samples an arc of the given radius between two angles (radians),
/// endpoints included, at the same density as [`sector_contour`].
pub fn arc_points(radius: f32, angle_start: f32, angle_end: f32) -> Vec<Point2> {
    let swept = (angle_end - angle_start).abs();
    let segments = ((swept / SEGMENT_STEP).ceil() as usize).max(MIN_SEGMENTS);
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let phi = angle_start + t * (angle_end - angle_start);
            Point2::new(radius * phi.cos(), radius * phi.sin())
        })
        .collect()
}
