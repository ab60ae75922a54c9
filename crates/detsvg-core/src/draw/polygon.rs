use crate::coords::Point2;
use crate::style::{Color, Fill, Stroke, Transform};
use crate::svg::{Object, Shape};

/// Builds a closed polygon node from already-projected 2D points.
pub fn polygon(
    id: impl Into<String>,
    points: Vec<Point2>,
    fill: Fill,
    stroke: Stroke,
    transform: Transform,
) -> Object {
    let mut o = Object::container(id, "polygon");
    o.shape = Shape::Polygon { points };
    o.fill = fill;
    o.stroke = stroke;
    o.transform = transform;
    o
}

/// Builds an open polyline node from already-projected 2D points.
///
/// The chain is stroked, never filled.
pub fn polyline(id: impl Into<String>, points: Vec<Point2>, stroke: Stroke) -> Object {
    let mut o = Object::container(id, "polyline");
    o.shape = Shape::Polyline { points };
    o.fill = Fill::new(Color::transparent());
    o.stroke = stroke;
    o
}
