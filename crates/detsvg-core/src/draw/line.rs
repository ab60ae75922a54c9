use crate::coords::Point2;
use crate::style::{Fill, Stroke, Transform};
use crate::svg::{Object, Shape};

/// Builds a line node between two 2D points.
pub fn line(id: impl Into<String>, start: Point2, end: Point2, stroke: Stroke) -> Object {
    let mut o = Object::container(id, "line");
    o.shape = Shape::Line { start, end };
    // Lines have no area; the fill is inert.
    o.fill = Fill::default();
    o.stroke = stroke;
    o.transform = Transform::identity();
    o
}
