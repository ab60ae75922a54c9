use crate::coords::Point2;
use crate::style::{Fill, Stroke, Transform};
use crate::svg::{Object, Shape};

/// Builds a filled circle node.
pub fn circle(
    id: impl Into<String>,
    center: Point2,
    radius: f32,
    fill: Fill,
    stroke: Stroke,
    transform: Transform,
) -> Object {
    let mut o = Object::container(id, "circle");
    o.shape = Shape::Circle { center, radius };
    o.fill = fill;
    o.stroke = stroke;
    o.transform = transform;
    o
}
