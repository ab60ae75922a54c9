use crate::coords::Point2;
use crate::style::{Font, Stroke};
use crate::svg::{Object, Shape};

/// Builds a text node at the given position.
///
/// `lines` are stacked vertically by the document writer; this layer only
/// records them.
pub fn text(id: impl Into<String>, position: Point2, lines: Vec<String>, font: Font) -> Object {
    let mut o = Object::container(id, "text");
    o.shape = Shape::Text { position, lines, font };
    o.stroke = Stroke::none();
    o
}
