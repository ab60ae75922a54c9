use std::sync::Arc;

use crate::style::{Fill, Stroke, Transform};
use crate::svg::Object;

/// Instantiates a shared template node under a new identity, style and
/// transform.
///
/// The template itself is never mutated; the instance is a deep copy with
/// the top-level id, fill, stroke and transform replaced. Nested ids inside
/// the template are kept as-is — reusing one template several times in a
/// document is the caller's naming problem.
pub fn from_template(
    id: impl Into<String>,
    template: &Arc<Object>,
    fill: Fill,
    stroke: Stroke,
    transform: Transform,
) -> Object {
    let mut o = template.as_ref().clone();
    o.id = id.into();
    o.fill = fill;
    o.stroke = stroke;
    o.transform = transform;
    o
}
