use std::collections::BTreeMap;

use crate::coords::Point2;
use crate::style::{Fill, Font, Marker, Stroke, Transform};

/// Geometry payload of a drawable node.
///
/// Extending the tree:
/// - add a new variant here
/// - add a matching constructor under `draw::*`
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Pure container (`g`, `mask`): geometry lives in the children.
    Group,
    Circle { center: Point2, radius: f32 },
    Polygon { points: Vec<Point2> },
    /// Open stroked point chain (measure arcs).
    Polyline { points: Vec<Point2> },
    Line { start: Point2, end: Point2 },
    Text { position: Point2, lines: Vec<String>, font: Font },
    /// Measure-line end marker, tip pointing along `direction` (radians).
    Marker { position: Point2, direction: f32, marker: Marker },
}

/// One drawable node.
///
/// Trees are value-owned: children and definitions are held by value, each
/// node has exactly one owner. Nothing in the tree aliases.
///
/// `definitions` holds nodes that are referenced rather than painted in
/// place (masks, reusable symbols); a reference is expressed through an
/// entry in `attributes` (e.g. `mask` → `url(#some_mask)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub id: String,
    /// SVG element tag (`circle`, `polygon`, `line`, `text`, `g`, `mask`).
    pub tag: String,
    pub shape: Shape,
    pub fill: Fill,
    pub stroke: Stroke,
    pub transform: Transform,
    /// Extra string attributes. Keyed deterministically.
    pub attributes: BTreeMap<String, String>,
    /// Referenced (not painted) sub-nodes.
    pub definitions: Vec<Object>,
    /// Painted sub-nodes, in paint order.
    pub children: Vec<Object>,
}

impl Object {
    /// Creates an empty container node with the given tag.
    pub fn container(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            shape: Shape::Group,
            fill: Fill::default(),
            stroke: Stroke::default(),
            transform: Transform::identity(),
            attributes: BTreeMap::new(),
            definitions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child node. Paint order is insertion order.
    #[inline]
    pub fn add_object(&mut self, child: Object) {
        self.children.push(child);
    }

    /// Appends several children at once, preserving their order.
    #[inline]
    pub fn add_objects(&mut self, children: Vec<Object>) {
        self.children.extend(children);
    }

    /// Sets a string attribute, replacing any previous value for the key.
    #[inline]
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Total node count of this subtree, children and definitions included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .chain(self.definitions.iter())
            .map(Object::node_count)
            .sum::<usize>()
    }
}
