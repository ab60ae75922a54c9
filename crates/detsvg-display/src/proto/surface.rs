use std::sync::Arc;

use core::f32::consts::PI;

use detsvg_core::coords::Point3;
use detsvg_core::style::{Fill, Stroke, Transform};
use detsvg_core::svg::Object;

/// Shape kind of a surface descriptor. Closed set, dispatched once per
/// render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Generic polygon built from the descriptor's raw vertices.
    Polygon,
    /// Disc, annulus, or annular sector described by radii and opening.
    Disc,
}

/// Boolean composition applied to a surface and its nested sub-surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BooleanOperation {
    None,
    /// The nested surface is cut out of this one via a mask.
    Subtraction,
}

/// One detector surface, as handed to the renderer.
///
/// Read-only to the display layer: rendering clones what it needs and never
/// writes back.
#[derive(Debug, Clone)]
pub struct Surface {
    pub kind: SurfaceKind,
    /// (inner, outer) radius. An inner radius of 0 means no ring.
    pub radii: (f32, f32),
    /// Angular opening [start, end] in radians. A full circle is
    /// `(-PI, PI)` up to floating error.
    pub opening: (f32, f32),
    /// Raw pre-projection vertices; used when `kind` is not `Disc`.
    pub vertices: Vec<Point3>,
    pub transform: Transform,
    pub fill: Fill,
    pub stroke: Stroke,
    /// At most one sub-surface combined via `boolean_operation`.
    pub boolean_surface: Option<Box<Surface>>,
    pub boolean_operation: BooleanOperation,
    /// Pre-built node to instantiate instead of synthesizing a shape.
    /// Shared by reference; the descriptor never deep-copies it.
    pub template_object: Option<Arc<Object>>,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            kind: SurfaceKind::Disc,
            radii: (0.0, 0.0),
            opening: (-PI, PI),
            vertices: Vec::new(),
            transform: Transform::identity(),
            fill: Fill::default(),
            stroke: Stroke::default(),
            boolean_surface: None,
            boolean_operation: BooleanOperation::None,
            template_object: None,
        }
    }
}

impl Surface {
    /// Full disc of the given outer radius.
    pub fn disc(outer_r: f32) -> Self {
        Self { radii: (0.0, outer_r), ..Self::default() }
    }

    /// Full annulus (disc with a hole).
    pub fn annulus(inner_r: f32, outer_r: f32) -> Self {
        Self { radii: (inner_r, outer_r), ..Self::default() }
    }

    /// Annular sector bounded by two radii and two angles (radians).
    pub fn sector(inner_r: f32, outer_r: f32, start: f32, end: f32) -> Self {
        Self { radii: (inner_r, outer_r), opening: (start, end), ..Self::default() }
    }

    /// Generic polygon from raw vertices.
    pub fn polygon(vertices: Vec<Point3>) -> Self {
        Self { kind: SurfaceKind::Polygon, vertices, ..Self::default() }
    }

    /// Attaches a surface to subtract from this one.
    pub fn subtract(mut self, inner: Surface) -> Self {
        self.boolean_surface = Some(Box::new(inner));
        self.boolean_operation = BooleanOperation::Subtraction;
        self
    }
}
