//! Surface descriptors.
//!
//! Read-only input data for the display renderers: shape kind, radii,
//! angular opening, raw vertices, style, and optional boolean / template
//! attachments. Descriptors carry no drawing logic.

mod surface;

pub use surface::{BooleanOperation, Surface, SurfaceKind};
