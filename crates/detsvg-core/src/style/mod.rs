//! Style value types attached to drawable nodes.
//!
//! Scope:
//! - color representation (sRGB bytes + opacity, the SVG attribute model)
//! - fill, stroke, font, and measure-marker bundles
//! - the node transform (scale, then rotate, then translate)
//!
//! Geometry types remain in `coords`.

mod color;
mod fill;
mod font;
mod marker;
mod stroke;
mod transform;

pub use color::Color;
pub use fill::Fill;
pub use font::Font;
pub use marker::Marker;
pub use stroke::Stroke;
pub use transform::Transform;
