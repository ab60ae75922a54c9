//! Primitive constructors.
//!
//! Each function builds one [`Object`](crate::svg::Object) with the right
//! tag and geometry payload. No validation happens here: degenerate radii
//! or short vertex lists build exactly the degenerate node that was asked
//! for, and the caller owns the consequences.

mod circle;
mod group;
mod line;
mod marker;
mod measure;
mod polygon;
mod template;
mod text;

pub use circle::circle;
pub use group::group;
pub use line::line;
pub use marker::marker;
pub use measure::{arc_measure, measure};
pub use polygon::{polygon, polyline};
pub use template::from_template;
pub use text::text;
