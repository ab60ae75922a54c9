//! detsvg core crate.
//!
//! This crate owns the vector-graphics substrate consumed by the display
//! layer: coordinate and style value types, the drawable object tree, and
//! the primitive constructors that build its nodes.

pub mod logging;
pub mod coords;
pub mod style;
pub mod svg;
pub mod draw;
pub mod generators;
pub mod utils;
