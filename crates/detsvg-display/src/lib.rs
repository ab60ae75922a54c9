//! detsvg display crate.
//!
//! The domain layer over `detsvg-core`: detector-surface descriptors and
//! the renderers that turn them into drawable shape trees.

pub mod proto;
pub mod display;
