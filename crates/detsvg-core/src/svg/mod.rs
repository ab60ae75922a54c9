//! Drawable object tree.
//!
//! Responsibilities:
//! - store one node's identity, style, transform and geometry payload
//! - compose nodes into value-owned trees (children + nested definitions)
//! - keep attribute iteration deterministic so identical inputs build
//!   structurally identical trees

mod object;

pub use object::{Object, Shape};
