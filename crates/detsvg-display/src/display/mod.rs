//! Display renderers.
//!
//! Responsibilities:
//! - turn one surface descriptor + view projector into one drawable node,
//!   including ring and boolean-subtraction masks (`surface`)
//! - project pseudorapidity values onto z-r view lines (`eta_lines`)
//!
//! Both renderers are pure over their inputs and allocate fresh trees on
//! every call.

mod eta;
mod surface;

pub use eta::{EtaGroup, eta_lines};
pub use surface::{SurfaceOptions, surface};
