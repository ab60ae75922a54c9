use crate::style::{Color, Fill, Stroke};

/// Line-end marker for measures.
///
/// `kind` uses glyph notation: `"<"` open arrowhead, `"<<"` filled
/// arrowhead, `"|<"` / `"|<<"` the same with an end bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: String,
    /// Tip-to-base extent in view units.
    pub size: f32,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Marker {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), ..Self::default() }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            kind: "|<".to_owned(),
            size: 4.0,
            fill: Fill::new(Color::black()),
            stroke: Stroke::default(),
        }
    }
}
