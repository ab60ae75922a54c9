use crate::style::Color;

/// Text style for label nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Size in view units.
    pub size: f32,
    pub color: Color,
    pub family: String,
}

impl Font {
    #[inline]
    pub fn new(size: f32) -> Self {
        Self { size, ..Self::default() }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self { size: 12.0, color: Color::black(), family: "Andale Mono".to_owned() }
    }
}
