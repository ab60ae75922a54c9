use crate::style::Color;

/// Outline stroke for a drawable node.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Width in view units. `0` draws nothing.
    pub width: f32,
    /// SVG dash pattern; empty = solid.
    pub dash: Vec<u32>,
}

impl Stroke {
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width, dash: Vec::new() }
    }

    /// Silent stroke: zero width, transparent color.
    ///
    /// Mask members use this so the mask geometry contributes no outline of
    /// its own.
    #[inline]
    pub fn none() -> Self {
        Self { color: Color::transparent(), width: 0.0, dash: Vec::new() }
    }

    #[inline]
    pub fn with_dash(mut self, dash: Vec<u32>) -> Self {
        self.dash = dash;
        self
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Color::black(), 1.0)
    }
}
