use crate::style::Color;

/// Area fill for a drawable node.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Fully opaque white fill.
    ///
    /// Used for mask members: the visible mask color comes from an explicit
    /// `fill` attribute on the node, so only full opacity matters here.
    #[inline]
    pub const fn opaque() -> Self {
        Self { color: Color::white() }
    }
}

impl Default for Fill {
    fn default() -> Self {
        // Mid gray, the neutral surface color before a caller styles it.
        Self::new(Color::rgb(200, 200, 200))
    }
}
