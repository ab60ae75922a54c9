/// Straight-alpha sRGB color.
///
/// Components are stored the way SVG attributes express them: byte RGB
/// channels plus a separate `[0, 1]` opacity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub rgb: [u8; 3],
    pub opacity: f32,
}

impl Color {
    /// Creates a fully opaque color from byte channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b], opacity: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self { rgb: [0, 0, 0], opacity: 0.0 }
    }

    /// Returns the same color with the given opacity, clamped to `[0, 1]`.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { rgb: self.rgb, opacity: opacity.clamp(0.0, 1.0) }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.opacity >= 1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_opacity_clamps() {
        assert_eq!(Color::white().with_opacity(2.0).opacity, 1.0);
        assert_eq!(Color::white().with_opacity(-1.0).opacity, 0.0);
    }

    #[test]
    fn default_is_opaque_black() {
        let c = Color::default();
        assert_eq!(c.rgb, [0, 0, 0]);
        assert!(c.is_opaque());
    }
}
