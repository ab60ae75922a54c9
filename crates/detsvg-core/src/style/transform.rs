/// Node transform: scale, then rotate, then translate.
///
/// Components mirror the SVG attribute model:
/// - `translate` is `(dx, dy)`
/// - `rotate` is `(angle_deg, cx, cy)` — rotation about a pivot point
/// - `scale` is `(sx, sy)`, nonuniform allowed
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub translate: (f32, f32),
    pub rotate: (f32, f32, f32),
    pub scale: (f32, f32),
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { translate: (0.0, 0.0), rotate: (0.0, 0.0, 0.0), scale: (1.0, 1.0) }
    }

    #[inline]
    pub const fn translated(dx: f32, dy: f32) -> Self {
        Self { translate: (dx, dy), rotate: (0.0, 0.0, 0.0), scale: (1.0, 1.0) }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
