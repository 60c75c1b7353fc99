use crate::math::Transform;

/// Viewport size in logical pixels.
///
/// Renderers use it as the basis for the pixel-space projection uploaded to the
/// `ProjectionMatrix` uniform.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Pixel-space projection (top-left origin, +Y down).
    ///
    /// Returns `None` for a degenerate viewport, whose projection would divide by zero.
    pub fn projection(self) -> Option<Transform> {
        if !self.is_valid() {
            return None;
        }
        let mut t = Transform::identity();
        t.ortho_size(self.width, self.height);
        Some(t)
    }
}
