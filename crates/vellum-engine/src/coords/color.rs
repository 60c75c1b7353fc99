use crate::bufferable::FloatBufferable;

/// Straight-alpha RGBA color, serialized as `r, g, b, a`.
///
/// Defaults to opaque white so that an unset modulate color leaves texels unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

impl Color {
    pub const FLOAT_COUNT: usize = 4;

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Sets RGB and forces alpha to 1.
    #[inline]
    pub fn set_rgb(&mut self, r: f32, g: f32, b: f32) {
        *self = Self::rgb(r, g, b);
    }

    #[inline]
    pub fn set_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) {
        *self = Self::new(r, g, b, a);
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl FloatBufferable for Color {
    #[inline]
    fn write_floats(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.to_array());
    }

    #[inline]
    fn float_count(&self) -> usize {
        Self::FLOAT_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(Color::default(), Color::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn set_rgb_resets_alpha() {
        let mut c = Color::new(0.0, 0.0, 0.0, 0.25);
        c.set_rgb(0.5, 0.5, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn serializes_rgba_in_order() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        let mut out = Vec::new();
        c.write_floats(&mut out);
        assert_eq!(out, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(out.len(), c.float_count());
    }
}
