use bytemuck::{Pod, Zeroable};

use crate::bufferable::FloatBufferable;
use crate::coords::Color;

use super::{VertexField, VertexFormat, COLORS, POSITIONS};

/// Untextured, uncolored 2D vertex. Color comes from the modulate uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub x: f32,
    pub y: f32,
}

impl PositionVertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl FloatBufferable for PositionVertex {
    #[inline]
    fn write_floats(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[self.x, self.y]);
    }

    #[inline]
    fn float_count(&self) -> usize {
        Self::FLOAT_COUNT
    }
}

impl VertexFormat for PositionVertex {
    const FLOAT_COUNT: usize = 2;
    const FIELDS: &'static [VertexField] = &[VertexField::new(POSITIONS, 2, 0)];
}

/// 2D vertex with a per-vertex color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionColorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for PositionColorVertex {
    fn default() -> Self {
        Self::with_color(0.0, 0.0, Color::white())
    }
}

impl PositionColorVertex {
    #[inline]
    pub const fn new(x: f32, y: f32, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { x, y, r, g, b, a }
    }

    #[inline]
    pub const fn with_color(x: f32, y: f32, color: Color) -> Self {
        Self::new(x, y, color.r, color.g, color.b, color.a)
    }

    #[inline]
    pub const fn color(&self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }
}

impl FloatBufferable for PositionColorVertex {
    #[inline]
    fn write_floats(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[self.x, self.y, self.r, self.g, self.b, self.a]);
    }

    #[inline]
    fn float_count(&self) -> usize {
        Self::FLOAT_COUNT
    }
}

impl VertexFormat for PositionColorVertex {
    const FLOAT_COUNT: usize = 6;
    const FIELDS: &'static [VertexField] = &[
        VertexField::new(POSITIONS, 2, 0),
        VertexField::new(COLORS, 4, 2),
    ];
}
