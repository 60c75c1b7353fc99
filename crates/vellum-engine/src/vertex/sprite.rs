use bytemuck::{Pod, Zeroable};

use crate::bufferable::FloatBufferable;
use crate::coords::Color;

use super::{VertexField, VertexFormat, COLORS, POSITIONS, TEXTURE_COORDINATES};

/// Textured 2D vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PositionTexCoordVertex {
    pub x: f32,
    pub y: f32,
    pub u: f32,
    pub v: f32,
}

impl PositionTexCoordVertex {
    #[inline]
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self { x, y, u, v }
    }
}

impl FloatBufferable for PositionTexCoordVertex {
    #[inline]
    fn write_floats(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[self.x, self.y, self.u, self.v]);
    }

    #[inline]
    fn float_count(&self) -> usize {
        Self::FLOAT_COUNT
    }
}

impl VertexFormat for PositionTexCoordVertex {
    const FLOAT_COUNT: usize = 4;
    const FIELDS: &'static [VertexField] = &[
        VertexField::new(POSITIONS, 2, 0),
        VertexField::new(TEXTURE_COORDINATES, 2, 2),
    ];
}

/// Textured 2D vertex with a per-vertex tint.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionTexCoordColorVertex {
    pub x: f32,
    pub y: f32,
    pub u: f32,
    pub v: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for PositionTexCoordColorVertex {
    fn default() -> Self {
        Self::with_color(0.0, 0.0, 0.0, 0.0, Color::white())
    }
}

impl PositionTexCoordColorVertex {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { x, y, u, v, r, g, b, a }
    }

    #[inline]
    pub const fn with_color(x: f32, y: f32, u: f32, v: f32, color: Color) -> Self {
        Self::new(x, y, u, v, color.r, color.g, color.b, color.a)
    }

    #[inline]
    pub const fn color(&self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }
}

impl FloatBufferable for PositionTexCoordColorVertex {
    #[inline]
    fn write_floats(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[
            self.x, self.y, self.u, self.v, self.r, self.g, self.b, self.a,
        ]);
    }

    #[inline]
    fn float_count(&self) -> usize {
        Self::FLOAT_COUNT
    }
}

impl VertexFormat for PositionTexCoordColorVertex {
    const FLOAT_COUNT: usize = 8;
    const FIELDS: &'static [VertexField] = &[
        VertexField::new(POSITIONS, 2, 0),
        VertexField::new(TEXTURE_COORDINATES, 2, 2),
        VertexField::new(COLORS, 4, 4),
    ];
}

/// Quad covering the full texture, counter-clockwise on screen from the top-left corner.
///
/// Pair with indices `[0, 1, 2, 0, 2, 3]`.
pub fn unit_quad(x: f32, y: f32, width: f32, height: f32) -> [PositionTexCoordVertex; 4] {
    quad([x, y, x + width, y + height], [0.0, 0.0, 1.0, 1.0])
}

/// `[start_x, start_y, end_x, end_y]` and `[start_u, start_v, end_u, end_v]`.
fn quad(xy: [f32; 4], uv: [f32; 4]) -> [PositionTexCoordVertex; 4] {
    let [x0, y0, x1, y1] = xy;
    let [u0, v0, u1, v1] = uv;
    [
        PositionTexCoordVertex::new(x0, y0, u0, v0),
        PositionTexCoordVertex::new(x0, y1, u0, v1),
        PositionTexCoordVertex::new(x1, y1, u1, v1),
        PositionTexCoordVertex::new(x1, y0, u1, v0),
    ]
}

/// Rounds half up; inputs are non-negative pixel sizes.
#[inline]
fn round_px(v: f32) -> f32 {
    (v + 0.5).floor()
}

/// Screen rectangle and texture window of a sprite.
///
/// Built from a texture's pixel size, the frame is centered on the origin so the
/// model-view transform positions the sprite by its middle. `scale_factor > 1`
/// treats the texture as high-density art and shrinks the on-screen size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteFrame {
    /// On-screen size after `scale_factor`, whole pixels.
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,

    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,

    pub start_u: f32,
    pub start_v: f32,
    pub end_u: f32,
    pub end_v: f32,
}

impl Default for SpriteFrame {
    /// 128x128 placeholder frame around the origin, no texture size yet.
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            scale_factor: 1.0,
            start_x: -64.0,
            start_y: -64.0,
            end_x: 64.0,
            end_y: 64.0,
            start_u: 0.0,
            start_v: 0.0,
            end_u: 1.0,
            end_v: 1.0,
        }
    }
}

impl SpriteFrame {
    /// Centered frame for a texture of `texture_width` x `texture_height` pixels.
    pub fn from_texture_size(texture_width: u32, texture_height: u32, scale_factor: f32) -> Self {
        let mut width = texture_width as f32;
        let mut height = texture_height as f32;
        if scale_factor > 1.0 {
            width = round_px(width / scale_factor);
            height = round_px(height / scale_factor);
        }

        let half_w = round_px(width * 0.5);
        let half_h = round_px(height * 0.5);

        Self {
            width,
            height,
            scale_factor,
            start_x: -half_w,
            start_y: -half_h,
            end_x: half_w,
            end_y: half_h,
            ..Self::default()
        }
    }

    /// Overrides the screen rectangle; the texture window is unchanged.
    pub fn set_frame(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.start_x = x;
        self.start_y = y;
        self.end_x = x + width;
        self.end_y = y + height;
    }

    /// Half extents used for centering, whole pixels.
    #[inline]
    pub fn half_size(&self) -> (f32, f32) {
        (self.end_x.max(-self.start_x), self.end_y.max(-self.start_y))
    }

    /// The four vertices of this frame, same winding as [`unit_quad`].
    pub fn vertices(&self) -> [PositionTexCoordVertex; 4] {
        quad(
            [self.start_x, self.start_y, self.end_x, self.end_y],
            [self.start_u, self.start_v, self.end_u, self.end_v],
        )
    }
}
