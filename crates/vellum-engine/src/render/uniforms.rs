use crate::coords::{Color, Viewport};
use crate::device::GraphicsBackend;
use crate::math::Transform;

use super::binder::{bind_color, bind_matrix};
use super::ProgramDescriptor;

/// Vertex-stage uniforms of the 2D programs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeVertexUniforms {
    pub projection: Transform,
    pub model_view: Transform,
}

impl ShapeVertexUniforms {
    /// Pixel-space projection for `viewport` and an identity model-view.
    ///
    /// A degenerate viewport keeps the identity projection.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            projection: viewport.projection().unwrap_or_default(),
            model_view: Transform::identity(),
        }
    }

    /// Pushes both matrices into the program's resolved slots.
    pub fn link(&self, ctx: &mut dyn GraphicsBackend, program: &ProgramDescriptor) {
        let slots = program.uniforms();
        ctx.program_use(program.program());
        bind_matrix(ctx, slots.projection_matrix, &self.projection);
        bind_matrix(ctx, slots.model_view_matrix, &self.model_view);
    }
}

/// Fragment-stage uniforms of the 2D programs.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShapeFragmentUniforms {
    pub color: Color,
}

impl ShapeFragmentUniforms {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Pushes the modulate color into the program's resolved slot.
    pub fn link(&self, ctx: &mut dyn GraphicsBackend, program: &ProgramDescriptor) {
        ctx.program_use(program.program());
        bind_color(ctx, program.uniforms().modulate_color, self.color);
    }
}
