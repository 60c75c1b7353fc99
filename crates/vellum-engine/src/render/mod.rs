//! Upload and binding plumbing.
//!
//! Data flow per frame:
//! - vertex values are serialized once into an [`ArrayBuffer`] (size fixed at load)
//! - a [`crate::math::Transform`] is composed from translate/rotate/scale/ortho
//! - the binder pushes matrices and colors into the slots a [`ProgramDescriptor`]
//!   resolved, and points the program's attributes at the buffer
//!
//! Every function takes the [`GraphicsBackend`](crate::device::GraphicsBackend)
//! explicitly. Absent slots (`-1`) are skipped silently everywhere.

mod array_buffer;
mod binder;
mod index_buffer;
mod program;
mod uniforms;

pub use array_buffer::{ArrayBuffer, DIAGNOSTIC_HISTORY};
pub use binder::{
    bind_color, bind_matrix, bind_rgba, bind_texture_unit, bind_vec2, bind_vertex_layout,
    BoundVertexLayout,
};
pub use index_buffer::IndexBuffer;
pub use program::{uniform_names, AttributeLayout, ProgramDescriptor, UniformSlots};
pub use uniforms::{ShapeFragmentUniforms, ShapeVertexUniforms};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Color, Viewport};
    use crate::device::{BackendCall, GraphicsBackend, RecordingBackend};
    use crate::render::uniform_names::{
        MODEL_VIEW_MATRIX, MODULATE_COLOR, PROJECTION_MATRIX, TEXTURE, TEXTURE_SIZE,
    };
    use crate::vertex::{unit_quad, POSITIONS, TEXTURE_COORDINATES};

    #[test]
    fn sprite_frame_end_to_end() {
        let mut be = RecordingBackend::new();
        let program = be.define_program(
            &[PROJECTION_MATRIX, MODEL_VIEW_MATRIX, MODULATE_COLOR, TEXTURE, TEXTURE_SIZE],
            &[POSITIONS, TEXTURE_COORDINATES],
        );
        let desc = ProgramDescriptor::sprite_2d(&be, program);
        let ctx: &mut dyn GraphicsBackend = &mut be;

        // Load once.
        let quad = ArrayBuffer::from_items(ctx, &unit_quad(0.0, 0.0, 64.0, 64.0));
        let indices = IndexBuffer::from_items(&[[0u32, 1, 2], [0, 2, 3]]);
        assert_eq!(quad.byte_size(), 64);
        assert_eq!(indices.len(), 6);

        // Per frame.
        let mut vertex = ShapeVertexUniforms::for_viewport(Viewport::new(800.0, 600.0));
        vertex.model_view.translate(100.0, 50.0, 0.0);
        vertex.model_view.rotate_z(0.5);
        vertex.model_view.scale(2.0);
        vertex.link(ctx, &desc);
        ShapeFragmentUniforms::new(Color::rgb(1.0, 0.5, 0.25)).link(ctx, &desc);
        bind_vec2(ctx, desc.uniforms().texture_size, 64.0, 64.0);
        bind_texture_unit(ctx, desc.uniforms().texture, 0);

        let bound = bind_vertex_layout(ctx, &desc, &quad);
        // draw call goes here
        bound.unbind(ctx);

        let calls = be.calls();
        let matrices = calls
            .iter()
            .filter(|c| matches!(c, BackendCall::UniformMatrix4 { .. }))
            .count();
        let enables = calls
            .iter()
            .filter(|c| matches!(c, BackendCall::AttributeEnable { .. }))
            .count();
        let disables = calls
            .iter()
            .filter(|c| matches!(c, BackendCall::AttributeDisable { .. }))
            .count();

        assert_eq!(matrices, 2);
        assert_eq!(enables, 2);
        assert_eq!(enables, disables);
        assert!(calls.contains(&BackendCall::UniformVec2 { location: 4, value: [64.0, 64.0] }));
        assert!(calls.contains(&BackendCall::UniformInt { location: 3, value: 0 }));
    }
}
