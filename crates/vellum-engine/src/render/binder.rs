use crate::coords::Color;
use crate::device::{GraphicsBackend, Location};
use crate::math::Transform;

use super::{ArrayBuffer, ProgramDescriptor};

// ── uniforms ──────────────────────────────────────────────────────────────

/// Uploads `transform` as a column-major 4x4 uniform. No-op for an absent slot.
pub fn bind_matrix(ctx: &mut dyn GraphicsBackend, slot: Location, transform: &Transform) {
    if let Some(loc) = slot.get() {
        ctx.uniform_matrix4(loc, transform.as_slice());
    }
}

/// Uploads a 4-component color uniform. No-op for an absent slot.
pub fn bind_rgba(ctx: &mut dyn GraphicsBackend, slot: Location, r: f32, g: f32, b: f32, a: f32) {
    if let Some(loc) = slot.get() {
        ctx.uniform_vec4(loc, [r, g, b, a]);
    }
}

/// [`bind_rgba`] taking a [`Color`].
#[inline]
pub fn bind_color(ctx: &mut dyn GraphicsBackend, slot: Location, color: Color) {
    bind_rgba(ctx, slot, color.r, color.g, color.b, color.a);
}

/// Uploads a 2-component uniform (e.g. texture size). No-op for an absent slot.
pub fn bind_vec2(ctx: &mut dyn GraphicsBackend, slot: Location, x: f32, y: f32) {
    if let Some(loc) = slot.get() {
        ctx.uniform_vec2(loc, [x, y]);
    }
}

/// Points a sampler uniform at texture unit `unit`. No-op for an absent slot.
pub fn bind_texture_unit(ctx: &mut dyn GraphicsBackend, slot: Location, unit: i32) {
    if let Some(loc) = slot.get() {
        ctx.uniform_int(loc, unit);
    }
}

// ── vertex layout ─────────────────────────────────────────────────────────

/// Attributes enabled by [`bind_vertex_layout`].
///
/// Must be passed to [`unbind`](Self::unbind) within the same frame; it
/// disables exactly what was enabled.
#[derive(Debug, Default, PartialEq, Eq)]
#[must_use = "bound attributes must be disabled with `unbind`"]
pub struct BoundVertexLayout {
    enabled: Vec<u32>,
}

impl BoundVertexLayout {
    /// Locations enabled by the bind, in enable order.
    #[inline]
    pub fn enabled(&self) -> &[u32] {
        &self.enabled
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Disables the enabled attributes in reverse order.
    pub fn unbind(self, ctx: &mut dyn GraphicsBackend) {
        for &loc in self.enabled.iter().rev() {
            ctx.attribute_disable(loc);
        }
    }
}

/// Binds `buffer`, makes `program` current and points every present attribute
/// at the buffer.
///
/// Attributes absent from the program are skipped. A buffer that was never
/// loaded makes the whole call a no-op.
pub fn bind_vertex_layout<T>(
    ctx: &mut dyn GraphicsBackend,
    program: &ProgramDescriptor,
    buffer: &ArrayBuffer<T>,
) -> BoundVertexLayout {
    if !buffer.is_loaded() {
        return BoundVertexLayout::default();
    }

    buffer.bind(ctx);
    ctx.program_use(program.program());

    let mut enabled = Vec::new();
    for attr in program.attributes() {
        let Some(loc) = attr.location.get() else { continue };
        ctx.attribute_enable(loc);
        ctx.attribute_pointer(loc, attr.components, attr.stride, attr.offset);
        enabled.push(loc);
    }

    BoundVertexLayout { enabled }
}
