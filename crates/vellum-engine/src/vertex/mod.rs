//! Vertex schemas.
//!
//! Four closed, fixed-shape aggregates. Each is `#[repr(C)]` plain data whose
//! field order is also its serialization order, so `write_floats` output and a
//! `bytemuck` cast of a vertex slice are the same bytes.
//!
//! | Type | Fields | Floats |
//! |---|---|---|
//! | [`PositionVertex`] | x, y | 2 |
//! | [`PositionColorVertex`] | x, y, r, g, b, a | 6 |
//! | [`PositionTexCoordVertex`] | x, y, u, v | 4 |
//! | [`PositionTexCoordColorVertex`] | x, y, u, v, r, g, b, a | 8 |

mod shape;
mod sprite;

pub use shape::{PositionColorVertex, PositionVertex};
pub use sprite::{unit_quad, PositionTexCoordColorVertex, PositionTexCoordVertex, SpriteFrame};

use crate::bufferable::FloatBufferable;

/// Shader attribute name for the position field.
pub const POSITIONS: &str = "Positions";
/// Shader attribute name for the texture coordinate field.
pub const TEXTURE_COORDINATES: &str = "TextureCoordinates";
/// Shader attribute name for the color field.
pub const COLORS: &str = "Colors";

/// One named field inside a vertex.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexField {
    /// Attribute name the shader declares for this field.
    pub name: &'static str,
    /// Float components (2 or 4).
    pub components: u32,
    /// Offset from the start of the vertex, in floats.
    pub offset_floats: u32,
}

impl VertexField {
    pub const fn new(name: &'static str, components: u32, offset_floats: u32) -> Self {
        Self {
            name,
            components,
            offset_floats,
        }
    }

    /// Byte offset within a vertex.
    #[inline]
    pub const fn byte_offset(&self) -> u32 {
        self.offset_floats * 4
    }
}

/// Static shape of a vertex type.
///
/// `FIELDS` must cover exactly `FLOAT_COUNT` floats, contiguous and in
/// serialization order.
pub trait VertexFormat: FloatBufferable {
    const FLOAT_COUNT: usize;
    const FIELDS: &'static [VertexField];

    /// Distance between consecutive vertices, in bytes.
    #[inline]
    fn stride() -> u32 {
        (Self::FLOAT_COUNT * 4) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_format<V: VertexFormat + bytemuck::Pod>(v: V) {
        let mut out = Vec::new();
        v.write_floats(&mut out);
        assert_eq!(out.len(), v.float_count());
        assert_eq!(out.len(), V::FLOAT_COUNT);
        assert_eq!(std::mem::size_of::<V>(), V::FLOAT_COUNT * 4);

        // Serialization order is the in-memory order.
        let cast: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(out.as_slice(), cast);

        // Fields tile the vertex without gaps.
        let mut next = 0;
        for field in V::FIELDS {
            assert_eq!(field.offset_floats, next, "field {} misplaced", field.name);
            next += field.components;
        }
        assert_eq!(next as usize, V::FLOAT_COUNT);
    }

    #[test]
    fn every_variant_honours_the_contract() {
        check_format(PositionVertex::new(1.0, 2.0));
        check_format(PositionColorVertex::new(1.0, 2.0, 0.1, 0.2, 0.3, 0.4));
        check_format(PositionTexCoordVertex::new(1.0, 2.0, 0.5, 0.75));
        check_format(PositionTexCoordColorVertex::new(
            1.0, 2.0, 0.5, 0.75, 0.1, 0.2, 0.3, 0.4,
        ));
    }

    #[test]
    fn defaults_honour_the_contract() {
        check_format(PositionVertex::default());
        check_format(PositionColorVertex::default());
        check_format(PositionTexCoordVertex::default());
        check_format(PositionTexCoordColorVertex::default());
    }

    #[test]
    fn strides_in_bytes() {
        assert_eq!(PositionVertex::stride(), 8);
        assert_eq!(PositionColorVertex::stride(), 24);
        assert_eq!(PositionTexCoordVertex::stride(), 16);
        assert_eq!(PositionTexCoordColorVertex::stride(), 32);
    }
}
