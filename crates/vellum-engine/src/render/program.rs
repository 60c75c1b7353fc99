use crate::device::{GraphicsBackend, Location, ProgramId};
use crate::vertex::{PositionTexCoordVertex, PositionVertex, VertexFormat};

/// Uniform names every 2D program may declare.
pub mod uniform_names {
    pub const PROJECTION_MATRIX: &str = "ProjectionMatrix";
    pub const MODEL_VIEW_MATRIX: &str = "ModelViewMatrix";
    pub const MODULATE_COLOR: &str = "ModulateColor";
    pub const TEXTURE: &str = "Texture";
    pub const TEXTURE_SIZE: &str = "TextureSize";
}

/// How one named vertex field is read from a buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeLayout {
    pub name: &'static str,
    /// `-1` when the program does not consume this field.
    pub location: Location,
    /// Float components: 2, 3 or 4.
    pub components: u32,
    /// Bytes between consecutive vertices.
    pub stride: u32,
    /// Bytes from the start of a vertex.
    pub offset: u32,
}

/// Resolved uniform slots. Absent slots hold [`Location::ABSENT`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct UniformSlots {
    pub projection_matrix: Location,
    pub model_view_matrix: Location,
    pub modulate_color: Location,
    pub texture: Location,
    pub texture_size: Location,
}

/// Attribute layout and uniform slots of one shader program.
///
/// Resolved once when the program is set up and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramDescriptor {
    name: String,
    program: ProgramId,
    attributes: Vec<AttributeLayout>,
    uniforms: UniformSlots,
}

impl ProgramDescriptor {
    /// Resolves every field of vertex type `V` and the standard uniform slots.
    pub fn resolve<V: VertexFormat>(
        ctx: &dyn GraphicsBackend,
        program: ProgramId,
        name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let stride = V::stride();

        let attributes: Vec<AttributeLayout> = V::FIELDS
            .iter()
            .map(|field| AttributeLayout {
                name: field.name,
                location: ctx.attribute_location(program, field.name),
                components: field.components,
                stride,
                offset: field.byte_offset(),
            })
            .collect();

        let uniforms = UniformSlots {
            projection_matrix: ctx.uniform_location(program, uniform_names::PROJECTION_MATRIX),
            model_view_matrix: ctx.uniform_location(program, uniform_names::MODEL_VIEW_MATRIX),
            modulate_color: ctx.uniform_location(program, uniform_names::MODULATE_COLOR),
            texture: ctx.uniform_location(program, uniform_names::TEXTURE),
            texture_size: ctx.uniform_location(program, uniform_names::TEXTURE_SIZE),
        };

        for a in &attributes {
            log::debug!("{name}: attribute {} -> {}", a.name, a.location.raw());
        }
        log::debug!("{name}: uniforms {uniforms:?}");

        Self {
            name,
            program,
            attributes,
            uniforms,
        }
    }

    /// Untextured shapes: [`PositionVertex`] plus matrices and modulate color.
    pub fn shape_2d(ctx: &dyn GraphicsBackend, program: ProgramId) -> Self {
        Self::resolve::<PositionVertex>(ctx, program, "shape_2d")
    }

    /// Textured sprites: [`PositionTexCoordVertex`] plus matrices, color and texture.
    pub fn sprite_2d(ctx: &dyn GraphicsBackend, program: ProgramId) -> Self {
        Self::resolve::<PositionTexCoordVertex>(ctx, program, "sprite_2d")
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn program(&self) -> ProgramId {
        self.program
    }

    /// All vertex fields, present or not.
    #[inline]
    pub fn attributes(&self) -> &[AttributeLayout] {
        &self.attributes
    }

    /// Fields the program actually consumes.
    pub fn present_attributes(&self) -> impl Iterator<Item = &AttributeLayout> {
        self.attributes.iter().filter(|a| a.location.is_present())
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeLayout> {
        self.attributes.iter().find(|a| a.name == name)
    }

    #[inline]
    pub fn uniforms(&self) -> &UniformSlots {
        &self.uniforms
    }
}
