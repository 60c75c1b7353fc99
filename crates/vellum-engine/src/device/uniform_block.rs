//! CPU-side layout of a program's uniform block.
//!
//! Offsets follow WGSL uniform address-space alignment, so a shader declaring
//! the same members in the same order reads the values where they are written.

/// Type of a single uniform member.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UniformKind {
    /// `mat4x4<f32>`, column-major.
    Mat4,
    /// `vec4<f32>`.
    Vec4,
    /// `vec2<f32>`.
    Vec2,
    /// `i32`.
    Int,
}

impl UniformKind {
    #[inline]
    pub const fn size(self) -> u64 {
        match self {
            UniformKind::Mat4 => 64,
            UniformKind::Vec4 => 16,
            UniformKind::Vec2 => 8,
            UniformKind::Int => 4,
        }
    }

    #[inline]
    pub const fn align(self) -> u64 {
        match self {
            UniformKind::Mat4 | UniformKind::Vec4 => 16,
            UniformKind::Vec2 => 8,
            UniformKind::Int => 4,
        }
    }
}

/// One member of the block.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformEntry {
    pub name: String,
    pub kind: UniformKind,
    /// Byte offset from the start of the block.
    pub offset: u64,
}

/// Member offsets and total size of a uniform block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformBlockLayout {
    entries: Vec<UniformEntry>,
    size: u64,
}

impl UniformBlockLayout {
    /// Lays out members in declaration order.
    pub fn new<'n>(members: impl IntoIterator<Item = (&'n str, UniformKind)>) -> Self {
        let mut entries = Vec::new();
        let mut cursor = 0u64;

        for (name, kind) in members {
            let offset = align_up(cursor, kind.align());
            entries.push(UniformEntry {
                name: name.to_owned(),
                kind,
                offset,
            });
            cursor = offset + kind.size();
        }

        // Struct size rounds up to 16; wgpu rejects zero-sized uniform bindings.
        let size = align_up(cursor, 16).max(16);
        Self { entries, size }
    }

    /// Total size in bytes.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn entries(&self) -> &[UniformEntry] {
        &self.entries
    }

    /// Position of `name` in declaration order; used as its location.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    #[inline]
    pub fn entry(&self, index: usize) -> Option<&UniformEntry> {
        self.entries.get(index)
    }
}

#[inline]
fn align_up(value: u64, align: u64) -> u64 {
    value.div_ceil(align) * align
}
