use crate::bufferable::IndexBufferable;

/// Client-side `u32` index array handed to indexed draw calls.
///
/// Capacity is fixed at creation; [`write_from`](Self::write_from) overwrites a
/// prefix and never resizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexBuffer {
    indices: Vec<u32>,
}

impl IndexBuffer {
    pub fn from_indices(indices: impl Into<Vec<u32>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    /// Serializes `items` into a new buffer sized to fit them.
    pub fn from_items<T: IndexBufferable>(items: &[T]) -> Self {
        Self {
            indices: crate::bufferable::flatten_indices(items),
        }
    }

    /// Overwrites up to `count` leading indices (all of `values` when `None`).
    ///
    /// The number written is `min(count, values.len(), capacity)`; it is returned.
    pub fn write_from(&mut self, values: &[u32], count: Option<usize>) -> usize {
        let n = count
            .unwrap_or(values.len())
            .min(values.len())
            .min(self.indices.len());
        self.indices[..n].copy_from_slice(&values[..n]);
        n
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Byte view for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
