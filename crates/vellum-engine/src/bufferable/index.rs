/// Capability: append a fixed number of `u32` indices in a deterministic order.
///
/// Same invariant as [`FloatBufferable`](super::FloatBufferable):
/// `write_indices` appends exactly `index_count()` elements.
pub trait IndexBufferable {
    fn write_indices(&self, out: &mut Vec<u32>);
    fn index_count(&self) -> usize;
}

impl IndexBufferable for u32 {
    #[inline]
    fn write_indices(&self, out: &mut Vec<u32>) {
        out.push(*self);
    }

    #[inline]
    fn index_count(&self) -> usize {
        1
    }
}

impl<const N: usize> IndexBufferable for [u32; N] {
    #[inline]
    fn write_indices(&self, out: &mut Vec<u32>) {
        out.extend_from_slice(self);
    }

    #[inline]
    fn index_count(&self) -> usize {
        N
    }
}

/// Serializes a sequence of index items into a new flat vector.
pub fn flatten_indices<T: IndexBufferable>(items: &[T]) -> Vec<u32> {
    let mut out = Vec::with_capacity(items.iter().map(IndexBufferable::index_count).sum());
    for item in items {
        item.write_indices(&mut out);
    }
    out
}
