/// Capability: append a fixed number of floats in a deterministic order.
///
/// Invariant: `write_floats` appends exactly `float_count()` elements on every
/// call, for every instance.
pub trait FloatBufferable {
    /// Appends this value's floats to `out`.
    fn write_floats(&self, out: &mut Vec<f32>);

    /// Number of floats `write_floats` appends.
    fn float_count(&self) -> usize;
}

impl<T: FloatBufferable + ?Sized> FloatBufferable for &T {
    #[inline]
    fn write_floats(&self, out: &mut Vec<f32>) {
        (**self).write_floats(out);
    }

    #[inline]
    fn float_count(&self) -> usize {
        (**self).float_count()
    }
}

/// Total float count of a sequence of items.
///
/// Sums per-item counts, so a sequence with mixed counts is still sized exactly.
pub fn float_count_of<T: FloatBufferable>(items: &[T]) -> usize {
    items.iter().map(FloatBufferable::float_count).sum()
}

/// Clears `out` and writes every item into it, in order.
pub fn write_all<T: FloatBufferable>(items: &[T], out: &mut Vec<f32>) {
    out.clear();
    out.reserve(float_count_of(items));

    for item in items {
        let before = out.len();
        item.write_floats(out);
        debug_assert_eq!(
            out.len() - before,
            item.float_count(),
            "FloatBufferable::write_floats appended a different count than float_count()"
        );
    }
}

/// Serializes a sequence of items into a new flat float vector.
pub fn flatten<T: FloatBufferable>(items: &[T]) -> Vec<f32> {
    let mut out = Vec::new();
    write_all(items, &mut out);
    out
}
