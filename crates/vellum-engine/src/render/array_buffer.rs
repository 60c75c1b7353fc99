use std::marker::PhantomData;

use crate::bufferable::{self, FloatBufferable};
use crate::device::{BufferHandle, GraphicsBackend};
use crate::error::BufferDiagnostic;

const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

/// Most recent diagnostics kept per buffer; older ones are dropped.
pub const DIAGNOSTIC_HISTORY: usize = 16;

/// Statically sized vertex buffer built from serializable values.
///
/// `load` fixes the size. `write` replaces the content; a different float count
/// is not a resize but an anomaly, recorded as a [`BufferDiagnostic`] and logged
/// at warn level, after which the new data is uploaded anyway.
///
/// The backend resource is not freed on drop (that needs the context); call
/// [`release`](Self::release).
#[derive(Debug)]
pub struct ArrayBuffer<T> {
    handle: Option<BufferHandle>,
    data: Vec<f32>,
    /// Float count fixed by the last `load`.
    loaded_floats: usize,
    /// Newest last, at most [`DIAGNOSTIC_HISTORY`] entries.
    diagnostics: Vec<BufferDiagnostic>,
    /// Every diagnostic ever recorded, including dropped ones.
    diagnostic_total: usize,
    _items: PhantomData<fn(&T)>,
}

impl<T> Default for ArrayBuffer<T> {
    fn default() -> Self {
        Self {
            handle: None,
            data: Vec::new(),
            loaded_floats: 0,
            diagnostics: Vec::new(),
            diagnostic_total: 0,
            _items: PhantomData,
        }
    }
}

impl<T: FloatBufferable> ArrayBuffer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer and loads `items` into it.
    pub fn from_items(ctx: &mut dyn GraphicsBackend, items: &[T]) -> Self {
        let mut buffer = Self::new();
        buffer.load(ctx, items);
        buffer
    }

    /// Serializes `items`, allocates a backend buffer of `floats * 4` bytes and
    /// uploads once.
    ///
    /// An empty slice leaves the buffer valid but unallocated and returns
    /// [`BufferDiagnostic::EmptyLoad`]. A previously loaded resource is released first.
    pub fn load(&mut self, ctx: &mut dyn GraphicsBackend, items: &[T]) -> Option<BufferDiagnostic> {
        self.release(ctx);

        if items.is_empty() {
            log::debug!("array buffer load with no items; left unallocated");
            return Some(self.record(BufferDiagnostic::EmptyLoad));
        }

        bufferable::write_all(items, &mut self.data);
        self.loaded_floats = self.data.len();
        self.handle = Some(ctx.buffer_create(&self.data));

        log::debug!(
            "array buffer loaded: {} items, {} bytes",
            items.len(),
            self.byte_size()
        );
        None
    }

    /// Re-serializes `items` into the existing backend buffer without reallocating.
    ///
    /// Returns [`BufferDiagnostic::NotLoaded`] (nothing uploaded) when there is no
    /// backend resource, and [`BufferDiagnostic::SizeMismatch`] when the float count
    /// differs from the original load; in the latter case the upload still happens.
    /// Repeated anomalies keep only the last [`DIAGNOSTIC_HISTORY`] entries, so
    /// rewriting with a wrong count every frame does not grow the buffer.
    pub fn write(&mut self, ctx: &mut dyn GraphicsBackend, items: &[T]) -> Option<BufferDiagnostic> {
        let Some(handle) = self.handle else {
            log::debug!("array buffer write before load; ignored");
            return Some(self.record(BufferDiagnostic::NotLoaded));
        };

        bufferable::write_all(items, &mut self.data);

        let anomaly = (self.data.len() != self.loaded_floats).then(|| {
            let diagnostic = BufferDiagnostic::SizeMismatch {
                expected: self.loaded_floats,
                actual: self.data.len(),
            };
            log::warn!("array buffer {}: {diagnostic}", handle.index());
            self.record(diagnostic)
        });

        ctx.buffer_write(handle, &self.data);
        anomaly
    }
}

impl<T> ArrayBuffer<T> {
    /// Binds the backend buffer. No-op when never loaded.
    pub fn bind(&self, ctx: &mut dyn GraphicsBackend) {
        if let Some(handle) = self.handle {
            ctx.buffer_bind(handle);
        }
    }

    /// Frees the backend resource and clears the content.
    pub fn release(&mut self, ctx: &mut dyn GraphicsBackend) {
        if let Some(handle) = self.handle.take() {
            ctx.buffer_delete(handle);
        }
        self.data.clear();
        self.loaded_floats = 0;
    }

    #[inline]
    pub fn handle(&self) -> Option<BufferHandle> {
        self.handle
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }

    /// Last uploaded float sequence.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Size in bytes of the last uploaded content.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.data.len() * FLOAT_SIZE
    }

    /// Float count fixed by `load`; `write` compares against this.
    #[inline]
    pub fn loaded_float_count(&self) -> usize {
        self.loaded_floats
    }

    /// Most recent anomalies, oldest first, since creation or the last
    /// [`clear_diagnostics`](Self::clear_diagnostics).
    #[inline]
    pub fn diagnostics(&self) -> &[BufferDiagnostic] {
        &self.diagnostics
    }

    /// Number of anomalies recorded over the buffer's lifetime.
    #[inline]
    pub fn diagnostic_total(&self) -> usize {
        self.diagnostic_total
    }

    /// Drops the retained history. The lifetime total is kept.
    pub fn clear_diagnostics(&mut self) {
        self.diagnostics.clear();
    }

    fn record(&mut self, diagnostic: BufferDiagnostic) -> BufferDiagnostic {
        if self.diagnostics.len() == DIAGNOSTIC_HISTORY {
            self.diagnostics.remove(0);
        }
        self.diagnostics.push(diagnostic);
        self.diagnostic_total += 1;
        diagnostic
    }
}
