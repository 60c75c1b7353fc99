use std::collections::{BTreeMap, BTreeSet};

use super::BufferHandle;

/// Pointer recorded for one attribute location.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct AttributePointer {
    components: u32,
    stride: u32,
    offset: u32,
    buffer: Option<BufferHandle>,
}

/// Enabled attributes and their pointers, in the enable/pointer/disable style
/// of a classic vertex-array state block.
///
/// wgpu bakes vertex layouts into pipelines, so this state is consumed by
/// [`vertex_layout`](Self::vertex_layout) when a pipeline is built.
#[derive(Debug, Default)]
pub(crate) struct VertexAttributeState {
    enabled: BTreeSet<u32>,
    pointers: BTreeMap<u32, AttributePointer>,
}

impl VertexAttributeState {
    pub(crate) fn enable(&mut self, location: u32) {
        self.enabled.insert(location);
    }

    pub(crate) fn disable(&mut self, location: u32) {
        self.enabled.remove(&location);
    }

    pub(crate) fn pointer(
        &mut self,
        location: u32,
        components: u32,
        stride: u32,
        offset: u32,
        buffer: Option<BufferHandle>,
    ) {
        self.pointers.insert(
            location,
            AttributePointer {
                components,
                stride,
                offset,
                buffer,
            },
        );
    }

    pub(crate) fn forget_buffer(&mut self, buffer: BufferHandle) {
        for p in self.pointers.values_mut() {
            if p.buffer == Some(buffer) {
                p.buffer = None;
            }
        }
    }

    /// Layout of every enabled attribute that has a pointer.
    ///
    /// Returns `None` when nothing is enabled. Attributes with an unsupported
    /// component count are skipped with a warning.
    pub(crate) fn vertex_layout(&self) -> Option<VertexLayout> {
        let mut attributes = Vec::new();
        let mut array_stride = 0u64;
        let mut buffer = None;

        for &location in &self.enabled {
            let Some(p) = self.pointers.get(&location) else {
                log::debug!("attribute {location} enabled without a pointer; skipped");
                continue;
            };
            let Some(format) = float_format(p.components) else {
                log::warn!(
                    "attribute {location}: unsupported component count {}; skipped",
                    p.components
                );
                continue;
            };

            if array_stride != 0 && u64::from(p.stride) != array_stride {
                log::warn!(
                    "attribute {location}: stride {} differs from {array_stride}; using the larger",
                    p.stride
                );
            }
            array_stride = array_stride.max(u64::from(p.stride));
            buffer = buffer.or(p.buffer);

            attributes.push(wgpu::VertexAttribute {
                format,
                offset: u64::from(p.offset),
                shader_location: location,
            });
        }

        if attributes.is_empty() {
            return None;
        }

        Some(VertexLayout {
            buffer,
            array_stride,
            attributes,
        })
    }
}

/// Owned vertex buffer layout derived from the enabled attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexLayout {
    /// Buffer the attributes were pointed at, if it is still alive.
    pub buffer: Option<BufferHandle>,
    pub array_stride: u64,
    pub attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexLayout {
    /// Borrowed form for `wgpu::VertexState::buffers`.
    pub fn as_wgpu(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.array_stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}

fn float_format(components: u32) -> Option<wgpu::VertexFormat> {
    match components {
        1 => Some(wgpu::VertexFormat::Float32),
        2 => Some(wgpu::VertexFormat::Float32x2),
        3 => Some(wgpu::VertexFormat::Float32x3),
        4 => Some(wgpu::VertexFormat::Float32x4),
        _ => None,
    }
}
