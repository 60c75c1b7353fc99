use wgpu::util::DeviceExt;

use super::uniform_block::{UniformBlockLayout, UniformKind};
use super::vertex_state::{VertexAttributeState, VertexLayout};
use super::{BufferHandle, GraphicsBackend, Location, ProgramId};

/// Names and types a shader program exposes.
///
/// wgpu has no runtime reflection, so the interface is declared by whoever owns
/// the shader module. Uniforms are laid out in declaration order (see
/// [`UniformBlockLayout`]); attribute locations are the `@location(n)` values.
#[derive(Debug, Clone, Default)]
pub struct ShaderInterface {
    pub label: String,
    pub uniforms: Vec<(String, UniformKind)>,
    pub attributes: Vec<(String, u32)>,
}

impl ShaderInterface {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn uniform(mut self, name: impl Into<String>, kind: UniformKind) -> Self {
        self.uniforms.push((name.into(), kind));
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, location: u32) -> Self {
        self.attributes.push((name.into(), location));
        self
    }
}

struct WgpuProgram {
    label: String,
    attributes: Vec<(String, u32)>,
    layout: UniformBlockLayout,
    ubo: wgpu::Buffer,
}

/// [`GraphicsBackend`] over a wgpu device and queue.
///
/// - Buffers are `VERTEX | COPY_DST` and keep their handle across rewrites.
/// - Each registered program owns one uniform buffer; uniform calls write into it
///   at the member's offset.
/// - Attribute enable/pointer calls accumulate into a [`VertexLayout`] used when
///   building the render pipeline.
pub struct WgpuBackend<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,

    buffers: Vec<Option<wgpu::Buffer>>,
    programs: Vec<WgpuProgram>,

    current_program: Option<usize>,
    bound_buffer: Option<BufferHandle>,
    attributes: VertexAttributeState,
}

impl<'a> WgpuBackend<'a> {
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            buffers: Vec::new(),
            programs: Vec::new(),
            current_program: None,
            bound_buffer: None,
            attributes: VertexAttributeState::default(),
        }
    }

    /// Convenience constructor borrowing from a [`super::Gpu`].
    pub fn from_gpu(gpu: &'a super::Gpu) -> Self {
        Self::new(gpu.device(), gpu.queue())
    }

    /// Registers a program and allocates its uniform buffer.
    pub fn register_program(&mut self, interface: ShaderInterface) -> ProgramId {
        let ShaderInterface {
            label,
            uniforms,
            attributes,
        } = interface;

        let layout = UniformBlockLayout::new(uniforms.iter().map(|(n, k)| (n.as_str(), *k)));

        let ubo = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("vellum {label} uniforms")),
            size: layout.size(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        log::debug!(
            "registered program '{label}': {} uniforms ({} bytes), {} attributes",
            layout.entries().len(),
            layout.size(),
            attributes.len()
        );

        let id = ProgramId(self.programs.len() as u32);
        self.programs.push(WgpuProgram {
            label,
            attributes,
            layout,
            ubo,
        });
        id
    }

    /// The wgpu buffer behind a handle.
    pub fn buffer(&self, buffer: BufferHandle) -> Option<&wgpu::Buffer> {
        self.buffers.get(buffer.0 as usize).and_then(Option::as_ref)
    }

    /// Uniform buffer of a program, for binding into a bind group.
    pub fn uniform_buffer(&self, program: ProgramId) -> Option<&wgpu::Buffer> {
        self.programs.get(program.0 as usize).map(|p| &p.ubo)
    }

    pub fn uniform_layout(&self, program: ProgramId) -> Option<&UniformBlockLayout> {
        self.programs.get(program.0 as usize).map(|p| &p.layout)
    }

    /// Vertex layout of the currently enabled attributes.
    pub fn vertex_layout(&self) -> Option<VertexLayout> {
        self.attributes.vertex_layout()
    }

    fn create_vbo(&self, data: &[f32]) -> wgpu::Buffer {
        self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vellum array buffer"),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        })
    }

    fn write_uniform(&mut self, location: u32, kind: UniformKind, bytes: &[u8]) {
        let Some(index) = self.current_program else {
            log::debug!("uniform write to location {location} with no program in use; ignored");
            return;
        };
        let program = &self.programs[index];
        let Some(entry) = program.layout.entry(location as usize) else {
            log::debug!("program '{}' has no uniform {location}; ignored", program.label);
            return;
        };
        if entry.kind != kind {
            log::warn!(
                "program '{}': uniform '{}' is {:?}, got {:?}; ignored",
                program.label,
                entry.name,
                entry.kind,
                kind
            );
            return;
        }
        self.queue.write_buffer(&program.ubo, entry.offset, bytes);
    }
}

impl GraphicsBackend for WgpuBackend<'_> {
    fn buffer_create(&mut self, data: &[f32]) -> BufferHandle {
        let vbo = self.create_vbo(data);
        let handle = BufferHandle(self.buffers.len() as u32);
        self.buffers.push(Some(vbo));
        handle
    }

    fn buffer_write(&mut self, buffer: BufferHandle, data: &[f32]) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let Some(current) = self.buffer(buffer) else {
            log::debug!("write to unknown buffer {}; ignored", buffer.0);
            return;
        };

        if bytes.len() as u64 <= current.size() {
            self.queue.write_buffer(current, 0, bytes);
            return;
        }

        // Data outgrew the allocation; replace it under the same handle.
        log::debug!(
            "buffer {} grows from {} to {} bytes; reallocating",
            buffer.0,
            current.size(),
            bytes.len()
        );
        let vbo = self.create_vbo(data);
        if let Some(slot) = self.buffers.get_mut(buffer.0 as usize) {
            if let Some(old) = slot.replace(vbo) {
                old.destroy();
            }
        }
    }

    fn buffer_delete(&mut self, buffer: BufferHandle) {
        if let Some(old) = self.buffers.get_mut(buffer.0 as usize).and_then(Option::take) {
            old.destroy();
        }
        if self.bound_buffer == Some(buffer) {
            self.bound_buffer = None;
        }
        self.attributes.forget_buffer(buffer);
    }

    fn buffer_bind(&mut self, buffer: BufferHandle) {
        self.bound_buffer = self.buffer(buffer).map(|_| buffer);
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> Location {
        self.programs
            .get(program.0 as usize)
            .and_then(|p| p.layout.index_of(name))
            .map_or(Location::ABSENT, |i| Location::from(i as u32))
    }

    fn attribute_location(&self, program: ProgramId, name: &str) -> Location {
        self.programs
            .get(program.0 as usize)
            .and_then(|p| p.attributes.iter().find(|(n, _)| n == name))
            .map_or(Location::ABSENT, |&(_, loc)| Location::from(loc))
    }

    fn program_use(&mut self, program: ProgramId) {
        let index = program.0 as usize;
        self.current_program = (index < self.programs.len()).then_some(index);
    }

    fn uniform_matrix4(&mut self, location: u32, matrix: &[f32; 16]) {
        self.write_uniform(location, UniformKind::Mat4, bytemuck::cast_slice(matrix));
    }

    fn uniform_vec4(&mut self, location: u32, value: [f32; 4]) {
        self.write_uniform(location, UniformKind::Vec4, bytemuck::cast_slice(&value));
    }

    fn uniform_vec2(&mut self, location: u32, value: [f32; 2]) {
        self.write_uniform(location, UniformKind::Vec2, bytemuck::cast_slice(&value));
    }

    fn uniform_int(&mut self, location: u32, value: i32) {
        self.write_uniform(location, UniformKind::Int, bytemuck::bytes_of(&value));
    }

    fn attribute_enable(&mut self, location: u32) {
        self.attributes.enable(location);
    }

    fn attribute_pointer(&mut self, location: u32, components: u32, stride: u32, offset: u32) {
        self.attributes
            .pointer(location, components, stride, offset, self.bound_buffer);
    }

    fn attribute_disable(&mut self, location: u32) {
        self.attributes.disable(location);
    }
}
