use super::{BufferHandle, GraphicsBackend, Location, ProgramId};

/// One call observed by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    BufferCreate { buffer: BufferHandle, floats: usize },
    BufferWrite { buffer: BufferHandle, floats: usize },
    BufferDelete { buffer: BufferHandle },
    BufferBind { buffer: BufferHandle },
    ProgramUse { program: ProgramId },
    UniformMatrix4 { location: u32, matrix: [f32; 16] },
    UniformVec4 { location: u32, value: [f32; 4] },
    UniformVec2 { location: u32, value: [f32; 2] },
    UniformInt { location: u32, value: i32 },
    AttributeEnable { location: u32 },
    AttributePointer { location: u32, components: u32, stride: u32, offset: u32 },
    AttributeDisable { location: u32 },
}

#[derive(Debug, Default)]
struct RecordedProgram {
    uniforms: Vec<String>,
    attributes: Vec<String>,
}

/// Headless backend that records every call and keeps buffer contents in memory.
///
/// Programs are declared from uniform and attribute name lists; each name gets
/// its position in the list as its location, unknown names resolve to `-1`.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
    buffers: Vec<Option<Vec<f32>>>,
    programs: Vec<RecordedProgram>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a program exposing the given uniforms and attributes.
    pub fn define_program(&mut self, uniforms: &[&str], attributes: &[&str]) -> ProgramId {
        let id = ProgramId(self.programs.len() as u32);
        self.programs.push(RecordedProgram {
            uniforms: uniforms.iter().map(|s| s.to_string()).collect(),
            attributes: attributes.iter().map(|s| s.to_string()).collect(),
        });
        id
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Returns and forgets the calls recorded so far.
    pub fn take_calls(&mut self) -> Vec<BackendCall> {
        std::mem::take(&mut self.calls)
    }

    /// Current contents of a live buffer.
    pub fn buffer_data(&self, buffer: BufferHandle) -> Option<&[f32]> {
        self.buffers
            .get(buffer.0 as usize)
            .and_then(|b| b.as_deref())
    }

    /// Number of buffers allocated and not yet deleted.
    pub fn live_buffers(&self) -> usize {
        self.buffers.iter().filter(|b| b.is_some()).count()
    }

    fn resolve(names: Option<&Vec<String>>, name: &str) -> Location {
        names
            .and_then(|names| names.iter().position(|n| n == name))
            .map_or(Location::ABSENT, |i| Location::from(i as u32))
    }
}

impl GraphicsBackend for RecordingBackend {
    fn buffer_create(&mut self, data: &[f32]) -> BufferHandle {
        let buffer = BufferHandle(self.buffers.len() as u32);
        self.buffers.push(Some(data.to_vec()));
        self.calls.push(BackendCall::BufferCreate {
            buffer,
            floats: data.len(),
        });
        buffer
    }

    fn buffer_write(&mut self, buffer: BufferHandle, data: &[f32]) {
        if let Some(Some(slot)) = self.buffers.get_mut(buffer.0 as usize) {
            slot.clear();
            slot.extend_from_slice(data);
        }
        self.calls.push(BackendCall::BufferWrite {
            buffer,
            floats: data.len(),
        });
    }

    fn buffer_delete(&mut self, buffer: BufferHandle) {
        if let Some(slot) = self.buffers.get_mut(buffer.0 as usize) {
            *slot = None;
        }
        self.calls.push(BackendCall::BufferDelete { buffer });
    }

    fn buffer_bind(&mut self, buffer: BufferHandle) {
        self.calls.push(BackendCall::BufferBind { buffer });
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> Location {
        Self::resolve(
            self.programs.get(program.0 as usize).map(|p| &p.uniforms),
            name,
        )
    }

    fn attribute_location(&self, program: ProgramId, name: &str) -> Location {
        Self::resolve(
            self.programs.get(program.0 as usize).map(|p| &p.attributes),
            name,
        )
    }

    fn program_use(&mut self, program: ProgramId) {
        self.calls.push(BackendCall::ProgramUse { program });
    }

    fn uniform_matrix4(&mut self, location: u32, matrix: &[f32; 16]) {
        self.calls.push(BackendCall::UniformMatrix4 {
            location,
            matrix: *matrix,
        });
    }

    fn uniform_vec4(&mut self, location: u32, value: [f32; 4]) {
        self.calls.push(BackendCall::UniformVec4 { location, value });
    }

    fn uniform_vec2(&mut self, location: u32, value: [f32; 2]) {
        self.calls.push(BackendCall::UniformVec2 { location, value });
    }

    fn uniform_int(&mut self, location: u32, value: i32) {
        self.calls.push(BackendCall::UniformInt { location, value });
    }

    fn attribute_enable(&mut self, location: u32) {
        self.calls.push(BackendCall::AttributeEnable { location });
    }

    fn attribute_pointer(&mut self, location: u32, components: u32, stride: u32, offset: u32) {
        self.calls.push(BackendCall::AttributePointer {
            location,
            components,
            stride,
            offset,
        });
    }

    fn attribute_disable(&mut self, location: u32) {
        self.calls.push(BackendCall::AttributeDisable { location });
    }
}
