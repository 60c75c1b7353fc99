/// Handle to a backend-allocated vertex buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferHandle(pub(crate) u32);

impl BufferHandle {
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Handle to a linked shader program known to the backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramId(pub(crate) u32);

impl ProgramId {
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Resolved uniform or attribute location.
///
/// `-1` means "not present in this program"; every consumer skips it silently.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Location(i32);

impl Default for Location {
    fn default() -> Self {
        Self::ABSENT
    }
}

impl Location {
    pub const ABSENT: Location = Location(-1);

    /// Wraps a raw location. Any negative value is normalized to [`ABSENT`](Self::ABSENT).
    #[inline]
    pub const fn new(raw: i32) -> Self {
        if raw < 0 { Self::ABSENT } else { Self(raw) }
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 >= 0
    }

    /// The location as an index, or `None` when absent.
    #[inline]
    pub const fn get(self) -> Option<u32> {
        if self.0 >= 0 { Some(self.0 as u32) } else { None }
    }
}

impl From<u32> for Location {
    #[inline]
    fn from(index: u32) -> Self {
        Self::new(i32::try_from(index).unwrap_or(-1))
    }
}

/// The graphics context consumed by the core.
///
/// Everything that touches GPU state takes one of these explicitly; there is no
/// ambient global context. Implementations are single-threaded and every call
/// completes before returning.
///
/// Uniform and attribute calls receive already-present locations; callers in
/// [`crate::render`] filter out [`Location::ABSENT`] before reaching the backend.
pub trait GraphicsBackend {
    /// Allocates a vertex buffer sized for `data` and uploads it.
    fn buffer_create(&mut self, data: &[f32]) -> BufferHandle;

    /// Replaces the contents of an existing buffer.
    fn buffer_write(&mut self, buffer: BufferHandle, data: &[f32]);

    /// Frees a buffer. Unknown handles are ignored.
    fn buffer_delete(&mut self, buffer: BufferHandle);

    /// Makes `buffer` the target of subsequent attribute pointers.
    fn buffer_bind(&mut self, buffer: BufferHandle);

    /// Resolves a uniform by name. Called once per program at setup.
    fn uniform_location(&self, program: ProgramId, name: &str) -> Location;

    /// Resolves a vertex attribute by name. Called once per program at setup.
    fn attribute_location(&self, program: ProgramId, name: &str) -> Location;

    /// Makes `program` the target of subsequent uniform writes.
    fn program_use(&mut self, program: ProgramId);

    /// Uploads a 4x4 column-major matrix, no transpose.
    fn uniform_matrix4(&mut self, location: u32, matrix: &[f32; 16]);

    fn uniform_vec4(&mut self, location: u32, value: [f32; 4]);

    fn uniform_vec2(&mut self, location: u32, value: [f32; 2]);

    fn uniform_int(&mut self, location: u32, value: i32);

    fn attribute_enable(&mut self, location: u32);

    /// Describes how attribute `location` reads the currently bound buffer.
    /// `stride` and `offset` are in bytes; components are `f32`.
    fn attribute_pointer(&mut self, location: u32, components: u32, stride: u32, offset: u32);

    fn attribute_disable(&mut self, location: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_locations_collapse_to_absent() {
        assert_eq!(Location::new(-7), Location::ABSENT);
        assert_eq!(Location::new(-1).get(), None);
        assert!(!Location::default().is_present());
    }

    #[test]
    fn present_location_round_trips() {
        let loc = Location::new(3);
        assert!(loc.is_present());
        assert_eq!(loc.get(), Some(3));
        assert_eq!(Location::from(3u32), loc);
    }
}
