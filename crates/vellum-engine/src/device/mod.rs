//! Graphics context abstraction and its implementations.
//!
//! This module is responsible for:
//! - the [`GraphicsBackend`] trait the core consumes (buffers, uniform slots,
//!   attribute pointers)
//! - [`RecordingBackend`], a headless backend that records calls
//! - [`WgpuBackend`] plus [`Gpu`], the wgpu implementation and its device bring-up

mod backend;
mod gpu;
mod init;
mod recording;
mod uniform_block;
mod vertex_state;
mod wgpu_backend;

pub use backend::{BufferHandle, GraphicsBackend, Location, ProgramId};
pub use gpu::Gpu;
pub use init::DeviceInit;
pub use recording::{BackendCall, RecordingBackend};
pub use uniform_block::{UniformBlockLayout, UniformEntry, UniformKind};
pub use vertex_state::VertexLayout;
pub use wgpu_backend::{ShaderInterface, WgpuBackend};
