//! Vellum engine crate.
//!
//! This crate owns the numeric and layout core shared by renderers: the 4x4
//! transform engine, the float serialization contract, vertex schemas, and the
//! buffer/uniform plumbing that hands flat float arrays to a graphics backend.

pub mod bufferable;
pub mod coords;
pub mod device;
pub mod error;
pub mod logging;
pub mod math;
pub mod render;
pub mod vertex;

pub use bufferable::{FloatBufferable, IndexBufferable};
pub use coords::Color;
pub use error::{BufferDiagnostic, TransformError};
pub use math::Transform;
