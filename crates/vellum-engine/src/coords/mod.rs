//! Value types shared by vertex schemas and uniform binding.
//!
//! Canonical CPU space for 2D work:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! [`Viewport::projection`] turns that space into clip space.

mod color;
mod viewport;

pub use color::Color;
pub use viewport::Viewport;
