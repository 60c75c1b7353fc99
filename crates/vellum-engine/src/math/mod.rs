//! Matrix math.
//!
//! Storage convention is column-major (`m[col * 4 + row]`), identical to the
//! layout a "set 4x4 float matrix uniform, no transpose" backend call expects.

mod transform;

pub use transform::Transform;
