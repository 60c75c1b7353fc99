//! Serialization contracts.
//!
//! A value that implements [`FloatBufferable`] knows how to append its floats,
//! in a fixed order, to a growable sequence and how many it appends. The flat
//! result is the wire format handed to the backend: tightly packed `f32`, no
//! padding, no length prefix.
//!
//! [`IndexBufferable`] is the same contract for `u32` element indices.

mod float;
mod index;

pub use float::{flatten, float_count_of, write_all, FloatBufferable};
pub use index::{flatten_indices, IndexBufferable};
