//! Session-wide affine transform state.
//!
//! A single [`TransformAccumulator`] owns the matrix applied to the image quad.
//! Every input-driven change goes through one of its four operations, each of
//! which multiplies a small incremental matrix into the accumulated one.

mod accumulator;
mod command;

pub use accumulator::{RotationPolicy, TransformAccumulator};
pub use command::TransformCommand;
