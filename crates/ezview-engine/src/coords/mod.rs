//! Matrix, viewport, and color types shared by the renderer and transform state.
//!
//! Canonical space for transforms is normalized device coordinates:
//! - the image quad spans `[-1, 1]` on both axes
//! - +X right, +Y up
//!
//! Matrices are `glam::Mat4` (column-major, `Pod`), written straight into the
//! renderer's uniform buffer.

pub mod affine;
mod color;
mod viewport;

pub use color::ColorRgba;
pub use glam::{Mat4, Vec3};
pub use viewport::Viewport;
