//! ezview engine crate.
//!
//! The platform + GPU runtime underneath the viewer binary: a winit event
//! loop with one window, a wgpu surface, keyboard input translation, the
//! textured-quad image renderer, and the accumulated affine transform.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod transform;
pub mod window;
