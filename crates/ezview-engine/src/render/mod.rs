//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, textures) and create
//! them lazily on first use, so they can be constructed before a device exists.
//!
//! Convention:
//! - geometry is in normalized device coordinates (+Y up)
//! - the vertex shader applies a single 4×4 transform uniform

mod ctx;
mod image;

pub use ctx::{RenderCtx, RenderTarget};
pub use image::ImageRenderer;
