//! 2D affine building blocks on top of `glam::Mat4`.
//!
//! Everything acts in the XY plane and leaves Z and W alone, so any product of
//! these matrices keeps the bottom row at `[0, 0, 0, 1]`.

use glam::{Mat4, Vec3, Vec4};

/// Scale by `sx`, `sy`.
#[inline]
pub fn scale_xy(sx: f32, sy: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(sx, sy, 1.0))
}

#[inline]
pub fn translation_xy(dx: f32, dy: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(dx, dy, 0.0))
}

/// Shear with `x' = x + xy * y` and `y' = yx * x + y`.
pub fn shear(xy: f32, yx: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(1.0, yx, 0.0, 0.0),
        Vec4::new(xy, 1.0, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}

/// True when the bottom row is `[0, 0, 0, 1]`.
pub fn is_affine(m: &Mat4) -> bool {
    m.row(3) == Vec4::W
}
