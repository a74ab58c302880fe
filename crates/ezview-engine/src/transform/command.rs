/// One discrete transform step, as produced by a key binding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformCommand {
    /// Adjust the absolute rotation angle by this many radians.
    Rotate(f32),
    /// Uniform XY scale factor.
    Scale(f32),
    /// Screen-space translation in NDC units.
    Translate { dx: f32, dy: f32 },
    /// Shear coefficients (`x += xy * y`, `y += yx * x`).
    Shear { xy: f32, yx: f32 },
}
