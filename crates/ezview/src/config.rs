use ezview_engine::coords::ColorRgba;
use ezview_engine::transform::RotationPolicy;

/// Magnitudes for one tier of key input (first press or OS repeat).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepSizes {
    /// Rotation per step, in degrees.
    pub rotate_degrees: f32,
    /// Factor applied by the "scale down" key.
    pub scale_down: f32,
    /// Factor applied by the "scale up" key.
    pub scale_up: f32,
    /// Translation per step, in NDC units.
    pub translate: f32,
    /// Shear coefficient per step.
    pub shear: f32,
}

impl StepSizes {
    pub const PRESS: Self = Self {
        rotate_degrees: 15.0,
        scale_down: 0.9,
        scale_up: 1.1,
        translate: 0.1,
        shear: 0.1,
    };

    pub const REPEAT: Self = Self {
        rotate_degrees: 2.0,
        scale_down: 0.97,
        scale_up: 1.03,
        translate: 0.04,
        shear: 0.04,
    };
}

/// Viewer behavior knobs. Command-line flags override the defaults.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub press: StepSizes,
    pub repeat: StepSizes,
    pub rotation_policy: RotationPolicy,
    pub clear_color: ColorRgba,
}

impl ViewerConfig {
    #[inline]
    pub fn steps(&self, repeat: bool) -> &StepSizes {
        if repeat { &self.repeat } else { &self.press }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            press: StepSizes::PRESS,
            repeat: StepSizes::REPEAT,
            rotation_policy: RotationPolicy::Plain,
            // Dark green.
            clear_color: ColorRgba::from_srgb_u8(0, 104, 55),
        }
    }
}
