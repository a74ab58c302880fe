/// Linear RGBA color.
///
/// Values are in linear space, which is what wgpu expects for clear colors on
/// sRGB surfaces. Use [`ColorRgba::from_srgb_u8`] for colors written as bytes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Opaque color from sRGB-encoded bytes.
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), 1.0)
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

fn srgb_to_linear(v: u8) -> f32 {
    let c = v as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_endpoints() {
        assert_eq!(ColorRgba::from_srgb_u8(0, 0, 0), ColorRgba::black());
        let white = ColorRgba::from_srgb_u8(255, 255, 255);
        assert!((white.r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn srgb_midtone_is_darker_in_linear() {
        let c = ColorRgba::from_srgb_u8(128, 128, 128);
        assert!(c.r > 0.2 && c.r < 0.23);
    }
}
