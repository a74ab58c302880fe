/// Number of interleaved channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// A decoded 8-bit RGB raster.
///
/// Invariant: `pixels.len() == width * height * 3`, stored row-major with the
/// channels of each pixel adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Wraps `pixels` as a `width`×`height` image.
    ///
    /// Returns `None` if either dimension is zero or the buffer length does not
    /// match the dimensions.
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Option<Self> {
        let expected = sample_count(width, height)?;
        (pixels.len() == expected).then_some(Self { width, height, pixels })
    }

    /// Caller guarantees the length invariant.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(sample_count(width, height), Some(pixels.len()));
        Self { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat row-major RGB samples.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Sample offset of channel 0 for the pixel at (`row`, `col`).
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        (col + self.width * row) * CHANNELS
    }

    /// RGB triple at (`row`, `col`). Panics when out of bounds.
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        assert!(row < self.height && col < self.width, "pixel ({row}, {col}) out of bounds");
        let i = self.index(row, col);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Expands to RGBA8 with opaque alpha, for upload to 4-channel textures.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width * self.height * 4);
        for px in self.pixels.chunks_exact(CHANNELS) {
            out.extend_from_slice(px);
            out.push(u8::MAX);
        }
        out
    }
}

/// `width * height * 3`, or `None` for empty or overflowing dimensions.
pub(crate) fn sample_count(width: usize, height: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    width.checked_mul(height)?.checked_mul(CHANNELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: usize, h: usize) -> ImageBuffer {
        let pixels = (0..w * h * CHANNELS).map(|i| i as u8).collect();
        ImageBuffer::from_raw(w, h, pixels).unwrap()
    }

    #[test]
    fn from_raw_rejects_length_mismatch() {
        assert!(ImageBuffer::from_raw(2, 2, vec![0; 11]).is_none());
        assert!(ImageBuffer::from_raw(2, 2, vec![0; 12]).is_some());
    }

    #[test]
    fn from_raw_rejects_empty_dimensions() {
        assert!(ImageBuffer::from_raw(0, 3, Vec::new()).is_none());
        assert!(ImageBuffer::from_raw(3, 0, Vec::new()).is_none());
    }

    #[test]
    fn index_is_row_major() {
        let img = gradient(3, 2);
        assert_eq!(img.index(0, 0), 0);
        assert_eq!(img.index(0, 2), 6);
        assert_eq!(img.index(1, 0), 9);
        assert_eq!(img.pixel(1, 1), [12, 13, 14]);
    }

    #[test]
    fn non_square_last_pixel() {
        let img = gradient(4, 1);
        assert_eq!(img.pixel(0, 3), [9, 10, 11]);
    }

    #[test]
    fn rgba_expansion_appends_opaque_alpha() {
        let img = ImageBuffer::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.to_rgba(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn sample_count_overflow() {
        assert_eq!(sample_count(usize::MAX, 2), None);
        assert_eq!(sample_count(2, 5), Some(30));
    }
}
