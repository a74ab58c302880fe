use std::io::ErrorKind;
use std::path::Path;

use crate::error::{PpmError, PpmResult};
use crate::image::{sample_count, ImageBuffer, CHANNELS};
use crate::tokenizer::{is_space, Tokenizer};

/// The two PPM flavours this crate understands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Subtype {
    /// `P3`: samples written as ASCII decimal numbers.
    Ascii,
    /// `P6`: samples written as raw bytes.
    Binary,
}

impl Subtype {
    /// The digit following `P` in the magic number.
    pub const fn magic(self) -> u8 {
        match self {
            Self::Ascii => b'3',
            Self::Binary => b'6',
        }
    }
}

/// Header fields shared by both subtypes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Header {
    width: usize,
    height: usize,
    samples: usize,
}

// ── Entry points ──────────────────────────────────────────────────────────

/// Reads and decodes the PPM file at `path`.
pub fn decode(path: impl AsRef<Path>) -> PpmResult<ImageBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PpmError::FileNotFound { path: path.to_path_buf() },
        _ => PpmError::Io(e),
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_bytes(&bytes)
}

/// Decodes an in-memory PPM image.
pub fn decode_bytes(src: &[u8]) -> PpmResult<ImageBuffer> {
    let mut t = Tokenizer::new(src);

    let subtype = read_magic(&mut t)?;
    let header = read_header(&mut t)?;

    let pixels = match subtype {
        Subtype::Ascii => read_ascii_raster(&mut t, header)?,
        Subtype::Binary => read_binary_raster(&mut t, header)?,
    };

    if !t.is_at_end() {
        log::debug!("ignoring {} trailing bytes after raster data", t.remaining());
    }
    log::debug!(
        "decoded P{} image {}x{}",
        char::from(subtype.magic()),
        header.width,
        header.height
    );

    Ok(ImageBuffer::from_parts(header.width, header.height, pixels))
}

// ── Header ────────────────────────────────────────────────────────────────

fn read_magic(t: &mut Tokenizer<'_>) -> PpmResult<Subtype> {
    t.skip_comments_and_whitespace()?;
    t.expect(b'P')?;
    match t.next_byte()? {
        b'3' => Ok(Subtype::Ascii),
        b'6' => Ok(Subtype::Binary),
        found => Err(PpmError::UnsupportedFormat { found, line: t.line() }),
    }
}

fn read_header(t: &mut Tokenizer<'_>) -> PpmResult<Header> {
    t.skip_comments_and_whitespace()?;
    let width = t.next_number()?;

    t.skip_comments_and_whitespace()?;
    let height = t.next_number()?;

    let dims = dimension(width).zip(dimension(height)).and_then(|(w, h)| {
        sample_count(w, h).map(|samples| Header { width: w, height: h, samples })
    });
    let Some(header) = dims else {
        return Err(PpmError::InvalidDimensions { width, height, line: t.line() });
    };

    t.skip_comments_and_whitespace()?;
    let max_value = t.next_number()?;
    if max_value != 255.0 {
        return Err(PpmError::InvalidMaxValue { value: max_value, line: t.line() });
    }

    Ok(header)
}

/// Accepts positive whole numbers only.
fn dimension(v: f64) -> Option<usize> {
    (v.is_finite() && v >= 1.0 && v.fract() == 0.0 && v <= u32::MAX as f64).then(|| v as usize)
}

// ── Raster ────────────────────────────────────────────────────────────────

/// Capacity hint that never exceeds what the source could still provide.
fn raster_capacity(t: &Tokenizer<'_>, header: Header) -> usize {
    header.samples.min(t.remaining())
}

fn read_ascii_raster(t: &mut Tokenizer<'_>, header: Header) -> PpmResult<Vec<u8>> {
    t.skip_comments_and_whitespace()?;

    let mut pixels = Vec::with_capacity(raster_capacity(t, header));
    let mut out_of_range = 0usize;

    // Pushing in (row, col, channel) order lands sample k of pixel (i, j)
    // at (j + width * i) * 3 + k.
    for i in 0..header.height {
        for j in 0..header.width {
            for k in 0..CHANNELS {
                let value = t.next_number()?;
                if !(0.0..=255.0).contains(&value) {
                    out_of_range += 1;
                }
                pixels.push(truncate_sample(value));

                let last = i + 1 == header.height && j + 1 == header.width && k + 1 == CHANNELS;
                if !last {
                    t.skip_whitespace()?;
                }
            }
        }
    }

    if out_of_range > 0 {
        log::warn!("{out_of_range} samples were outside 0..=255 and have been truncated to 8 bits");
    }
    Ok(pixels)
}

fn read_binary_raster(t: &mut Tokenizer<'_>, header: Header) -> PpmResult<Vec<u8>> {
    let separator = t.next_byte()?;
    if !is_space(separator) {
        return Err(PpmError::MalformedHeader { line: t.line() });
    }

    let mut pixels = Vec::with_capacity(raster_capacity(t, header));
    for _ in 0..header.samples {
        pixels.push(t.next_byte()?);
    }
    Ok(pixels)
}

/// Keeps the low 8 bits of the integer part, like a C `(unsigned char)(int)` cast.
fn truncate_sample(value: f64) -> u8 {
    value as i64 as u8
}
