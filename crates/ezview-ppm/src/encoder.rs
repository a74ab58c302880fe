use std::fmt::Write as _;
use std::path::Path;

use crate::decoder::Subtype;
use crate::error::PpmResult;
use crate::image::{ImageBuffer, CHANNELS};

/// Encodes `image` as a binary (`P6`) PPM.
pub fn encode_binary(image: &ImageBuffer) -> Vec<u8> {
    let header = header(Subtype::Binary, image);
    let mut out = Vec::with_capacity(header.len() + image.pixels().len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(image.pixels());
    out
}

/// Encodes `image` as an ASCII (`P3`) PPM, one image row per line.
pub fn encode_ascii(image: &ImageBuffer) -> String {
    let mut out = header(Subtype::Ascii, image);
    let row_len = image.width() * CHANNELS;
    for row in image.pixels().chunks_exact(row_len) {
        let mut first = true;
        for sample in row {
            if !first {
                out.push(' ');
            }
            first = false;
            // Writing into a String cannot fail.
            let _ = write!(out, "{sample}");
        }
        out.push('\n');
    }
    out
}

/// Encodes `image` with the requested subtype.
pub fn encode(image: &ImageBuffer, subtype: Subtype) -> Vec<u8> {
    match subtype {
        Subtype::Ascii => encode_ascii(image).into_bytes(),
        Subtype::Binary => encode_binary(image),
    }
}

/// Writes `image` to `path`.
pub fn write(path: impl AsRef<Path>, image: &ImageBuffer, subtype: Subtype) -> PpmResult<()> {
    let path = path.as_ref();
    std::fs::write(path, encode(image, subtype))?;
    log::debug!(
        "wrote P{} image {}x{} to {}",
        char::from(subtype.magic()),
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

fn header(subtype: Subtype, image: &ImageBuffer) -> String {
    format!(
        "P{}\n{} {}\n255\n",
        char::from(subtype.magic()),
        image.width(),
        image.height()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_bytes;

    fn sample() -> ImageBuffer {
        ImageBuffer::from_raw(2, 2, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 0]).unwrap()
    }

    #[test]
    fn ascii_layout() {
        assert_eq!(
            encode_ascii(&sample()),
            "P3\n2 2\n255\n255 0 0 0 255 0\n0 0 255 255 255 0\n"
        );
    }

    #[test]
    fn binary_layout() {
        let bytes = encode_binary(&sample());
        assert!(bytes.starts_with(b"P6\n2 2\n255\n"));
        assert_eq!(&bytes[bytes.len() - 12..], sample().pixels());
    }

    #[test]
    fn binary_round_trip() {
        let img = sample();
        assert_eq!(decode_bytes(&encode_binary(&img)).unwrap(), img);
    }

    #[test]
    fn ascii_round_trip_matches_binary() {
        let img = sample();
        let a = decode_bytes(encode_ascii(&img).as_bytes()).unwrap();
        let b = decode_bytes(&encode(&img, Subtype::Binary)).unwrap();
        assert_eq!(a, b);
    }
}
