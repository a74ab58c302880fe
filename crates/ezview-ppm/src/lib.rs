//! Tokenizer, decoder, and encoder for **PPM** (portable pixmap) images.
//!
//! Only the two 8-bit RGB flavours are supported: `P3` (ASCII samples) and
//! `P6` (raw samples), both with a max sample value of exactly 255.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`tokenizer`] | `Tokenizer`: byte reader with line tracking and one-byte pushback |
//! | [`decoder`] | `decode`, `decode_bytes`, `Subtype` |
//! | [`encoder`] | `encode_ascii`, `encode_binary`, `write` |
//! | [`image`] | `ImageBuffer` |
//! | [`error`] | `PpmError` |
//!
//! # Quick start
//!
//! ```rust
//! use ezview_ppm::decode_bytes;
//!
//! let img = decode_bytes(b"P3\n1 1\n255\n10 20 30\n").unwrap();
//! assert_eq!((img.width(), img.height()), (1, 1));
//! assert_eq!(img.pixels(), &[10, 20, 30]);
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod image;
pub mod tokenizer;

pub use decoder::{decode, decode_bytes, Subtype};
pub use error::{PpmError, PpmResult};
pub use image::ImageBuffer;
pub use tokenizer::Tokenizer;
