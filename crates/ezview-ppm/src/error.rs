use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type PpmResult<T> = Result<T, PpmError>;

/// A failure while reading a PPM image.
///
/// Every variant raised during tokenization carries the 1-based line number
/// the tokenizer was on when the failure was detected.
#[derive(thiserror::Error, Debug)]
pub enum PpmError {
    #[error("file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unexpected end of file on line {line}")]
    UnexpectedEndOfInput { line: usize },

    #[error("expected {:?} on line {line}, found {:?}", char::from(*expected), char::from(*found))]
    UnexpectedToken { expected: u8, found: u8, line: usize },

    #[error("expected number on line {line}")]
    MalformedNumber { line: usize },

    #[error("unsupported ppm magic number P{} on line {line} (only P3 and P6 are supported)", char::from(*found))]
    UnsupportedFormat { found: u8, line: usize },

    #[error("incorrect max sample value {value} on line {line} (must be 255)")]
    InvalidMaxValue { value: f64, line: usize },

    #[error("there must be exactly one whitespace byte after the max value field, line {line}")]
    MalformedHeader { line: usize },

    #[error("invalid image dimensions {width}x{height} on line {line}")]
    InvalidDimensions { width: f64, height: f64, line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PpmError {
    /// Returns the line number recorded with the error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEndOfInput { line }
            | Self::UnexpectedToken { line, .. }
            | Self::MalformedNumber { line }
            | Self::UnsupportedFormat { line, .. }
            | Self::InvalidMaxValue { line, .. }
            | Self::MalformedHeader { line }
            | Self::InvalidDimensions { line, .. } => Some(*line),
            Self::FileNotFound { .. } | Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_line_number() {
        let err = PpmError::MalformedNumber { line: 7 };
        assert!(err.to_string().contains("line 7"));
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn unexpected_token_renders_characters() {
        let err = PpmError::UnexpectedToken { expected: b'P', found: b'X', line: 1 };
        assert_eq!(err.to_string(), "expected 'P' on line 1, found 'X'");
    }

    #[test]
    fn unsupported_format_names_the_magic() {
        let err = PpmError::UnsupportedFormat { found: b'5', line: 1 };
        assert!(err.to_string().contains("P5"));
    }

    #[test]
    fn file_errors_have_no_line() {
        let err = PpmError::FileNotFound { path: PathBuf::from("missing.ppm") };
        assert_eq!(err.line(), None);
        assert!(err.to_string().contains("missing.ppm"));
    }
}
