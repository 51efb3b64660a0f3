//! Error types for the text encoding library.
//!
//! Lookups between runes, character codes and glyph names never fail with an
//! error; they return `Option`. The types here cover the fallible boundaries:
//! loading a glyph table from font data and validating configuration.

use crate::fonts::truetype_parser::TrueTypeError;

/// Result type alias for text encoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building an encoder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Font error
    #[error("Font error: {0}")]
    Font(String),

    /// TrueType font data could not be turned into a glyph table
    #[error("TrueType error: {0}")]
    TrueType(#[from] TrueTypeError),

    /// Encoder configuration is not usable
    #[error("Invalid encoder configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_error() {
        let err = Error::Font("no glyphs".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Font error"));
        assert!(msg.contains("no glyphs"));
    }

    #[test]
    fn test_truetype_error_conversion() {
        let err: Error = TrueTypeError::EmptyFont.into();
        assert!(matches!(err, Error::TrueType(TrueTypeError::EmptyFont)));
        assert!(format!("{}", err).contains("empty"));
    }

    #[test]
    fn test_invalid_config_error() {
        let err = Error::InvalidConfig("missing_code 0x10000".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid encoder configuration: missing_code 0x10000"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "font.ttf");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
