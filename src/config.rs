//! Configuration for text encoders.

use crate::error::{Error, Result};
use crate::fonts::CharCode;

/// Maximum number of table entries shown in an encoder's `Display` summary.
pub const MAX_SUMMARY_ENTRIES: usize = 10;

/// Text encoder configuration.
///
/// # Example
///
/// ```
/// use pdf_textenc::config::EncoderConfig;
///
/// let config = EncoderConfig::new()
///     .with_missing_code(0x0003)
///     .with_replacement_char('?');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Character code written for runes the font does not cover.
    ///
    /// Default: 0, the `.notdef` glyph of every TrueType font.
    pub missing_code: CharCode,

    /// Character substituted when decoding a code with no rune.
    ///
    /// Default: U+FFFD REPLACEMENT CHARACTER.
    pub replacement_char: char,

    /// Number of sample entries in the `Display` summary.
    ///
    /// Clamped to [`MAX_SUMMARY_ENTRIES`].
    pub max_summary_entries: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            missing_code: 0,
            replacement_char: '\u{FFFD}',
            max_summary_entries: MAX_SUMMARY_ENTRIES,
        }
    }

    /// Set the code written for unmapped runes.
    pub fn with_missing_code(mut self, code: CharCode) -> Self {
        self.missing_code = code;
        self
    }

    /// Set the character produced for undecodable codes.
    pub fn with_replacement_char(mut self, ch: char) -> Self {
        self.replacement_char = ch;
        self
    }

    /// Set the number of summary samples.
    pub fn with_max_summary_entries(mut self, n: usize) -> Self {
        self.max_summary_entries = n;
        self
    }

    /// Number of summary samples actually rendered.
    pub fn summary_entries(&self) -> usize {
        self.max_summary_entries.min(MAX_SUMMARY_ENTRIES)
    }

    /// Check that the configuration fits the 2-byte identity code space.
    pub fn validate(&self) -> Result<()> {
        if self.missing_code > 0xFFFF {
            return Err(Error::InvalidConfig(format!(
                "missing_code 0x{:X} does not fit in 2 bytes",
                self.missing_code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.missing_code, 0);
        assert_eq!(config.replacement_char, '\u{FFFD}');
        assert_eq!(config.summary_entries(), MAX_SUMMARY_ENTRIES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_summary_entries_clamped() {
        let config = EncoderConfig::new().with_max_summary_entries(500);
        assert_eq!(config.summary_entries(), MAX_SUMMARY_ENTRIES);

        let config = EncoderConfig::new().with_max_summary_entries(3);
        assert_eq!(config.summary_entries(), 3);
    }

    #[test]
    fn test_validate_rejects_wide_missing_code() {
        let config = EncoderConfig::new().with_missing_code(0x1_0000);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = EncoderConfig::new().with_missing_code(0xFFFF);
        assert!(config.validate().is_ok());
    }
}
