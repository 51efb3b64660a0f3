//! Text encoder interface.
//!
//! A text encoder converts between three views of the same text:
//!
//! - runes (Unicode scalar values) supplied by the application,
//! - character codes as serialized in content streams,
//! - glyph names used by metadata and subsetting.
//!
//! Lookups report "not found" through `None`. Missing characters are common
//! in real documents and never abort processing; callers pick the fallback.

use std::fmt::{Debug, Display};

use super::cmap::CMap;
use super::CharCode;

/// Conversions between runes, character codes and glyph names for one font.
pub trait TextEncoder: Debug + Display + Send + Sync {
    /// The CMap that serializes this encoder's character codes.
    fn cmap(&self) -> &dyn CMap;

    /// Encode a Unicode string to PDF string bytes.
    fn encode(&self, text: &str) -> Vec<u8>;

    /// Decode PDF string bytes back to Unicode.
    fn decode(&self, data: &[u8]) -> String;

    /// Character code for rune `r`.
    fn rune_to_charcode(&self, r: char) -> Option<CharCode>;

    /// Rune for character code `code`.
    fn charcode_to_rune(&self, code: CharCode) -> Option<char>;

    /// Glyph name for character code `code`.
    fn charcode_to_glyph(&self, code: CharCode) -> Option<String>;

    /// Character code for glyph name `glyph`.
    fn glyph_to_charcode(&self, glyph: &str) -> Option<CharCode>;

    /// Glyph name for rune `r`.
    fn rune_to_glyph(&self, r: char) -> Option<String>;

    /// Rune for glyph name `glyph`.
    fn glyph_to_rune(&self, glyph: &str) -> Option<char>;
}
