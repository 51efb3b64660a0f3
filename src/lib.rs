// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # pdf_textenc
//!
//! Text encoding for composite (Type 0) fonts backed by embedded TrueType
//! fonts, as used when writing PDF content streams.
//!
//! ## Features
//! - **Identity-H encoding**: 2-byte big-endian character codes equal to glyph indices
//! - **Text extraction**: character code -> Unicode via a reverse index
//! - **Glyph names**: `uniXXXX` synthesis and Adobe Glyph List lookups
//! - **Font loading**: rune -> glyph index tables read with `ttf-parser`
//!
//! ## Quick Start
//!
//! ```
//! use pdf_textenc::fonts::{TextEncoder, TrueTypeFontEncoder};
//!
//! let encoder = TrueTypeFontEncoder::new([('H', 43), ('i', 76)]);
//! let bytes = encoder.encode("Hi");
//! assert_eq!(bytes, vec![0x00, 0x2B, 0x00, 0x4C]);
//! assert_eq!(encoder.decode(&bytes), "Hi");
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

/// Encoder configuration
pub mod config;

// Font encoding
pub mod fonts;

// Re-exports
pub use config::EncoderConfig;
pub use error::{Error, Result};
pub use fonts::{CMap, GlyphList, TextEncoder, TrueTypeFontEncoder};
