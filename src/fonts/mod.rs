//! Font encoding.
//!
//! This module converts text between Unicode, PDF character codes and glyph
//! names for composite TrueType fonts using Identity-H encoding.

mod adobe_glyph_list;
pub mod cmap;
pub mod encoding;
pub mod glyph_list;
pub mod glyph_names;
pub mod truetype_encoder;
pub mod truetype_parser;

pub use cmap::{CMap, IdentityH, IdentityV};
pub use encoding::TextEncoder;
pub use glyph_list::GlyphList;
pub use truetype_encoder::TrueTypeFontEncoder;
pub use truetype_parser::{FontGlyphTable, TrueTypeError};

/// Font-internal glyph identifier. Only meaningful for one font.
pub type GlyphIndex = u16;

/// Character code as stored in a PDF text string.
///
/// For Identity-H encoders the character code equals the glyph index.
pub type CharCode = u32;
