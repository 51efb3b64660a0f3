//! Rune -> glyph index tables from TrueType/OpenType font data.
//!
//! This module wraps the `ttf-parser` crate to read a font's `cmap` table
//! into the table a [`TrueTypeFontEncoder`](super::TrueTypeFontEncoder)
//! is built from. Every Unicode subtable is scanned, so supplementary-plane
//! characters from format 12/13 subtables are included.

use std::collections::BTreeMap;

use ttf_parser::Face;

use super::GlyphIndex;

/// Error types for TrueType font parsing.
#[derive(Debug, thiserror::Error)]
pub enum TrueTypeError {
    /// Failed to parse font file
    #[error("Failed to parse font file: {0}")]
    ParseError(String),

    /// Font file is empty or invalid
    #[error("Font file is empty or invalid")]
    EmptyFont,

    /// Required table is missing
    #[error("Required font table is missing: {0}")]
    MissingTable(String),
}

/// Result type for TrueType operations.
pub type TrueTypeResult<T> = Result<T, TrueTypeError>;

/// Glyph table of one font.
#[derive(Debug, Clone)]
pub struct FontGlyphTable {
    /// PostScript name, if the font has one
    pub postscript_name: Option<String>,
    /// Number of glyphs in the font
    pub num_glyphs: u16,
    /// Rune -> glyph index for every character the font maps
    pub runes: BTreeMap<char, GlyphIndex>,
}

/// Parse font data and collect its Unicode mappings.
pub fn load_glyph_table(data: &[u8]) -> TrueTypeResult<FontGlyphTable> {
    if data.is_empty() {
        return Err(TrueTypeError::EmptyFont);
    }

    let face = Face::parse(data, 0).map_err(|e| TrueTypeError::ParseError(e.to_string()))?;
    let cmap = face
        .tables()
        .cmap
        .ok_or_else(|| TrueTypeError::MissingTable("cmap".to_string()))?;

    let mut runes = BTreeMap::new();
    for subtable in cmap.subtables {
        if !subtable.is_unicode() {
            continue;
        }
        subtable.codepoints(|codepoint| {
            let Some(ch) = char::from_u32(codepoint) else {
                return;
            };
            // Glyph 0 is .notdef, not a real mapping
            match face.glyph_index(ch) {
                Some(glyph_id) if glyph_id.0 != 0 => {
                    runes.entry(ch).or_insert(glyph_id.0);
                },
                _ => {},
            }
        });
    }

    let postscript_name = face
        .names()
        .into_iter()
        .find(|name| name.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
        .and_then(|name| name.to_string());

    log::debug!(
        "Loaded {} rune mappings for {} glyphs ({})",
        runes.len(),
        face.number_of_glyphs(),
        postscript_name.as_deref().unwrap_or("unnamed font")
    );

    Ok(FontGlyphTable {
        postscript_name,
        num_glyphs: face.number_of_glyphs(),
        runes,
    })
}

/// Parse font data into a rune -> glyph index table.
pub fn rune_to_glyph_map(data: &[u8]) -> TrueTypeResult<BTreeMap<char, GlyphIndex>> {
    load_glyph_table(data).map(|table| table.runes)
}
