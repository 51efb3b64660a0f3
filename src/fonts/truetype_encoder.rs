//! Text encoder for composite (Type 0) TrueType fonts.
//!
//! Embedded TrueType fonts are written as a Type 0 font over a CIDFontType2
//! descendant with Identity-H encoding (PDF spec Section 9.7). Character
//! codes are glyph indices, so the encoder only needs the font's
//! rune -> glyph index table:
//!
//! ```text
//! rune --table--> glyph index == character code --CMap--> bytes
//! ```
//!
//! The table is fixed at construction. The reverse index used for text
//! extraction is built eagerly in the constructor, so an encoder can be
//! shared between threads without any synchronization.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use super::cmap::{CMap, IdentityH};
use super::encoding::TextEncoder;
use super::glyph_list::GlyphList;
use super::glyph_names::{
    parse_u_name, parse_uni_name, rune_glyph_name, synthesize_glyph_name, SPACE_GLYPH,
};
use super::truetype_parser;
use super::{CharCode, GlyphIndex};
use crate::config::EncoderConfig;
use crate::error::{Error, Result};

/// Encoder between runes, Identity-H character codes and glyph names.
///
/// # Examples
///
/// ```
/// use pdf_textenc::fonts::{TextEncoder, TrueTypeFontEncoder};
///
/// let enc = TrueTypeFontEncoder::new([('A', 5), (' ', 3)]);
/// assert_eq!(enc.encode("A "), vec![0x00, 0x05, 0x00, 0x03]);
/// assert_eq!(enc.charcode_to_glyph(3).as_deref(), Some("space"));
/// assert_eq!(enc.glyph_to_charcode("uni0041"), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct TrueTypeFontEncoder {
    /// Rune -> glyph index, as loaded from the font
    rune_to_glyph_index: BTreeMap<char, GlyphIndex>,
    /// Character code -> rune. When runes share a glyph the lowest rune wins.
    charcode_to_rune: HashMap<CharCode, char>,
    cmap: Arc<dyn CMap>,
    glyph_list: GlyphList,
    config: EncoderConfig,
}

impl TrueTypeFontEncoder {
    /// Create an Identity-H encoder from a rune -> glyph index table.
    ///
    /// Glyph names are resolved against the built-in Adobe Glyph List.
    /// The table is not validated; duplicate glyph indices are accepted.
    pub fn new<I>(table: I) -> Self
    where
        I: IntoIterator<Item = (char, GlyphIndex)>,
    {
        Self::build(table, GlyphList::default(), EncoderConfig::default())
    }

    /// Create an encoder that resolves glyph names with `glyph_list`.
    pub fn with_glyph_list<I>(table: I, glyph_list: GlyphList) -> Self
    where
        I: IntoIterator<Item = (char, GlyphIndex)>,
    {
        Self::build(table, glyph_list, EncoderConfig::default())
    }

    /// Create an encoder with explicit configuration.
    ///
    /// Fails if `config` does not fit the Identity-H code space.
    pub fn with_config<I>(
        table: I,
        glyph_list: GlyphList,
        config: EncoderConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (char, GlyphIndex)>,
    {
        config.validate()?;
        Ok(Self::build(table, glyph_list, config))
    }

    /// Load the rune -> glyph index table from TrueType/OpenType font data.
    ///
    /// Fails if the font maps no Unicode characters at all.
    pub fn from_font_data(data: &[u8]) -> Result<Self> {
        let table = truetype_parser::rune_to_glyph_map(data)?;
        if table.is_empty() {
            return Err(Error::Font("font has no Unicode cmap entries".to_string()));
        }
        Ok(Self::new(table))
    }

    /// Replace the CMap, e.g. with `IdentityV` for vertical text.
    pub fn with_cmap(mut self, cmap: impl CMap + 'static) -> Self {
        self.cmap = Arc::new(cmap);
        self
    }

    fn build<I>(table: I, glyph_list: GlyphList, config: EncoderConfig) -> Self
    where
        I: IntoIterator<Item = (char, GlyphIndex)>,
    {
        let rune_to_glyph_index: BTreeMap<char, GlyphIndex> = table.into_iter().collect();

        // Ascending rune order, so the first rune seen for a code is the lowest.
        let mut charcode_to_rune = HashMap::with_capacity(rune_to_glyph_index.len());
        for (&r, &glyph_index) in &rune_to_glyph_index {
            let code = CharCode::from(glyph_index);
            if let Some(&kept) = charcode_to_rune.get(&code) {
                log::debug!(
                    "Glyph index {} shared by {:?} and {:?}; decoding to {:?}",
                    glyph_index,
                    kept,
                    r,
                    kept
                );
                continue;
            }
            charcode_to_rune.insert(code, r);
        }

        Self {
            rune_to_glyph_index,
            charcode_to_rune,
            cmap: Arc::new(IdentityH),
            glyph_list,
            config,
        }
    }

    /// Number of runes in the table.
    pub fn len(&self) -> usize {
        self.rune_to_glyph_index.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rune_to_glyph_index.is_empty()
    }

    /// Glyph index for rune `r`.
    pub fn glyph_index(&self, r: char) -> Option<GlyphIndex> {
        self.rune_to_glyph_index.get(&r).copied()
    }

    /// Runes covered by the font, ascending.
    pub fn runes(&self) -> impl Iterator<Item = char> + '_ {
        self.rune_to_glyph_index.keys().copied()
    }

    /// Set of glyph indices referenced by the table.
    pub fn glyph_indices(&self) -> BTreeSet<GlyphIndex> {
        self.rune_to_glyph_index.values().copied().collect()
    }

    /// `(code, rune)` pairs of the reverse index, ordered by code.
    ///
    /// This is the content of a ToUnicode CMap for the font.
    pub fn to_unicode_pairs(&self) -> Vec<(CharCode, char)> {
        let mut pairs: Vec<_> = self
            .charcode_to_rune
            .iter()
            .map(|(&code, &r)| (code, r))
            .collect();
        pairs.sort_unstable_by_key(|&(code, _)| code);
        pairs
    }

    /// The encoder's configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// The glyph list used for name lookups.
    pub fn glyph_list(&self) -> &GlyphList {
        &self.glyph_list
    }
}

impl TextEncoder for TrueTypeFontEncoder {
    fn cmap(&self) -> &dyn CMap {
        self.cmap.as_ref()
    }

    /// Runes missing from the font are written as `config.missing_code`
    /// (`.notdef` by default), so the output always holds one code per rune.
    fn encode(&self, text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.chars().count() * self.cmap.code_width());
        for r in text.chars() {
            let code = self
                .rune_to_charcode(r)
                .unwrap_or(self.config.missing_code);
            log::trace!("encode {:?} -> 0x{:04X}", r, code);
            self.cmap.write_code(code, &mut out);
        }
        out
    }

    /// Codes without a rune decode to `config.replacement_char`.
    fn decode(&self, data: &[u8]) -> String {
        let mut text = String::with_capacity(data.len() / self.cmap.code_width().max(1));
        let mut rest = data;
        while !rest.is_empty() {
            let (code, used) = match self.cmap.read_code(rest) {
                Some((code, used)) if used > 0 && used <= rest.len() => (code, used),
                _ => {
                    log::warn!(
                        "Dropping {} trailing byte(s) that do not form a {} code",
                        rest.len(),
                        self.cmap.name()
                    );
                    break;
                },
            };
            text.push(
                self.charcode_to_rune(code)
                    .unwrap_or(self.config.replacement_char),
            );
            rest = &rest[used..];
        }
        text
    }

    fn rune_to_charcode(&self, r: char) -> Option<CharCode> {
        match self.rune_to_glyph_index.get(&r) {
            // Identity: charcode == glyph index
            Some(&glyph_index) => Some(CharCode::from(glyph_index)),
            None => {
                log::debug!("Missing rune {} ({:?}) from encoding", r as u32, r);
                None
            },
        }
    }

    fn charcode_to_rune(&self, code: CharCode) -> Option<char> {
        let r = self.charcode_to_rune.get(&code).copied();
        if r.is_none() {
            log::debug!("charcode_to_rune: no match. code=0x{:04X} enc={}", code, self);
        }
        r
    }

    /// The name is built from `code` itself, not from the rune it decodes
    /// to. Only a code decoding to U+0020 gets a standard name (`space`).
    fn charcode_to_glyph(&self, code: CharCode) -> Option<String> {
        if self.charcode_to_rune(code) == Some(' ') {
            return Some(SPACE_GLYPH.to_string());
        }
        Some(synthesize_glyph_name(code))
    }

    fn glyph_to_charcode(&self, glyph: &str) -> Option<CharCode> {
        if let Some(r) = parse_uni_name(glyph).or_else(|| parse_u_name(glyph)) {
            return self.rune_to_charcode(r);
        }

        if let Some(r) = self.glyph_list.lookup(glyph) {
            return self.rune_to_charcode(r);
        }

        log::debug!(
            "Symbol encoding error: unable to find glyph->charcode entry ({})",
            glyph
        );
        None
    }

    fn rune_to_glyph(&self, r: char) -> Option<String> {
        Some(rune_glyph_name(r))
    }

    /// Does not consult the font's table.
    fn glyph_to_rune(&self, glyph: &str) -> Option<char> {
        let r = parse_uni_name(glyph)
            .or_else(|| parse_u_name(glyph))
            .or_else(|| self.glyph_list.lookup(glyph));
        if r.is_none() {
            log::debug!("glyph_to_rune: unknown glyph name ({})", glyph);
        }
        r
    }
}

impl fmt::Display for TrueTypeFontEncoder {
    /// `TRUETYPE_ENCODER{2 entries, 32=0x20 ' ': 3, 65=0x41 'A': 5}`, at most
    /// [`crate::config::MAX_SUMMARY_ENTRIES`] samples in ascending rune order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRUETYPE_ENCODER{{{} entries", self.len())?;
        for (&r, glyph_index) in self
            .rune_to_glyph_index
            .iter()
            .take(self.config.summary_entries())
        {
            write!(f, ", {}=0x{:02x} {:?}: {}", r as u32, r as u32, r, glyph_index)?;
        }
        write!(f, "}}")
    }
}
