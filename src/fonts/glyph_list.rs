//! Read-only glyph name lookup.
//!
//! Encoders receive a [`GlyphList`] when they are built instead of reaching
//! for a global. The default list is the built-in Adobe Glyph List; callers
//! with their own naming (for example a font's `post` table) can supply a
//! custom table instead.

use std::collections::HashMap;
use std::sync::Arc;

use super::adobe_glyph_list::ADOBE_GLYPH_LIST;

/// Mapping from glyph names to Unicode characters.
///
/// Cloning is cheap: the static list is a reference and custom tables are
/// shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct GlyphList {
    source: Source,
}

#[derive(Debug, Clone)]
enum Source {
    Adobe(&'static phf::Map<&'static str, char>),
    Custom(Arc<HashMap<String, char>>),
}

impl GlyphList {
    /// The built-in Adobe Glyph List.
    pub fn adobe() -> Self {
        Self {
            source: Source::Adobe(&ADOBE_GLYPH_LIST),
        }
    }

    /// A glyph list built from caller-supplied entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, char)>,
        S: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(name, ch)| (name.into(), ch))
            .collect();
        Self {
            source: Source::Custom(Arc::new(map)),
        }
    }

    /// Look up the character for `name`.
    pub fn lookup(&self, name: &str) -> Option<char> {
        match &self.source {
            Source::Adobe(map) => map.get(name).copied(),
            Source::Custom(map) => map.get(name).copied(),
        }
    }

    /// Number of names in the list.
    pub fn len(&self) -> usize {
        match &self.source {
            Source::Adobe(map) => map.len(),
            Source::Custom(map) => map.len(),
        }
    }

    /// Whether the list has no names.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GlyphList {
    fn default() -> Self {
        Self::adobe()
    }
}
