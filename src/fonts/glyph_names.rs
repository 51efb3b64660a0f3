//! Synthesized glyph names.
//!
//! Fonts without meaningful glyph names get names derived from code point
//! values, following the Adobe Glyph List Specification:
//!
//! - `uniXXXX`: `uni` followed by exactly 4 uppercase hex digits (BMP)
//! - `uXXXX` to `uXXXXXX`: `u` followed by 4 to 6 hex digits (any plane)
//!
//! U+0020 is always named `space`.

/// Glyph name of the space character.
pub const SPACE_GLYPH: &str = "space";

/// `uni` + uppercase hex of `value`, zero-padded to at least 4 digits.
///
/// ```
/// use pdf_textenc::fonts::glyph_names::synthesize_glyph_name;
///
/// assert_eq!(synthesize_glyph_name(0x1A2), "uni01A2");
/// ```
pub fn synthesize_glyph_name(value: u32) -> String {
    format!("uni{:04X}", value)
}

/// Glyph name for a rune.
///
/// BMP runes get `uniXXXX`. Runes above U+FFFF cannot be written with four
/// digits, so they get the `uXXXXX` form, which [`parse_u_name`] reads back
/// to the same rune.
pub fn rune_glyph_name(r: char) -> String {
    match r {
        ' ' => SPACE_GLYPH.to_string(),
        _ if (r as u32) <= 0xFFFF => synthesize_glyph_name(r as u32),
        _ => format!("u{:X}", r as u32),
    }
}

/// Parse a `uniXXXX` name: `uni` followed by exactly 4 hex digits.
///
/// Returns `None` for anything else, including surrogate code points.
pub fn parse_uni_name(name: &str) -> Option<char> {
    let digits = name.strip_prefix("uni")?;
    if digits.len() != 4 {
        return None;
    }
    parse_hex_rune(digits)
}

/// Parse a `uXXXX`..`uXXXXXX` name: `u` followed by 4 to 6 hex digits.
pub fn parse_u_name(name: &str) -> Option<char> {
    let digits = name.strip_prefix('u')?;
    if !(4..=6).contains(&digits.len()) {
        return None;
    }
    parse_hex_rune(digits)
}

// from_str_radix alone would accept a leading '+'.
fn parse_hex_rune(digits: &str) -> Option<char> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    char::from_u32(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_pads_to_four_digits() {
        assert_eq!(synthesize_glyph_name(0x1A2), "uni01A2");
        assert_eq!(synthesize_glyph_name(0), "uni0000");
        assert_eq!(synthesize_glyph_name(0xFFFF), "uniFFFF");
        assert_eq!(synthesize_glyph_name(0x1F600), "uni1F600");
    }

    #[test]
    fn test_rune_glyph_name() {
        assert_eq!(rune_glyph_name(' '), "space");
        assert_eq!(rune_glyph_name('A'), "uni0041");
        assert_eq!(rune_glyph_name('\u{01A2}'), "uni01A2");
        assert_eq!(rune_glyph_name('\u{1F600}'), "u1F600");
        assert_eq!(rune_glyph_name('\u{10FFFF}'), "u10FFFF");
    }

    #[test]
    fn test_parse_uni_name() {
        assert_eq!(parse_uni_name("uni0041"), Some('A'));
        assert_eq!(parse_uni_name("uni01a2"), Some('\u{01A2}'));
        assert_eq!(parse_uni_name("uni041"), None);
        assert_eq!(parse_uni_name("uni00041"), None);
        assert_eq!(parse_uni_name("uni+041"), None);
        assert_eq!(parse_uni_name("uniZZZZ"), None);
        assert_eq!(parse_uni_name("Uni0041"), None);
        // Surrogates are not runes
        assert_eq!(parse_uni_name("uniD800"), None);
    }

    #[test]
    fn test_parse_u_name() {
        assert_eq!(parse_u_name("u0041"), Some('A'));
        assert_eq!(parse_u_name("u1F600"), Some('\u{1F600}'));
        assert_eq!(parse_u_name("u10FFFF"), Some('\u{10FFFF}'));
        assert_eq!(parse_u_name("u110000"), None);
        assert_eq!(parse_u_name("u041"), None);
        assert_eq!(parse_u_name("u1234567"), None);
        assert_eq!(parse_u_name("uni0041"), None);
    }

    #[test]
    fn test_rune_names_round_trip() {
        for r in ['A', '\u{00E9}', '\u{FFFD}', '\u{1F600}', '\u{E0001}'] {
            let name = rune_glyph_name(r);
            let parsed = parse_uni_name(&name).or_else(|| parse_u_name(&name));
            assert_eq!(parsed, Some(r), "{}", name);
        }
    }
}
