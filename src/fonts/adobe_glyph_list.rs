//! Adobe Glyph List (AGL) subset.
//!
//! Maps standard PostScript glyph names to Unicode characters. Covers the
//! names used by StandardEncoding, WinAnsiEncoding and MacRomanEncoding plus
//! common typographic symbols and ligatures.
//!
//! The map is a `phf` perfect hash built at compile time, so lookups are O(1)
//! and there is no runtime initialization to race on.
//!
//! Reference: https://github.com/adobe-type-tools/agl-aglfn

use phf::phf_map;

/// Glyph name to Unicode character, ordered by code point.
pub(crate) static ADOBE_GLYPH_LIST: phf::Map<&'static str, char> = phf_map! {
    "space" => '\u{0020}',
    "exclam" => '\u{0021}',
    "quotedbl" => '\u{0022}',
    "numbersign" => '\u{0023}',
    "dollar" => '\u{0024}',
    "percent" => '\u{0025}',
    "ampersand" => '\u{0026}',
    "quotesingle" => '\u{0027}',
    "parenleft" => '\u{0028}',
    "parenright" => '\u{0029}',
    "asterisk" => '\u{002A}',
    "plus" => '\u{002B}',
    "comma" => '\u{002C}',
    "hyphen" => '\u{002D}',
    "period" => '\u{002E}',
    "slash" => '\u{002F}',
    "zero" => '\u{0030}',
    "one" => '\u{0031}',
    "two" => '\u{0032}',
    "three" => '\u{0033}',
    "four" => '\u{0034}',
    "five" => '\u{0035}',
    "six" => '\u{0036}',
    "seven" => '\u{0037}',
    "eight" => '\u{0038}',
    "nine" => '\u{0039}',
    "colon" => '\u{003A}',
    "semicolon" => '\u{003B}',
    "less" => '\u{003C}',
    "equal" => '\u{003D}',
    "greater" => '\u{003E}',
    "question" => '\u{003F}',
    "at" => '\u{0040}',
    "A" => '\u{0041}',
    "B" => '\u{0042}',
    "C" => '\u{0043}',
    "D" => '\u{0044}',
    "E" => '\u{0045}',
    "F" => '\u{0046}',
    "G" => '\u{0047}',
    "H" => '\u{0048}',
    "I" => '\u{0049}',
    "J" => '\u{004A}',
    "K" => '\u{004B}',
    "L" => '\u{004C}',
    "M" => '\u{004D}',
    "N" => '\u{004E}',
    "O" => '\u{004F}',
    "P" => '\u{0050}',
    "Q" => '\u{0051}',
    "R" => '\u{0052}',
    "S" => '\u{0053}',
    "T" => '\u{0054}',
    "U" => '\u{0055}',
    "V" => '\u{0056}',
    "W" => '\u{0057}',
    "X" => '\u{0058}',
    "Y" => '\u{0059}',
    "Z" => '\u{005A}',
    "bracketleft" => '\u{005B}',
    "backslash" => '\u{005C}',
    "bracketright" => '\u{005D}',
    "asciicircum" => '\u{005E}',
    "underscore" => '\u{005F}',
    "grave" => '\u{0060}',
    "a" => '\u{0061}',
    "b" => '\u{0062}',
    "c" => '\u{0063}',
    "d" => '\u{0064}',
    "e" => '\u{0065}',
    "f" => '\u{0066}',
    "g" => '\u{0067}',
    "h" => '\u{0068}',
    "i" => '\u{0069}',
    "j" => '\u{006A}',
    "k" => '\u{006B}',
    "l" => '\u{006C}',
    "m" => '\u{006D}',
    "n" => '\u{006E}',
    "o" => '\u{006F}',
    "p" => '\u{0070}',
    "q" => '\u{0071}',
    "r" => '\u{0072}',
    "s" => '\u{0073}',
    "t" => '\u{0074}',
    "u" => '\u{0075}',
    "v" => '\u{0076}',
    "w" => '\u{0077}',
    "x" => '\u{0078}',
    "y" => '\u{0079}',
    "z" => '\u{007A}',
    "braceleft" => '\u{007B}',
    "bar" => '\u{007C}',
    "braceright" => '\u{007D}',
    "asciitilde" => '\u{007E}',
    "nbspace" => '\u{00A0}',
    "exclamdown" => '\u{00A1}',
    "cent" => '\u{00A2}',
    "sterling" => '\u{00A3}',
    "currency" => '\u{00A4}',
    "yen" => '\u{00A5}',
    "brokenbar" => '\u{00A6}',
    "section" => '\u{00A7}',
    "dieresis" => '\u{00A8}',
    "copyright" => '\u{00A9}',
    "ordfeminine" => '\u{00AA}',
    "guillemotleft" => '\u{00AB}',
    "logicalnot" => '\u{00AC}',
    "sfthyphen" => '\u{00AD}',
    "registered" => '\u{00AE}',
    "macron" => '\u{00AF}',
    "degree" => '\u{00B0}',
    "plusminus" => '\u{00B1}',
    "twosuperior" => '\u{00B2}',
    "threesuperior" => '\u{00B3}',
    "acute" => '\u{00B4}',
    "mu" => '\u{00B5}',
    "paragraph" => '\u{00B6}',
    "periodcentered" => '\u{00B7}',
    "cedilla" => '\u{00B8}',
    "onesuperior" => '\u{00B9}',
    "ordmasculine" => '\u{00BA}',
    "guillemotright" => '\u{00BB}',
    "onequarter" => '\u{00BC}',
    "onehalf" => '\u{00BD}',
    "threequarters" => '\u{00BE}',
    "questiondown" => '\u{00BF}',
    "Agrave" => '\u{00C0}',
    "Aacute" => '\u{00C1}',
    "Acircumflex" => '\u{00C2}',
    "Atilde" => '\u{00C3}',
    "Adieresis" => '\u{00C4}',
    "Aring" => '\u{00C5}',
    "AE" => '\u{00C6}',
    "Ccedilla" => '\u{00C7}',
    "Egrave" => '\u{00C8}',
    "Eacute" => '\u{00C9}',
    "Ecircumflex" => '\u{00CA}',
    "Edieresis" => '\u{00CB}',
    "Igrave" => '\u{00CC}',
    "Iacute" => '\u{00CD}',
    "Icircumflex" => '\u{00CE}',
    "Idieresis" => '\u{00CF}',
    "Eth" => '\u{00D0}',
    "Ntilde" => '\u{00D1}',
    "Ograve" => '\u{00D2}',
    "Oacute" => '\u{00D3}',
    "Ocircumflex" => '\u{00D4}',
    "Otilde" => '\u{00D5}',
    "Odieresis" => '\u{00D6}',
    "multiply" => '\u{00D7}',
    "Oslash" => '\u{00D8}',
    "Ugrave" => '\u{00D9}',
    "Uacute" => '\u{00DA}',
    "Ucircumflex" => '\u{00DB}',
    "Udieresis" => '\u{00DC}',
    "Yacute" => '\u{00DD}',
    "Thorn" => '\u{00DE}',
    "germandbls" => '\u{00DF}',
    "agrave" => '\u{00E0}',
    "aacute" => '\u{00E1}',
    "acircumflex" => '\u{00E2}',
    "atilde" => '\u{00E3}',
    "adieresis" => '\u{00E4}',
    "aring" => '\u{00E5}',
    "ae" => '\u{00E6}',
    "ccedilla" => '\u{00E7}',
    "egrave" => '\u{00E8}',
    "eacute" => '\u{00E9}',
    "ecircumflex" => '\u{00EA}',
    "edieresis" => '\u{00EB}',
    "igrave" => '\u{00EC}',
    "iacute" => '\u{00ED}',
    "icircumflex" => '\u{00EE}',
    "idieresis" => '\u{00EF}',
    "eth" => '\u{00F0}',
    "ntilde" => '\u{00F1}',
    "ograve" => '\u{00F2}',
    "oacute" => '\u{00F3}',
    "ocircumflex" => '\u{00F4}',
    "otilde" => '\u{00F5}',
    "odieresis" => '\u{00F6}',
    "divide" => '\u{00F7}',
    "oslash" => '\u{00F8}',
    "ugrave" => '\u{00F9}',
    "uacute" => '\u{00FA}',
    "ucircumflex" => '\u{00FB}',
    "udieresis" => '\u{00FC}',
    "yacute" => '\u{00FD}',
    "thorn" => '\u{00FE}',
    "ydieresis" => '\u{00FF}',
    "dotlessi" => '\u{0131}',
    "Lslash" => '\u{0141}',
    "lslash" => '\u{0142}',
    "OE" => '\u{0152}',
    "oe" => '\u{0153}',
    "Scaron" => '\u{0160}',
    "scaron" => '\u{0161}',
    "Ydieresis" => '\u{0178}',
    "Zcaron" => '\u{017D}',
    "zcaron" => '\u{017E}',
    "florin" => '\u{0192}',
    "circumflex" => '\u{02C6}',
    "caron" => '\u{02C7}',
    "breve" => '\u{02D8}',
    "dotaccent" => '\u{02D9}',
    "ring" => '\u{02DA}',
    "ogonek" => '\u{02DB}',
    "tilde" => '\u{02DC}',
    "hungarumlaut" => '\u{02DD}',
    "Alpha" => '\u{0391}',
    "Beta" => '\u{0392}',
    "Gamma" => '\u{0393}',
    "alpha" => '\u{03B1}',
    "beta" => '\u{03B2}',
    "gamma" => '\u{03B3}',
    "delta" => '\u{03B4}',
    "epsilon" => '\u{03B5}',
    "lambda" => '\u{03BB}',
    "pi" => '\u{03C0}',
    "sigma" => '\u{03C3}',
    "endash" => '\u{2013}',
    "emdash" => '\u{2014}',
    "quoteleft" => '\u{2018}',
    "quoteright" => '\u{2019}',
    "quotesinglbase" => '\u{201A}',
    "quotedblleft" => '\u{201C}',
    "quotedblright" => '\u{201D}',
    "quotedblbase" => '\u{201E}',
    "dagger" => '\u{2020}',
    "daggerdbl" => '\u{2021}',
    "bullet" => '\u{2022}',
    "ellipsis" => '\u{2026}',
    "perthousand" => '\u{2030}',
    "guilsinglleft" => '\u{2039}',
    "guilsinglright" => '\u{203A}',
    "fraction" => '\u{2044}',
    "Euro" => '\u{20AC}',
    "trademark" => '\u{2122}',
    "Omega" => '\u{2126}',
    "partialdiff" => '\u{2202}',
    "Delta" => '\u{2206}',
    "product" => '\u{220F}',
    "summation" => '\u{2211}',
    "minus" => '\u{2212}',
    "radical" => '\u{221A}',
    "infinity" => '\u{221E}',
    "integral" => '\u{222B}',
    "approxequal" => '\u{2248}',
    "notequal" => '\u{2260}',
    "lessequal" => '\u{2264}',
    "greaterequal" => '\u{2265}',
    "lozenge" => '\u{25CA}',
    "ff" => '\u{FB00}',
    "fi" => '\u{FB01}',
    "fl" => '\u{FB02}',
    "ffi" => '\u{FB03}',
    "ffl" => '\u{FB04}',
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        assert_eq!(ADOBE_GLYPH_LIST.get("space"), Some(&' '));
        assert_eq!(ADOBE_GLYPH_LIST.get("A"), Some(&'A'));
        assert_eq!(ADOBE_GLYPH_LIST.get("bullet"), Some(&'\u{2022}'));
        assert_eq!(ADOBE_GLYPH_LIST.get("emdash"), Some(&'\u{2014}'));
        assert_eq!(ADOBE_GLYPH_LIST.get("Euro"), Some(&'\u{20AC}'));
        assert_eq!(ADOBE_GLYPH_LIST.get("fi"), Some(&'\u{FB01}'));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(ADOBE_GLYPH_LIST.get("AE"), Some(&'\u{00C6}'));
        assert_eq!(ADOBE_GLYPH_LIST.get("ae"), Some(&'\u{00E6}'));
        assert_eq!(ADOBE_GLYPH_LIST.get("Space"), None);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(ADOBE_GLYPH_LIST.get("zzzNotAGlyph"), None);
        assert_eq!(ADOBE_GLYPH_LIST.get(""), None);
    }
}
