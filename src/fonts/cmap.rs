//! Character code serialization (CMaps).
//!
//! A CMap decides how a character code is laid out as bytes inside a PDF
//! text string. Encoders only depend on the [`CMap`] trait, so the code
//! width is a property of the CMap and never of the encoder.
//!
//! # Identity-H
//!
//! Per PDF spec Section 9.7.5.2, Identity-H is a predefined CMap that maps
//! 2-byte character codes directly to CIDs. With a TrueType CIDFont and an
//! identity CIDToGIDMap the code is the glyph index, written big-endian:
//!
//! ```text
//! <0001002300A4> Tj
//! ```

use std::fmt::Debug;

use super::CharCode;

/// Strategy for writing and reading character codes.
pub trait CMap: Debug + Send + Sync {
    /// PDF name of the CMap, used as the font's `/Encoding`.
    fn name(&self) -> &str;

    /// Number of bytes per character code.
    fn code_width(&self) -> usize;

    /// Whether the CMap is for vertical writing mode.
    fn is_vertical(&self) -> bool {
        false
    }

    /// Append the serialized form of `code` to `out`.
    fn write_code(&self, code: CharCode, out: &mut Vec<u8>);

    /// Read one character code from the start of `data`.
    ///
    /// Returns the code and the number of bytes consumed, or `None` when
    /// `data` does not hold a complete code.
    fn read_code(&self, data: &[u8]) -> Option<(CharCode, usize)>;

    /// Serialize a single character code.
    fn serialize(&self, code: CharCode) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.code_width());
        self.write_code(code, &mut out);
        out
    }
}

/// Identity-H: 2-byte big-endian codes, horizontal writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityH;

/// Identity-V: same code layout as Identity-H, vertical writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityV;

// Codes wider than 16 bits are truncated to their low 16 bits.
fn write_u16_be(code: CharCode, out: &mut Vec<u8>) {
    out.extend_from_slice(&(code as u16).to_be_bytes());
}

fn read_u16_be(data: &[u8]) -> Option<(CharCode, usize)> {
    match data {
        [hi, lo, ..] => Some((u16::from_be_bytes([*hi, *lo]) as CharCode, 2)),
        _ => None,
    }
}

impl CMap for IdentityH {
    fn name(&self) -> &str {
        "Identity-H"
    }

    fn code_width(&self) -> usize {
        2
    }

    fn write_code(&self, code: CharCode, out: &mut Vec<u8>) {
        write_u16_be(code, out);
    }

    fn read_code(&self, data: &[u8]) -> Option<(CharCode, usize)> {
        read_u16_be(data)
    }
}

impl CMap for IdentityV {
    fn name(&self) -> &str {
        "Identity-V"
    }

    fn code_width(&self) -> usize {
        2
    }

    fn is_vertical(&self) -> bool {
        true
    }

    fn write_code(&self, code: CharCode, out: &mut Vec<u8>) {
        write_u16_be(code, out);
    }

    fn read_code(&self, data: &[u8]) -> Option<(CharCode, usize)> {
        read_u16_be(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_h_serialize_big_endian() {
        assert_eq!(IdentityH.serialize(0x0005), vec![0x00, 0x05]);
        assert_eq!(IdentityH.serialize(0x1234), vec![0x12, 0x34]);
        assert_eq!(IdentityH.serialize(0xFFFF), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_identity_h_truncates_to_16_bits() {
        assert_eq!(IdentityH.serialize(0x0001_0041), vec![0x00, 0x41]);
    }

    #[test]
    fn test_identity_h_read_code() {
        assert_eq!(IdentityH.read_code(&[0x01, 0x02, 0x03]), Some((0x0102, 2)));
        assert_eq!(IdentityH.read_code(&[0x01]), None);
        assert_eq!(IdentityH.read_code(&[]), None);
    }

    #[test]
    fn test_identity_names_and_modes() {
        assert_eq!(IdentityH.name(), "Identity-H");
        assert!(!IdentityH.is_vertical());
        assert_eq!(IdentityV.name(), "Identity-V");
        assert!(IdentityV.is_vertical());
        assert_eq!(IdentityV.code_width(), IdentityH.code_width());
    }

    #[test]
    fn test_write_code_appends() {
        let mut out = vec![0xAA];
        IdentityV.write_code(0x00A4, &mut out);
        assert_eq!(out, vec![0xAA, 0x00, 0xA4]);
    }

    #[test]
    fn test_cmap_as_trait_object() {
        let cmap: Box<dyn CMap> = Box::new(IdentityH);
        assert_eq!(cmap.serialize(0x0023), vec![0x00, 0x23]);
    }
}
