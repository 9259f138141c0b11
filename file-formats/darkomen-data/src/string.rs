//! Fixed-width NUL-terminated string fields.
//!
//! Dark Omen files embed names as Latin-1 byte sequences inside fixed-width
//! fields, terminated by the first NUL or running to the field edge when no
//! NUL is present. Decoding maps each byte to the Unicode code point of the
//! same value, which is exact for Latin-1.

use memchr::memchr;
use std::io::{Read, Result};

use crate::io_ext::ReadExt;

/// Decodes a fixed-width string field, truncating at the first NUL.
pub fn string_from_field(field: &[u8]) -> String {
    let end = memchr(0, field).unwrap_or(field.len());
    field[..end].iter().map(|&b| b as char).collect()
}

/// Reads a `width`-byte field and decodes it with [`string_from_field`].
pub fn read_string_field<R: Read>(reader: &mut R, width: usize) -> Result<String> {
    let buf = reader.read_vec(width)?;
    Ok(string_from_field(&buf))
}

/// Splits a NUL-separated byte region into its component strings.
///
/// Consecutive NULs produce empty entries; a trailing unterminated run is
/// kept as a final entry.
pub fn split_nul_separated(region: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = region;
    while let Some(end) = memchr(0, rest) {
        out.push(rest[..end].iter().map(|&b| b as char).collect());
        rest = &rest[end + 1..];
    }
    if !rest.is_empty() {
        out.push(rest.iter().map(|&b| b as char).collect());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncates_at_first_nul() {
        assert_eq!(string_from_field(b"SWORD\0\0\0"), "SWORD");
        assert_eq!(string_from_field(b"SWORD\0AXE"), "SWORD");
    }

    #[test]
    fn unterminated_field_runs_to_width() {
        assert_eq!(string_from_field(b"FULLWIDTH"), "FULLWIDTH");
    }

    #[test]
    fn empty_and_all_nul_fields() {
        assert_eq!(string_from_field(b""), "");
        assert_eq!(string_from_field(b"\0\0\0\0"), "");
    }

    #[test]
    fn latin1_bytes_map_to_code_points() {
        // 0xE9 is e-acute in Latin-1
        assert_eq!(string_from_field(&[b'B', 0xE9, b'l', 0]), "B\u{e9}l");
    }

    #[test]
    fn reads_field_from_reader() {
        let mut r = std::io::Cursor::new(b"AB\0\0rest".to_vec());
        assert_eq!(read_string_field(&mut r, 4).unwrap(), "AB");
        assert_eq!(read_string_field(&mut r, 4).unwrap(), "rest");
        assert!(read_string_field(&mut r, 1).is_err());
    }

    #[test]
    fn splits_nul_separated_region() {
        assert_eq!(
            split_nul_separated(b"one\0two\0\0three\0"),
            vec!["one".to_string(), "two".into(), String::new(), "three".into()],
        );
        assert_eq!(split_nul_separated(b"tail"), vec!["tail".to_string()]);
        assert!(split_nul_separated(b"").is_empty());
    }
}
