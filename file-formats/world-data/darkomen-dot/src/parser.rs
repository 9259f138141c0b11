//! Path map decoding

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path as FsPath;

use darkomen_data::{ReadExt, string_from_field};

use crate::error::{Error, Result};
use crate::types::{FOOTER_MAP_FILE_OFFSET, FOOTER_SIZE, HEADER_SIZE, Header, MAGIC, Map, Path, Point};

impl Map {
    /// Parses a path map from a byte source.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let raw: [u8; HEADER_SIZE] = reader.read_array()?;
        let found = [raw[0], raw[1], raw[2], raw[3]];
        if found != MAGIC {
            return Err(Error::InvalidMagic {
                expected: MAGIC,
                found,
            });
        }

        let mut cur = &raw[4..];
        let header = Header {
            unknown: [cur.read_u32_le()?, cur.read_u32_le()?],
            path_count: cur.read_u32_le()?,
        };

        let count = header.path_count as usize;
        let mut paths = Vec::with_capacity(count.min(1024));
        for index in 0..count {
            paths.push(read_path(reader, index)?);
        }

        let footer: [u8; FOOTER_SIZE] = reader
            .read_array()
            .map_err(|source| Error::TruncatedFooter { source })?;
        let map_file_name = string_from_field(&footer[FOOTER_MAP_FILE_OFFSET..]);

        Ok(Self {
            header,
            paths,
            map_file_name,
        })
    }

    /// Opens and parses a path map from disk.
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(&mut BufReader::new(file))
    }
}

fn read_path<R: Read>(reader: &mut R, index: usize) -> Result<Path> {
    let truncated = |source| Error::TruncatedPath { index, source };

    let point_count = reader.read_u32_le().map_err(truncated)?;

    let mut points = Vec::with_capacity(usize::try_from(point_count).unwrap_or(0).min(4096));
    for _ in 0..point_count {
        let raw: [u8; 16] = reader.read_array().map_err(truncated)?;
        let mut cur = &raw[..];
        points.push(Point {
            x: cur.read_u32_le()?,
            y: cur.read_u32_le()?,
            // Trailing 8 bytes of each point are padding.
        });
    }

    let markers = [
        reader.read_u32_le().map_err(truncated)?,
        reader.read_u32_le().map_err(truncated)?,
    ];
    let reserved: [u8; 36] = reader.read_array().map_err(truncated)?;

    Ok(Path {
        points,
        markers,
        reserved,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn build_map(paths: &[&[(u32, u32)]], file_name: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&2u32.to_le_bytes());
        buf.extend_from_slice(&(paths.len() as u32).to_le_bytes());

        for path in paths {
            buf.extend_from_slice(&(path.len() as u32).to_le_bytes());
            for (x, y) in *path {
                buf.extend_from_slice(&x.to_le_bytes());
                buf.extend_from_slice(&y.to_le_bytes());
                buf.extend_from_slice(&[0u8; 8]);
            }
            buf.extend_from_slice(&5u32.to_le_bytes());
            buf.extend_from_slice(&10u32.to_le_bytes());
            buf.extend_from_slice(&[0u8; 36]);
        }

        let mut footer = [0u8; FOOTER_SIZE];
        footer[FOOTER_MAP_FILE_OFFSET..FOOTER_MAP_FILE_OFFSET + file_name.len()]
            .copy_from_slice(file_name.as_bytes());
        buf.extend_from_slice(&footer);
        buf
    }

    #[test]
    fn test_parse_paths_and_footer() {
        let bytes = build_map(&[&[(10, 20), (30, 40)], &[(1, 1)]], "B1_01.BMP");
        let map = Map::parse(&mut &bytes[..]).unwrap();

        assert_eq!(map.header.path_count, 2);
        assert_eq!(map.paths.len(), 2);
        assert_eq!(map.paths[0].points, vec![
            Point { x: 10, y: 20 },
            Point { x: 30, y: 40 }
        ]);
        assert_eq!(map.paths[0].markers, [5, 10]);
        assert_eq!(map.paths[1].points.len(), 1);
        assert_eq!(map.map_file_name, "B1_01.BMP");
        assert_eq!(map.point_count(), 3);
    }

    #[test]
    fn test_parse_empty_path_list() {
        let bytes = build_map(&[], "B1_01.BMP");
        let map = Map::parse(&mut &bytes[..]).unwrap();
        assert!(map.paths.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_magic() {
        let mut bytes = build_map(&[], "B1_01.BMP");
        bytes[..4].copy_from_slice(b"WDOT");

        let err = Map::parse(&mut &bytes[..]).unwrap_err();
        assert!(matches!(err, Error::InvalidMagic { .. }));
    }

    #[test]
    fn test_truncated_path() {
        let mut bytes = build_map(&[&[(10, 20)]], "B1_01.BMP");
        bytes.truncate(HEADER_SIZE + 4 + 8); // cut inside the first point

        let err = Map::parse(&mut &bytes[..]).unwrap_err();
        assert!(matches!(err, Error::TruncatedPath { index: 0, .. }));
    }

    #[test]
    fn test_missing_footer() {
        let mut bytes = build_map(&[&[(10, 20)]], "B1_01.BMP");
        bytes.truncate(bytes.len() - FOOTER_SIZE);

        let err = Map::parse(&mut &bytes[..]).unwrap_err();
        assert!(matches!(err, Error::TruncatedFooter { .. }));
    }
}
