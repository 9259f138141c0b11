//! Font decoding

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use darkomen_data::ReadExt;

use crate::error::{Error, Result};
use crate::types::{
    Color, Font, GLYPH_COUNT, GLYPH_HEADER_SIZE, Glyph, GlyphType, HEADER_SIZE, Header, MAGIC,
    PALETTE_COLORS,
};

struct GlyphHeader {
    glyph_type: GlyphType,
    positioning: [u8; 2],
    width: u16,
    advance_width: u16,
    height: u16,
    data_offset: u16,
}

impl Font {
    /// Parses a font from a seekable byte source.
    pub fn parse<R: Read + Seek>(reader: &mut R) -> Result<Self> {
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
            base_advance_width: cur.read_u16_le()?,
            base_advance_height: cur.read_u16_le()?,
            height2: cur.read_u16_le()?,
            unknown: cur.read_u16_le()?,
            glyph_data_offset: cur.read_u16_le()?,
            // The final two header bytes are always zero.
        };

        let palettes = [read_palette(reader)?, read_palette(reader)?];
        let glyph_headers = read_glyph_headers(reader)?;

        let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
        for (index, entry) in glyph_headers.iter().enumerate() {
            glyphs.push(decode_glyph(reader, &header, index, entry, &palettes[0])?);
        }

        Ok(Self {
            header,
            palettes,
            glyphs,
        })
    }

    /// Opens and parses a font from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(&mut BufReader::new(file))
    }
}

fn read_palette<R: Read>(reader: &mut R) -> Result<[Color; PALETTE_COLORS]> {
    let mut colors = [Color::default(); PALETTE_COLORS];
    for color in &mut colors {
        let entry: [u8; 4] = reader.read_array()?;
        *color = Color::from_bgrx(entry);
    }
    Ok(colors)
}

fn read_glyph_headers<R: Read>(reader: &mut R) -> Result<Vec<GlyphHeader>> {
    let mut headers = Vec::with_capacity(GLYPH_COUNT);

    for index in 0..GLYPH_COUNT {
        let entry: [u8; GLYPH_HEADER_SIZE] = reader.read_array().map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                Error::MissingGlyphHeaders { index }
            } else {
                Error::Io(e)
            }
        })?;

        let mut cur = &entry[4..];
        let width = cur.read_u16_le()?;
        let advance_width = cur.read_u16_le()?;
        let height = cur.read_u16_le()?;
        cur.read_u16_le()?; // always zero
        let data_offset = cur.read_u16_le()?;

        let glyph_type = if width == 0 && height == 0 {
            GlyphType::Empty
        } else {
            GlyphType::Normal
        };

        headers.push(GlyphHeader {
            glyph_type,
            positioning: [entry[2], entry[3]],
            width,
            advance_width,
            height,
            data_offset,
        });
    }

    Ok(headers)
}

fn decode_glyph<R: Read + Seek>(
    reader: &mut R,
    header: &Header,
    index: usize,
    info: &GlyphHeader,
    palette: &[Color; PALETTE_COLORS],
) -> Result<Glyph> {
    let mut rgba = Vec::new();

    if info.glyph_type == GlyphType::Normal {
        let pixels = usize::from(info.width) * usize::from(info.height);
        if pixels % 2 != 0 {
            return Err(Error::UnevenRasterArea {
                glyph: index,
                width: info.width,
                height: info.height,
            });
        }

        reader.seek(SeekFrom::Start(
            u64::from(header.glyph_data_offset) + u64::from(info.data_offset),
        ))?;
        let packed = reader
            .read_vec(pixels / 2)
            .map_err(|source| Error::TruncatedGlyphData {
                glyph: index,
                source,
            })?;

        rgba.reserve_exact(pixels * 4);
        for byte in packed {
            for nibble in [byte & 0x0F, byte >> 4] {
                let color = palette[usize::from(nibble)];
                rgba.extend_from_slice(&[color.r, color.g, color.b, color.a]);
            }
        }
    }

    Ok(Glyph {
        glyph_type: info.glyph_type,
        width: info.width,
        height: info.height,
        advance_width: info.advance_width,
        positioning: info.positioning,
        rgba,
    })
}
