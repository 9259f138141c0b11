//! Integration tests for FNT parsing

use std::io::Cursor;

use darkomen_fnt::{Font, GLYPH_COUNT, GlyphType, glyph_to_image};

const HEADER_SIZE: usize = 16;
const GLYPH_HEADER_SIZE: usize = 16;

/// Font with 'A' and 'B' glyphs of different widths sharing a data region.
fn sample_font() -> Vec<u8> {
    let glyph_data_offset = (HEADER_SIZE + 2 * 64 + GLYPH_COUNT * GLYPH_HEADER_SIZE) as u16;

    let mut buf = Vec::new();
    buf.extend_from_slice(b"FONT");
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&10u16.to_le_bytes());
    buf.extend_from_slice(&4u16.to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&glyph_data_offset.to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());

    for i in 0..16u8 {
        buf.extend_from_slice(&[i, 2 * i, 3 * i, 0]);
    }
    for _ in 0..16u8 {
        buf.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0]);
    }

    for slot in 0..GLYPH_COUNT {
        match slot {
            65 => {
                buf.extend_from_slice(&[0, 0, 0, 0]);
                buf.extend_from_slice(&2u16.to_le_bytes());
                buf.extend_from_slice(&2u16.to_le_bytes());
                buf.extend_from_slice(&2u16.to_le_bytes());
                buf.extend_from_slice(&0u16.to_le_bytes());
                buf.extend_from_slice(&0u16.to_le_bytes());
                buf.extend_from_slice(&0u16.to_le_bytes());
            }
            66 => {
                buf.extend_from_slice(&[0, 0, 0, 0]);
                buf.extend_from_slice(&4u16.to_le_bytes());
                buf.extend_from_slice(&3u16.to_le_bytes());
                buf.extend_from_slice(&1u16.to_le_bytes());
                buf.extend_from_slice(&0u16.to_le_bytes());
                buf.extend_from_slice(&2u16.to_le_bytes()); // after A's 2 bytes
                buf.extend_from_slice(&0u16.to_le_bytes());
            }
            _ => buf.extend_from_slice(&[0u8; GLYPH_HEADER_SIZE]),
        }
    }

    // A: 4 pixels (2 bytes), B: 4 pixels (2 bytes).
    buf.extend_from_slice(&[0x10, 0x32, 0x54, 0x76]);
    buf
}

#[test]
fn test_parse_and_render() {
    let font = Font::parse(&mut Cursor::new(sample_font())).unwrap();

    assert_eq!(font.line_height(), 14);
    assert_eq!(font.glyphs.len(), GLYPH_COUNT);

    let a = font.glyph(b'A');
    assert_eq!(a.glyph_type, GlyphType::Normal);
    let img = glyph_to_image(a).unwrap();
    assert_eq!(img.dimensions(), (2, 2));
    // 0x10 unpacks to palette entries 0 and 1, 0x32 to 2 and 3.
    assert_eq!(img.get_pixel(0, 0).0[2], 0); // blue of entry 0
    assert_eq!(img.get_pixel(1, 0).0, [3, 2, 1, 255]);

    let b = font.glyph(b'B');
    assert_eq!((b.width, b.height), (4, 1));
    assert_eq!(b.advance_width, 3);
    let img = glyph_to_image(b).unwrap();
    assert_eq!(img.dimensions(), (4, 1));
    assert_eq!(img.get_pixel(0, 0).0, [12, 8, 4, 255]); // entry 4

    // Everything else is an empty slot.
    let empties = font
        .glyphs
        .iter()
        .filter(|g| g.glyph_type == GlyphType::Empty)
        .count();
    assert_eq!(empties, GLYPH_COUNT - 2);
}

#[test]
fn test_text_advance_arithmetic() {
    let font = Font::parse(&mut Cursor::new(sample_font())).unwrap();

    // Advancing over "AB" moves base + glyph advance per character.
    let advance: u32 = b"AB"
        .iter()
        .map(|&c| u32::from(font.header.base_advance_width) + u32::from(font.glyph(c).advance_width))
        .sum();
    assert_eq!(advance, (1 + 2) + (1 + 3));
}
