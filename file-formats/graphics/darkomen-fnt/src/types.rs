//! Font data structures

/// Magic bytes at the start of every font file
pub const MAGIC: [u8; 4] = *b"FONT";

/// Size in bytes of the file header
pub const HEADER_SIZE: usize = 16;

/// Number of entries in each color table
pub const PALETTE_COLORS: usize = 16;

/// Number of glyph slots in every font
pub const GLYPH_COUNT: usize = 256;

/// Size in bytes of one glyph header table entry
pub const GLYPH_HEADER_SIZE: usize = 16;

/// An opaque RGBA color resolved from a BGRx palette entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha component, always 255 for palette entries
    pub a: u8,
}

impl Color {
    /// Decodes one on-disk palette entry (blue, green, red, padding).
    #[must_use]
    pub const fn from_bgrx(entry: [u8; 4]) -> Self {
        Self {
            r: entry[2],
            g: entry[1],
            b: entry[0],
            a: 255,
        }
    }
}

/// File header of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Horizontal advance added after every glyph
    pub base_advance_width: u16,
    /// Vertical advance between lines; 0 makes lines touch
    pub base_advance_height: u16,
    /// Second height term; added to the advance height it gives the full
    /// line height
    pub height2: u16,
    /// Unknown field at offset 10
    pub unknown: u16,
    /// Absolute offset the per-glyph data offsets are relative to
    pub glyph_data_offset: u16,
}

/// Whether a glyph slot carries pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphType {
    /// Carries a raster
    Normal,
    /// Zero-area slot with no pixel data
    Empty,
}

/// One of the 256 glyph slots of a font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Whether the slot carries a raster
    pub glyph_type: GlyphType,
    /// Raster width in pixels
    pub width: u16,
    /// Raster height in pixels
    pub height: u16,
    /// Glyph-specific advance, added to the font's base advance width
    pub advance_width: u16,
    /// Two bytes that shift the glyph vertically when rendering; exact
    /// semantics unknown
    pub positioning: [u8; 2],
    /// Decoded raster as RGBA bytes in reading order, 4 bytes per pixel.
    /// Empty for [`GlyphType::Empty`] slots.
    pub rgba: Vec<u8>,
}

impl Glyph {
    /// Whether this glyph carries a raster
    #[must_use]
    pub fn has_raster(&self) -> bool {
        !self.rgba.is_empty()
    }
}

/// A fully decoded font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// The file header
    pub header: Header,
    /// The two 16-entry color tables. Glyph pixels index the first; the
    /// second is carried along unused by rasterisation.
    pub palettes: [[Color; PALETTE_COLORS]; 2],
    /// All 256 glyph slots, indexed by byte value
    pub glyphs: Vec<Glyph>,
}

impl Font {
    /// Total height of one text line in pixels
    #[must_use]
    pub fn line_height(&self) -> u32 {
        u32::from(self.header.base_advance_height) + u32::from(self.header.height2)
    }

    /// The glyph slot for a byte value
    #[must_use]
    pub fn glyph(&self, byte: u8) -> &Glyph {
        &self.glyphs[usize::from(byte)]
    }
}
