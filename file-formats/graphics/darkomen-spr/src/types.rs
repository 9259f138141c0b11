//! Sprite atlas data structures

use crate::error::Error;

/// Magic bytes at the start of every sprite atlas
pub const MAGIC: [u8; 4] = *b"WHDO";

/// Size in bytes of the file header
pub const HEADER_SIZE: usize = 32;

/// Size in bytes of one frame header table entry
pub const FRAME_HEADER_SIZE: usize = 32;

/// File header of a sprite atlas
///
/// All offsets are absolute file positions. The multi-byte fields occupy
/// 4-byte slots on disk even though only the low 16 bits are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Total file size as recorded in the header
    pub file_size: u16,
    /// Absolute offset of the frame header table
    pub frame_header_offset: u16,
    /// Absolute offset of the frame pixel data region
    pub frame_data_offset: u16,
    /// Absolute offset of the color table
    pub color_table_offset: u16,
    /// Number of 4-byte entries in the color table
    pub color_table_entries: u16,
    /// Number of palettes sharing the color table
    pub palette_count: u16,
    /// Number of frames in the atlas
    pub frame_count: u16,
}

/// How a frame's raster relates to its stored pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    /// Shares pixel data with an earlier frame
    Repeat,
    /// Stored mirrored across the vertical axis
    FlipHorizontally,
    /// Stored mirrored across the horizontal axis
    FlipVertically,
    /// Stored mirrored across both axes
    FlipBoth,
    /// Stored in reading order
    Normal,
    /// Carries no pixel data at all
    Empty,
}

impl TryFrom<u8> for FrameType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Self::Repeat),
            1 => Ok(Self::FlipHorizontally),
            2 => Ok(Self::FlipVertically),
            3 => Ok(Self::FlipBoth),
            4 => Ok(Self::Normal),
            5 => Ok(Self::Empty),
            other => Err(other),
        }
    }
}

/// Compression scheme applied to a frame's pixel indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Pixel indices stored verbatim
    Stored,
    /// PackBits-style runs, see [`crate::rle::unpack_bits`]
    PackBits,
    /// Zero-run encoding, see [`crate::rle::unpack_zero_runs`]
    ZeroRuns,
}

impl TryFrom<u8> for Compression {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Self::Stored),
            1 => Ok(Self::PackBits),
            2 => Ok(Self::ZeroRuns),
            other => Err(other),
        }
    }
}

/// An opaque RGBA color resolved from the file's BGRx color table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha component, always 255 for table entries
    pub a: u8,
}

impl Color {
    /// Decodes one on-disk color table entry (blue, green, red, padding).
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

/// A single decoded frame of the atlas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// How the raster was derived from the stored data
    pub frame_type: FrameType,
    /// Compression scheme the pixel indices were stored under
    pub compression: Compression,
    /// Horizontal placement within the atlas
    pub x: u16,
    /// Vertical placement within the atlas
    pub y: u16,
    /// Raster width in pixels
    pub width: u16,
    /// Raster height in pixels
    pub height: u16,
    /// Number of colors this frame draws from the color table
    pub color_count: u16,
    /// Base slot within the color table that pixel indices are relative to
    pub color_table_offset: u16,
    /// Decoded raster as RGBA bytes in reading order, 4 bytes per pixel.
    /// Empty for [`FrameType::Empty`] frames.
    pub rgba: Vec<u8>,
}

impl Frame {
    /// Number of pixels implied by the header dimensions
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Whether this frame carries a raster
    #[must_use]
    pub fn has_raster(&self) -> bool {
        !self.rgba.is_empty()
    }
}

/// A fully decoded sprite atlas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    /// The file header
    pub header: Header,
    /// Color table shared by all frames, in slot order
    pub color_table: Vec<Color>,
    /// All frames in table order
    pub frames: Vec<Frame>,
}

impl Sprite {
    /// Number of frames in the atlas
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Checks a raw magic field against [`MAGIC`].
pub(crate) fn validate_magic(found: [u8; 4]) -> Result<(), Error> {
    if found == MAGIC {
        Ok(())
    } else {
        Err(Error::InvalidMagic {
            expected: MAGIC,
            found,
        })
    }
}
