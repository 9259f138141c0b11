//! Error types for FNT parsing

use thiserror::Error;

/// Errors that can occur while reading a font
#[derive(Debug, Error)]
pub enum Error {
    /// The file does not start with the FNT magic bytes
    #[error("invalid magic: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        /// The magic the format requires
        expected: [u8; 4],
        /// The bytes actually present at the start of the file
        found: [u8; 4],
    },

    /// The fixed glyph header table ended early
    #[error("unexpected EOF while reading glyph headers, expected 256, got index {index}")]
    MissingGlyphHeaders {
        /// Index of the first header that could not be read
        index: usize,
    },

    /// A glyph declares a raster whose pixel count is odd
    ///
    /// Pixels are packed two per byte, so a well-formed glyph always covers
    /// an even number of pixels.
    #[error("glyph {glyph}: {width}x{height} raster does not pack into whole bytes")]
    UnevenRasterArea {
        /// Index of the glyph in the table
        glyph: usize,
        /// Declared width
        width: u16,
        /// Declared height
        height: u16,
    },

    /// A glyph's pixel data could not be read in full
    #[error("glyph {glyph}: pixel data could not be read")]
    TruncatedGlyphData {
        /// Index of the glyph in the table
        glyph: usize,
        /// The underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// An underlying I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for FNT operations
pub type Result<T> = std::result::Result<T, Error>;
