//! Error types for SPR parsing

use thiserror::Error;

/// Errors that can occur while reading a sprite atlas
#[derive(Debug, Error)]
pub enum Error {
    /// The file does not start with the SPR magic bytes
    #[error("invalid magic: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        /// The magic the format requires
        expected: [u8; 4],
        /// The bytes actually present at the start of the file
        found: [u8; 4],
    },

    /// The frame header table ended before the declared number of entries
    #[error("unexpected EOF while reading frame headers, expected {expected}, got index {index}")]
    MissingFrameHeaders {
        /// Frame count declared in the file header
        expected: usize,
        /// Index of the first header that could not be read
        index: usize,
    },

    /// A frame header carries a type tag outside the known range
    #[error("frame {frame}: unknown frame type tag {tag}")]
    UnknownFrameType {
        /// Index of the offending frame
        frame: usize,
        /// The raw tag value
        tag: u8,
    },

    /// A frame header carries a compression tag outside the known range
    #[error("frame {frame}: unknown compression tag {tag}")]
    UnknownCompression {
        /// Index of the offending frame
        frame: usize,
        /// The raw tag value
        tag: u8,
    },

    /// A run-length control byte implied a read past the end of the input
    #[error("compressed data is truncated mid-run")]
    TruncatedRun {
        /// The underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// A decompressed raster does not match the dimensions in its header
    #[error("frame {frame}: raster has {actual} pixels, header declares {expected}")]
    RasterSizeMismatch {
        /// Index of the offending frame
        frame: usize,
        /// Pixel count implied by the header dimensions
        expected: usize,
        /// Pixel count actually decoded
        actual: usize,
    },

    /// A pixel referenced a color slot past the end of the color table
    #[error("frame {frame}: color index {index} is out of range for a table of {table_len} entries")]
    ColorIndexOutOfRange {
        /// Index of the offending frame
        frame: usize,
        /// The resolved color table index
        index: usize,
        /// Number of entries in the file's color table
        table_len: usize,
    },

    /// An underlying I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for SPR operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMagic {
            expected: *b"WHDO",
            found: *b"RIFF",
        };
        assert!(err.to_string().contains("invalid magic"));

        let err = Error::MissingFrameHeaders {
            expected: 50,
            index: 0,
        };
        assert_eq!(
            err.to_string(),
            "unexpected EOF while reading frame headers, expected 50, got index 0"
        );

        let err = Error::ColorIndexOutOfRange {
            frame: 3,
            index: 300,
            table_len: 256,
        };
        assert!(err.to_string().contains("frame 3"));
        assert!(err.to_string().contains("300"));
    }
}
