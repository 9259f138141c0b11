//! Error types for battle project parsing

use thiserror::Error;

use crate::types::Heightmap;

/// Result type for battle project operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing a battle project
#[derive(Debug, Error)]
pub enum Error {
    /// The file does not start with the expected format string
    #[error("unknown format {found:?}, expected {expected:?}")]
    InvalidFormat {
        /// Expected format string
        expected: &'static str,
        /// Format string found in the file
        found: String,
    },

    /// A block appeared out of order or with an unknown ID
    #[error("unexpected block ID {found:?}, expected {expected:?}")]
    UnexpectedBlock {
        /// The block ID required at this position
        expected: &'static str,
        /// The block ID found in the file
        found: String,
    },

    /// A block ended before its declared content
    #[error("unexpected end of input in {id} block")]
    TruncatedBlock {
        /// ID of the block being read
        id: &'static str,
        /// Underlying read failure
        source: std::io::Error,
    },

    /// The furniture block's declared size disagrees with its name table
    #[error("furniture block size mismatch: declared {declared}, name table takes {actual}")]
    FurnitureSizeMismatch {
        /// Size declared in the block header
        declared: u32,
        /// Size occupied by the count field and name bytes
        actual: u32,
    },

    /// An instance record ended before its fixed fields
    #[error("unexpected end of input in instance {index}")]
    TruncatedInstance {
        /// Zero-based instance index
        index: usize,
        /// Underlying read failure
        source: std::io::Error,
    },

    /// A heightmap block's offset index is not a multiple of 64
    #[error("{heightmap} heightmap: offset index {value} of block {index} is not a multiple of 64")]
    MisalignedOffsetIndex {
        /// Which heightmap the block belongs to
        heightmap: Heightmap,
        /// Zero-based block index
        index: usize,
        /// Offset index value found in the file
        value: u32,
    },

    /// The offset directory size disagrees with the compressed block count
    #[error("offset count mismatch: {blocks} compressed blocks need {} offsets, directory declares {offsets}", *blocks * 64)]
    OffsetCountMismatch {
        /// Compressed block count from the terrain header
        blocks: u32,
        /// Offset count declared before the directory
        offsets: u32,
    },

    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
