//! Error types for DOT parsing

use thiserror::Error;

/// Errors that can occur while reading a path map
#[derive(Debug, Error)]
pub enum Error {
    /// The file does not start with the DOT magic bytes
    #[error("invalid magic: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        /// The magic the format requires
        expected: [u8; 4],
        /// The bytes actually present at the start of the file
        found: [u8; 4],
    },

    /// A path record could not be read in full
    #[error("path {index} could not be read")]
    TruncatedPath {
        /// Index of the path
        index: usize,
        /// The underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// The trailing footer could not be read in full
    #[error("footer could not be read")]
    TruncatedFooter {
        /// The underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// An underlying I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for DOT operations
pub type Result<T> = std::result::Result<T, Error>;
