//! Error types for M3D parsing

use thiserror::Error;

/// Errors that can occur while reading a model
#[derive(Debug, Error)]
pub enum Error {
    /// The file does not start with the M3D magic bytes
    #[error("invalid magic: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        /// The magic the format requires
        expected: [u8; 4],
        /// The bytes actually present at the start of the file
        found: [u8; 4],
    },

    /// A texture record could not be read in full
    #[error("texture {index} could not be read")]
    TruncatedTexture {
        /// Index of the texture record
        index: usize,
        /// The underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// An object, or one of its face or vertex records, could not be read
    #[error("object {index} could not be read")]
    TruncatedObject {
        /// Index of the object
        index: usize,
        /// The underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// A face referenced a vertex slot past its object's vertex list
    #[error(
        "object {object}, face {face}: vertex index {index} is out of range for {vertex_count} vertices"
    )]
    FaceIndexOutOfRange {
        /// Index of the object the face belongs to
        object: usize,
        /// Index of the face within the object
        face: usize,
        /// The out-of-range vertex index
        index: u16,
        /// Number of vertices the object declares
        vertex_count: u16,
    },

    /// An object's parent index is neither -1 nor an earlier object
    #[error("object {object}: parent index {parent} does not refer to an earlier object")]
    InvalidParentIndex {
        /// Index of the object
        object: usize,
        /// The offending parent index
        parent: i16,
    },

    /// An underlying I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for M3D operations
pub type Result<T> = std::result::Result<T, Error>;
