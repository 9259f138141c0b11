//! Error types for ARM parsing

use thiserror::Error;

/// Errors that can occur while reading an army roster or the
/// executable's name tables
#[derive(Debug, Error)]
pub enum Error {
    /// Neither offset 0 nor the save-game offset holds the ARM magic
    #[error("invalid magic: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        /// The magic the format requires
        expected: [u8; 4],
        /// The bytes actually present at the start of the file
        found: [u8; 4],
    },

    /// The roster header could not be read in full
    #[error("roster header could not be read")]
    TruncatedHeader {
        /// The underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// The header declares a regiment record too small to hold the
    /// known field layout
    #[error("regiment record size {declared} is smaller than the {required}-byte layout")]
    RecordTooSmall {
        /// Record size declared in the header
        declared: usize,
        /// Smallest size the layout requires
        required: usize,
    },

    /// The regiment table ended before the declared number of records
    #[error("unexpected EOF while reading regiments, expected {expected}, got index {index}")]
    MissingRegiments {
        /// Regiment count declared in the header
        expected: usize,
        /// Index of the first record that could not be read
        index: usize,
    },

    /// A name-table index is past the end of the table
    #[error("name index {index} is out of range for a table of {count} entries")]
    NameIndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of entries in the table
        count: usize,
    },

    /// A name-table slot could not be read in full
    #[error("name table entry {index} could not be read")]
    TruncatedNameTable {
        /// Index of the entry
        index: usize,
        /// The underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// The executable ended before all magic-item names were found
    #[error("unexpected EOF in magic-item names, found {found} of {expected}")]
    MissingMagicItemNames {
        /// Number of names read before the input ended
        found: usize,
        /// Number of names the table holds
        expected: usize,
    },

    /// An underlying I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ARM operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMagic {
            expected: [0x9E, 0x02, 0x00, 0x00],
            found: *b"RIFF",
        };
        assert!(err.to_string().contains("invalid magic"));

        let err = Error::MissingRegiments {
            expected: 15,
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "unexpected EOF while reading regiments, expected 15, got index 3"
        );

        let err = Error::RecordTooSmall {
            declared: 100,
            required: 188,
        };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("188"));
    }
}
