//! Error types for MAD/SAD audio stream decoding and encoding.

use thiserror::Error;

/// Stereo channel identifier used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Left channel.
    Left,
    /// Right channel.
    Right,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Error type for audio stream operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying read or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A block header was cut short mid-field.
    #[error("block header at position {position} is truncated")]
    TruncatedHeader {
        /// Index of the block whose header was being read.
        position: usize,
    },

    /// EOF hit inside a block's fixed-size ADPCM payload.
    #[error("ADPCM payload of block at position {position} is truncated")]
    TruncatedPayload {
        /// Index of the block whose payload was being read.
        position: usize,
        /// The read failure that surfaced the truncation.
        #[source]
        source: std::io::Error,
    },

    /// Encoding found a PCM block somewhere other than the final tail slot.
    #[error("block at position {position} is not an ADPCM block")]
    PcmBlockMidStream {
        /// Index of the offending block.
        position: usize,
    },

    /// Encoding found a PCM block mid-stream in one stereo channel.
    #[error("{channel} block at position {position} is not an ADPCM block")]
    PcmChannelBlockMidStream {
        /// Channel holding the offending block.
        channel: Channel,
        /// Index of the offending block.
        position: usize,
    },

    /// A stream ends in a PCM tail but carries no sentinel values to re-emit.
    #[error("stream has a PCM tail but no sentinel")]
    MissingSentinel,

    /// Left and right channel sequences disagree in length.
    #[error("left and right channels disagree in length: {left} vs {right}")]
    ChannelMismatch {
        /// Length observed on the left channel.
        left: usize,
        /// Length observed on the right channel.
        right: usize,
    },

    /// WAV container write failure.
    #[error("WAV write error: {0}")]
    Wav(#[from] hound::Error),
}

/// Result type for audio stream operations.
pub type Result<T> = std::result::Result<T, Error>;
