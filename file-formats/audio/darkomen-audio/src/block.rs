//! Audio block representation shared by the MAD and SAD stream codecs.

use crate::adpcm;

/// One block of stream audio, either still compressed or raw PCM.
///
/// A stream is a run of ADPCM blocks followed (after the sentinel) by a
/// single PCM tail block. Each ADPCM block carries the starting predictor
/// and step index it was encoded against, so blocks expand independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Compressed block: decoder start state plus packed 4-bit samples.
    Adpcm {
        /// Starting predictor sample for this block.
        sample: i16,
        /// Starting step index for this block.
        index: i16,
        /// Packed nibble data, two samples per byte.
        data: Vec<u8>,
    },
    /// Uncompressed signed 16-bit samples.
    Pcm16 {
        /// Sample values in stream order.
        samples: Vec<i16>,
    },
}

impl Block {
    /// Builds a PCM block from raw little-endian sample bytes.
    ///
    /// A trailing byte that does not complete a sample is ignored.
    pub fn pcm16_from_le_bytes(bytes: &[u8]) -> Self {
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Self::Pcm16 { samples }
    }

    /// Whether this block is still ADPCM compressed.
    pub fn is_adpcm(&self) -> bool {
        matches!(self, Self::Adpcm { .. })
    }

    /// Number of samples this block expands to.
    pub fn sample_count(&self) -> usize {
        match self {
            Self::Adpcm { data, .. } => data.len() * 2,
            Self::Pcm16 { samples } => samples.len(),
        }
    }

    /// Expands the block to PCM samples.
    ///
    /// ADPCM blocks run the nibble decoder from their own start state; PCM
    /// blocks return their samples as-is.
    pub fn samples(&self) -> Vec<i16> {
        match self {
            Self::Adpcm {
                sample,
                index,
                data,
            } => adpcm::Decoder::new(i32::from(*sample), i32::from(*index)).decode(data),
            Self::Pcm16 { samples } => samples.clone(),
        }
    }
}
