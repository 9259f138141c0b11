//! SAD stereo stream codec.
//!
//! A `.SAD` file carries both channels in one run of fixed-size blocks. Each
//! block starts with an 8-byte header holding the left and right channel
//! decoder states, followed by a 1016-byte payload that interleaves the two
//! channels' packed nibble data in 4-byte chunks. A header with 99 in both
//! index fields is the sentinel; after it the remainder of the file is raw
//! PCM interleaved two bytes left, two bytes right per sample. Unlike mono
//! streams, a stereo stream that ends without a sentinel is malformed.

use std::io::{self, Read, Seek, Write};

use darkomen_data::{ReadExt, WriteExt};
use log::debug;

use crate::SENTINEL_INDEX;
use crate::block::Block;
use crate::error::{Channel, Error, Result};
use crate::wav;

/// Interleaved ADPCM bytes in every stereo block payload.
pub const BLOCK_PAYLOAD_SIZE: usize = 1016;

/// Packed ADPCM bytes each channel receives per block.
pub const CHANNEL_PAYLOAD_SIZE: usize = BLOCK_PAYLOAD_SIZE / 2;

/// Channel interleave granularity inside a block payload.
const INTERLEAVE_CHUNK: usize = 4;

/// Sentinel header values preserved for exact re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StereoSentinel {
    /// Left sample field of the sentinel header.
    pub left_sample: i16,
    /// Left index field, 99 in every known file.
    pub left_index: i16,
    /// Right sample field of the sentinel header.
    pub right_sample: i16,
    /// Right index field, 99 in every known file.
    pub right_index: i16,
}

/// A decoded stereo audio stream.
///
/// `left` and `right` always have the same length for decoded streams: one
/// ADPCM block per channel per stream block, then one PCM tail block each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StereoStream {
    /// Left channel blocks in stream order.
    pub left: Vec<Block>,
    /// Right channel blocks in stream order.
    pub right: Vec<Block>,
    /// Sentinel header values, kept verbatim for re-encoding.
    pub sentinel: Option<StereoSentinel>,
}

impl StereoStream {
    /// Decodes a stereo stream from a sequential reader.
    ///
    /// Trailing tail bytes that do not complete a left/right sample pair are
    /// ignored.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let sentinel;

        loop {
            let mut header = [0u8; 8];
            reader
                .read_exact(&mut header)
                .map_err(|e| header_error(e, left.len()))?;

            let left_sample = i16::from_le_bytes([header[0], header[1]]);
            let left_index = i16::from_le_bytes([header[2], header[3]]);
            let right_sample = i16::from_le_bytes([header[4], header[5]]);
            let right_index = i16::from_le_bytes([header[6], header[7]]);

            if left_index == SENTINEL_INDEX && right_index == SENTINEL_INDEX {
                sentinel = Some(StereoSentinel {
                    left_sample,
                    left_index,
                    right_sample,
                    right_index,
                });
                break;
            }

            let payload = reader
                .read_vec(BLOCK_PAYLOAD_SIZE)
                .map_err(|e| payload_error(e, left.len()))?;

            let mut left_data = Vec::with_capacity(CHANNEL_PAYLOAD_SIZE);
            let mut right_data = Vec::with_capacity(CHANNEL_PAYLOAD_SIZE);
            for chunk in payload.chunks_exact(INTERLEAVE_CHUNK * 2) {
                left_data.extend_from_slice(&chunk[..INTERLEAVE_CHUNK]);
                right_data.extend_from_slice(&chunk[INTERLEAVE_CHUNK..]);
            }

            left.push(Block::Adpcm {
                sample: left_sample,
                index: left_index,
                data: left_data,
            });
            right.push(Block::Adpcm {
                sample: right_sample,
                index: right_index,
                data: right_data,
            });
        }

        let mut tail = Vec::new();
        reader.read_to_end(&mut tail)?;

        let pair_count = tail.len() / 4;
        let mut left_samples = Vec::with_capacity(pair_count);
        let mut right_samples = Vec::with_capacity(pair_count);
        for pair in tail.chunks_exact(4) {
            left_samples.push(i16::from_le_bytes([pair[0], pair[1]]));
            right_samples.push(i16::from_le_bytes([pair[2], pair[3]]));
        }
        left.push(Block::Pcm16 {
            samples: left_samples,
        });
        right.push(Block::Pcm16 {
            samples: right_samples,
        });

        debug!(
            "decoded stereo stream: {} blocks per channel, {} tail sample pairs",
            left.len(),
            pair_count,
        );

        Ok(Self {
            left,
            right,
            sentinel,
        })
    }

    /// Encodes the stream back to its byte representation.
    ///
    /// For a stream produced by [`StereoStream::decode`] the output is
    /// byte-identical to the original input: ADPCM payloads re-interleave in
    /// the same 4-byte chunking, the sentinel header is re-emitted verbatim,
    /// and the PCM tail re-interleaves at 2-byte granularity.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.left.len() != self.right.len() {
            return Err(Error::ChannelMismatch {
                left: self.left.len(),
                right: self.right.len(),
            });
        }

        let count = self.left.len();
        for (position, (left, right)) in self.left.iter().zip(&self.right).enumerate() {
            match (left, right) {
                (
                    Block::Adpcm {
                        sample: left_sample,
                        index: left_index,
                        data: left_data,
                    },
                    Block::Adpcm {
                        sample: right_sample,
                        index: right_index,
                        data: right_data,
                    },
                ) => {
                    writer.write_i16_le(*left_sample)?;
                    writer.write_i16_le(*left_index)?;
                    writer.write_i16_le(*right_sample)?;
                    writer.write_i16_le(*right_index)?;

                    if left_data.len() != right_data.len() {
                        return Err(Error::ChannelMismatch {
                            left: left_data.len(),
                            right: right_data.len(),
                        });
                    }
                    for (left_chunk, right_chunk) in left_data
                        .chunks(INTERLEAVE_CHUNK)
                        .zip(right_data.chunks(INTERLEAVE_CHUNK))
                    {
                        writer.write_all(left_chunk)?;
                        writer.write_all(right_chunk)?;
                    }
                }
                (
                    Block::Pcm16 {
                        samples: left_samples,
                    },
                    Block::Pcm16 {
                        samples: right_samples,
                    },
                ) => {
                    if position + 1 != count {
                        return Err(Error::PcmChannelBlockMidStream {
                            channel: Channel::Left,
                            position,
                        });
                    }
                    let sentinel = self.sentinel.as_ref().ok_or(Error::MissingSentinel)?;
                    writer.write_i16_le(sentinel.left_sample)?;
                    writer.write_i16_le(sentinel.left_index)?;
                    writer.write_i16_le(sentinel.right_sample)?;
                    writer.write_i16_le(sentinel.right_index)?;

                    if left_samples.len() != right_samples.len() {
                        return Err(Error::ChannelMismatch {
                            left: left_samples.len(),
                            right: right_samples.len(),
                        });
                    }
                    for (left_sample, right_sample) in left_samples.iter().zip(right_samples) {
                        writer.write_i16_le(*left_sample)?;
                        writer.write_i16_le(*right_sample)?;
                    }
                }
                (Block::Pcm16 { .. }, _) => {
                    return Err(Error::PcmChannelBlockMidStream {
                        channel: Channel::Left,
                        position,
                    });
                }
                (_, Block::Pcm16 { .. }) => {
                    return Err(Error::PcmChannelBlockMidStream {
                        channel: Channel::Right,
                        position,
                    });
                }
            }
        }
        Ok(())
    }

    /// Expands both channels separately, in stream order.
    pub fn channel_samples(&self) -> (Vec<i16>, Vec<i16>) {
        let left = self.left.iter().flat_map(Block::samples).collect();
        let right = self.right.iter().flat_map(Block::samples).collect();
        (left, right)
    }

    /// Expands the stream to per-sample interleaved left/right PCM.
    pub fn interleaved_samples(&self) -> Result<Vec<i16>> {
        let (left, right) = self.channel_samples();
        if left.len() != right.len() {
            return Err(Error::ChannelMismatch {
                left: left.len(),
                right: right.len(),
            });
        }

        let mut samples = Vec::with_capacity(left.len() * 2);
        for (left_sample, right_sample) in left.iter().zip(&right) {
            samples.push(*left_sample);
            samples.push(*right_sample);
        }
        Ok(samples)
    }

    /// Total number of samples per channel.
    pub fn sample_count(&self) -> usize {
        self.left.iter().map(Block::sample_count).sum()
    }

    /// Renders the expanded stream as a stereo 22050 Hz 16-bit WAV.
    pub fn write_wav<W: Write + Seek>(&self, writer: W) -> Result<()> {
        wav::write_pcm16(writer, 2, &self.interleaved_samples()?)
    }
}

fn header_error(e: io::Error, position: usize) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::TruncatedHeader { position }
    } else {
        Error::Io(e)
    }
}

fn payload_error(e: io::Error, position: usize) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::TruncatedPayload {
            position,
            source: e,
        }
    } else {
        Error::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn header_bytes(ls: i16, li: i16, rs: i16, ri: i16) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8);
        for field in [ls, li, rs, ri] {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        bytes
    }

    fn patterned_payload() -> Vec<u8> {
        // 127 chunks of 4 left bytes then 4 right bytes; left bytes carry the
        // chunk number, right bytes the chunk number with the high bit set.
        let mut payload = Vec::with_capacity(BLOCK_PAYLOAD_SIZE);
        for chunk in 0..(BLOCK_PAYLOAD_SIZE / 8) {
            payload.extend_from_slice(&[chunk as u8; 4]);
            payload.extend_from_slice(&[chunk as u8 | 0x80; 4]);
        }
        payload
    }

    #[test]
    fn deinterleaves_payload_in_four_byte_chunks() {
        let mut input = header_bytes(10, 2, -10, 3);
        input.extend(patterned_payload());
        input.extend(header_bytes(0, SENTINEL_INDEX, 0, SENTINEL_INDEX));

        let stream = StereoStream::decode(&mut Cursor::new(&input)).unwrap();
        assert_eq!(stream.left.len(), 2);
        assert_eq!(stream.right.len(), 2);

        match (&stream.left[0], &stream.right[0]) {
            (
                Block::Adpcm {
                    data: left_data, ..
                },
                Block::Adpcm {
                    data: right_data, ..
                },
            ) => {
                assert_eq!(left_data.len(), CHANNEL_PAYLOAD_SIZE);
                assert_eq!(right_data.len(), CHANNEL_PAYLOAD_SIZE);
                assert_eq!(&left_data[..4], &[0, 0, 0, 0]);
                assert_eq!(&right_data[..4], &[0x80, 0x80, 0x80, 0x80]);
                assert_eq!(left_data[CHANNEL_PAYLOAD_SIZE - 1], 126);
                assert_eq!(right_data[CHANNEL_PAYLOAD_SIZE - 1], 126 | 0x80);
            }
            _ => unreachable!("first blocks must be ADPCM"),
        }
    }

    #[test]
    fn sentinel_requires_both_index_fields() {
        // Only the left index is 99: still a regular block header.
        let mut input = header_bytes(1, SENTINEL_INDEX, 2, 0);
        input.extend([0u8; BLOCK_PAYLOAD_SIZE]);
        input.extend(header_bytes(0, SENTINEL_INDEX, 0, SENTINEL_INDEX));

        let stream = StereoStream::decode(&mut Cursor::new(&input)).unwrap();
        assert_eq!(stream.left.len(), 2);
        assert!(stream.left[0].is_adpcm());
    }

    #[test]
    fn splits_tail_into_sample_pairs() {
        let mut input = header_bytes(0, SENTINEL_INDEX, 0, SENTINEL_INDEX);
        input.extend([0x01, 0x00, 0x02, 0x00, 0xFF, 0xFF, 0xFE, 0xFF]);

        let stream = StereoStream::decode(&mut Cursor::new(&input)).unwrap();
        assert_eq!(
            stream.left,
            vec![Block::Pcm16 {
                samples: vec![1, -1]
            }]
        );
        assert_eq!(
            stream.right,
            vec![Block::Pcm16 {
                samples: vec![2, -2]
            }]
        );
    }

    #[test]
    fn round_trips_byte_for_byte() {
        let mut input = header_bytes(100, 20, -100, 21);
        input.extend(patterned_payload());
        input.extend(header_bytes(7, 30, -7, 31));
        input.extend([0x5A; BLOCK_PAYLOAD_SIZE]);
        input.extend(header_bytes(-2, SENTINEL_INDEX, 3, SENTINEL_INDEX));
        input.extend([0x10, 0x00, 0x20, 0x00, 0x30, 0x00, 0x40, 0x00]);

        let stream = StereoStream::decode(&mut Cursor::new(&input)).unwrap();
        let mut output = Vec::new();
        stream.encode(&mut output).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn missing_sentinel_is_truncation() {
        let mut input = header_bytes(1, 2, 3, 4);
        input.extend([0u8; BLOCK_PAYLOAD_SIZE]);

        let err = StereoStream::decode(&mut Cursor::new(&input)).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader { position: 1 }));
    }

    #[test]
    fn empty_input_is_truncation() {
        let err = StereoStream::decode(&mut Cursor::new(&[][..])).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader { position: 0 }));
    }

    #[test]
    fn truncated_payload_names_block_position() {
        let mut input = header_bytes(1, 2, 3, 4);
        input.extend([0u8; 100]);

        let err = StereoStream::decode(&mut Cursor::new(&input)).unwrap_err();
        assert!(matches!(err, Error::TruncatedPayload { position: 0, .. }));
    }

    #[test]
    fn encode_rejects_pcm_block_mid_stream() {
        let mut input = header_bytes(0, SENTINEL_INDEX, 0, SENTINEL_INDEX);
        input.extend([0x01, 0x00, 0x02, 0x00]);
        let mut stream = StereoStream::decode(&mut Cursor::new(&input)).unwrap();

        stream.left.push(Block::Adpcm {
            sample: 0,
            index: 0,
            data: vec![0; CHANNEL_PAYLOAD_SIZE],
        });
        stream.right.push(Block::Adpcm {
            sample: 0,
            index: 0,
            data: vec![0; CHANNEL_PAYLOAD_SIZE],
        });

        let err = stream.encode(&mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::PcmChannelBlockMidStream {
                channel: Channel::Left,
                position: 0,
            }
        ));
    }

    #[test]
    fn encode_blames_the_offending_channel() {
        let stream = StereoStream {
            left: vec![Block::Adpcm {
                sample: 0,
                index: 0,
                data: vec![0; CHANNEL_PAYLOAD_SIZE],
            }],
            right: vec![Block::Pcm16 { samples: vec![] }],
            sentinel: None,
        };

        let err = stream.encode(&mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::PcmChannelBlockMidStream {
                channel: Channel::Right,
                position: 0,
            }
        ));
    }

    #[test]
    fn encode_rejects_unequal_channel_counts() {
        let stream = StereoStream {
            left: vec![],
            right: vec![Block::Pcm16 { samples: vec![] }],
            sentinel: None,
        };

        let err = stream.encode(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::ChannelMismatch { left: 0, right: 1 }));
    }

    #[test]
    fn interleaved_samples_alternate_channels() {
        let stream = StereoStream {
            left: vec![Block::Pcm16 {
                samples: vec![1, 3],
            }],
            right: vec![Block::Pcm16 {
                samples: vec![2, 4],
            }],
            sentinel: None,
        };

        assert_eq!(stream.interleaved_samples().unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(stream.sample_count(), 2);
    }
}
