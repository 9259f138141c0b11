//! MAD mono stream codec.
//!
//! A `.MAD` file is a run of fixed-size ADPCM blocks, each introduced by a
//! 4-byte header carrying the block's starting predictor sample and step
//! index. A header whose index field is the sentinel value 99 ends the run;
//! everything after it is a raw PCM tail. Files may also stop cleanly at a
//! block boundary with no sentinel at all.

use std::io::{self, Read, Seek, Write};

use darkomen_data::{ReadExt, WriteExt};
use log::debug;

use crate::SENTINEL_INDEX;
use crate::block::Block;
use crate::error::{Error, Result};
use crate::wav;

/// Packed ADPCM bytes in every mono block payload.
pub const BLOCK_PAYLOAD_SIZE: usize = 1020;

/// Sentinel header values preserved for exact re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel {
    /// Sample field of the sentinel header.
    pub sample: i16,
    /// Index field of the sentinel header, 99 in every known file.
    pub index: i16,
}

/// A decoded mono audio stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoStream {
    /// Blocks in stream order; the PCM tail, when present, is last.
    pub blocks: Vec<Block>,
    /// Sentinel header values, absent when the source ended without one.
    pub sentinel: Option<Sentinel>,
}

impl MonoStream {
    /// Decodes a mono stream from a sequential reader.
    ///
    /// End-of-input exactly at a block-header boundary is normal termination,
    /// not an error; the stream then has no sentinel and no PCM tail.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let mut blocks = Vec::new();
        let mut sentinel = None;

        loop {
            let mut header = [0u8; 4];
            let filled = read_block_header(reader, &mut header)
                .map_err(|e| header_error(e, blocks.len()))?;
            if !filled {
                break;
            }

            let sample = i16::from_le_bytes([header[0], header[1]]);
            let index = i16::from_le_bytes([header[2], header[3]]);
            if index == SENTINEL_INDEX {
                sentinel = Some(Sentinel { sample, index });
                break;
            }

            let data = reader
                .read_vec(BLOCK_PAYLOAD_SIZE)
                .map_err(|e| payload_error(e, blocks.len()))?;
            blocks.push(Block::Adpcm {
                sample,
                index,
                data,
            });
        }

        if sentinel.is_some() {
            let mut tail = Vec::new();
            reader.read_to_end(&mut tail)?;
            blocks.push(Block::pcm16_from_le_bytes(&tail));
        }

        debug!(
            "decoded mono stream: {} blocks, sentinel {}",
            blocks.len(),
            if sentinel.is_some() { "present" } else { "absent" },
        );

        Ok(Self { blocks, sentinel })
    }

    /// Encodes the stream back to its byte representation.
    ///
    /// For a stream produced by [`MonoStream::decode`] the output is
    /// byte-identical to the original input. A PCM block anywhere but the
    /// final slot, or a PCM tail without preserved sentinel values, is an
    /// error.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (position, block) in self.blocks.iter().enumerate() {
            match block {
                Block::Adpcm {
                    sample,
                    index,
                    data,
                } => {
                    writer.write_i16_le(*sample)?;
                    writer.write_i16_le(*index)?;
                    writer.write_all(data)?;
                }
                Block::Pcm16 { samples } => {
                    if position + 1 != self.blocks.len() {
                        return Err(Error::PcmBlockMidStream { position });
                    }
                    let sentinel = self.sentinel.ok_or(Error::MissingSentinel)?;
                    writer.write_i16_le(sentinel.sample)?;
                    writer.write_i16_le(sentinel.index)?;
                    for &sample in samples {
                        writer.write_i16_le(sample)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Expands every block and concatenates the result in stream order.
    pub fn samples(&self) -> Vec<i16> {
        self.blocks.iter().flat_map(Block::samples).collect()
    }

    /// Total number of samples the stream expands to.
    pub fn sample_count(&self) -> usize {
        self.blocks.iter().map(Block::sample_count).sum()
    }

    /// Renders the expanded stream as a mono 22050 Hz 16-bit WAV.
    pub fn write_wav<W: Write + Seek>(&self, writer: W) -> Result<()> {
        wav::write_pcm16(writer, 1, &self.samples())
    }
}

/// Reads a 4-byte block header, reporting clean EOF at the boundary.
///
/// Returns `Ok(false)` when the source is already exhausted, `Ok(true)` when
/// the buffer was filled, and an `UnexpectedEof` error when the source ends
/// mid-header.
fn read_block_header<R: Read>(reader: &mut R, buf: &mut [u8; 4]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => return Err(io::ErrorKind::UnexpectedEof.into()),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(true)
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

    fn adpcm_block_bytes(sample: i16, index: i16, fill: u8) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + BLOCK_PAYLOAD_SIZE);
        bytes.extend_from_slice(&sample.to_le_bytes());
        bytes.extend_from_slice(&index.to_le_bytes());
        bytes.extend_from_slice(&[fill; BLOCK_PAYLOAD_SIZE]);
        bytes
    }

    fn sentinel_bytes(sample: i16) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&sample.to_le_bytes());
        bytes.extend_from_slice(&SENTINEL_INDEX.to_le_bytes());
        bytes
    }

    #[test]
    fn decodes_blocks_sentinel_and_tail() {
        let mut input = adpcm_block_bytes(100, 10, 0x24);
        input.extend(adpcm_block_bytes(-5, 3, 0x99));
        input.extend(sentinel_bytes(7));
        input.extend_from_slice(&[0x01, 0x00, 0xFF, 0xFF]);

        let stream = MonoStream::decode(&mut Cursor::new(&input)).unwrap();
        assert_eq!(stream.blocks.len(), 3);
        assert_eq!(
            stream.blocks[0],
            Block::Adpcm {
                sample: 100,
                index: 10,
                data: vec![0x24; BLOCK_PAYLOAD_SIZE],
            }
        );
        assert_eq!(
            stream.blocks[2],
            Block::Pcm16 {
                samples: vec![1, -1]
            }
        );
        assert_eq!(
            stream.sentinel,
            Some(Sentinel {
                sample: 7,
                index: 99
            })
        );
    }

    #[test]
    fn round_trips_byte_for_byte() {
        let mut input = adpcm_block_bytes(321, 45, 0xAB);
        input.extend(adpcm_block_bytes(-321, 0, 0xCD));
        input.extend(sentinel_bytes(-1));
        input.extend_from_slice(&[0x10, 0x20, 0x30, 0x40, 0x55, 0xAA]);

        let stream = MonoStream::decode(&mut Cursor::new(&input)).unwrap();
        let mut output = Vec::new();
        stream.encode(&mut output).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn eof_at_header_boundary_is_clean_termination() {
        let input = adpcm_block_bytes(50, 20, 0x00);

        let stream = MonoStream::decode(&mut Cursor::new(&input)).unwrap();
        assert_eq!(stream.blocks.len(), 1);
        assert_eq!(stream.sentinel, None);

        let mut output = Vec::new();
        stream.encode(&mut output).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn empty_input_is_an_empty_stream() {
        let stream = MonoStream::decode(&mut Cursor::new(&[][..])).unwrap();
        assert!(stream.blocks.is_empty());
        assert_eq!(stream.sentinel, None);
    }

    #[test]
    fn zero_length_tail_round_trips() {
        let mut input = adpcm_block_bytes(1, 1, 0x11);
        input.extend(sentinel_bytes(0));

        let stream = MonoStream::decode(&mut Cursor::new(&input)).unwrap();
        assert_eq!(
            stream.blocks.last(),
            Some(&Block::Pcm16 { samples: vec![] })
        );

        let mut output = Vec::new();
        stream.encode(&mut output).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn truncated_header_names_block_position() {
        let mut input = adpcm_block_bytes(9, 9, 0x01);
        input.extend_from_slice(&[0x00, 0x00]);

        let err = MonoStream::decode(&mut Cursor::new(&input)).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader { position: 1 }));
    }

    #[test]
    fn truncated_payload_names_block_position() {
        let input = [0x00, 0x00, 0x05, 0x00, 0xAA, 0xBB];

        let err = MonoStream::decode(&mut Cursor::new(&input)).unwrap_err();
        assert!(matches!(err, Error::TruncatedPayload { position: 0, .. }));
    }

    #[test]
    fn pcm_block_before_final_slot_fails_encode() {
        let stream = MonoStream {
            blocks: vec![
                Block::Pcm16 { samples: vec![1] },
                Block::Adpcm {
                    sample: 0,
                    index: 0,
                    data: vec![],
                },
            ],
            sentinel: Some(Sentinel {
                sample: 0,
                index: 99
            }),
        };

        let err = stream.encode(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::PcmBlockMidStream { position: 0 }));
    }

    #[test]
    fn pcm_tail_without_sentinel_fails_encode() {
        let stream = MonoStream {
            blocks: vec![Block::Pcm16 { samples: vec![1] }],
            sentinel: None,
        };

        let err = stream.encode(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::MissingSentinel));
    }

    #[test]
    fn sample_view_concatenates_blocks() {
        let mut input = adpcm_block_bytes(0, 0, 0x00);
        input.extend(sentinel_bytes(0));
        input.extend_from_slice(&[0x39, 0x05]);

        let stream = MonoStream::decode(&mut Cursor::new(&input)).unwrap();
        let samples = stream.samples();
        assert_eq!(samples.len(), BLOCK_PAYLOAD_SIZE * 2 + 1);
        assert_eq!(samples.last(), Some(&0x0539));
        assert_eq!(stream.sample_count(), samples.len());
    }
}
