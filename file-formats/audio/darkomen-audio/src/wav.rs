//! WAV container rendering for expanded streams.
//!
//! Dark Omen streams play back at a fixed 22050 Hz with 16-bit samples, so
//! the container parameters are constant apart from the channel count.

use std::io::{Seek, Write};

use crate::error::Result;

/// Playback rate of every MAD and SAD stream.
pub const SAMPLE_RATE: u32 = 22_050;

/// Writes PCM samples into an uncompressed 16-bit WAV container.
///
/// `samples` must already be interleaved per sample when `channels` is 2.
pub(crate) fn write_pcm16<W: Write + Seek>(writer: W, channels: u16, samples: &[i16]) -> Result<()> {
    let spec = hound::WavSpec {
        channels,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::new(writer, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn writes_a_riff_wave_header() {
        let mut buf = Cursor::new(Vec::new());
        write_pcm16(&mut buf, 1, &[0, 1000, -1000]).unwrap();

        let bytes = buf.into_inner();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // fmt chunk: PCM format tag, mono, 22050 Hz
        assert_eq!(u16::from_le_bytes([bytes[20], bytes[21]]), 1);
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1);
        assert_eq!(
            u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            SAMPLE_RATE
        );
    }

    #[test]
    fn stereo_spec_records_two_channels() {
        let mut buf = Cursor::new(Vec::new());
        write_pcm16(&mut buf, 2, &[1, 2, 3, 4]).unwrap();

        let bytes = buf.into_inner();
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 2);
    }
}
