//! Decoder and lossless encoder for Warhammer: Dark Omen streamed audio.
//!
//! The game ships battle speech and music as `.MAD` (mono) and `.SAD`
//! (stereo) streams: runs of fixed-size IMA-style ADPCM blocks, a sentinel
//! header marking the end of the compressed run, and a raw PCM tail. This
//! crate decodes both layouts into block lists, re-encodes them byte-for-byte
//! losslessly, and renders the expanded samples as 22050 Hz WAV audio.
//!
//! # Examples
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use darkomen_audio::StereoStream;
//!
//! # fn main() -> darkomen_audio::Result<()> {
//! let file = File::open("MUSIC.SAD")?;
//! let stream = StereoStream::decode(&mut BufReader::new(file))?;
//! println!("{} samples per channel", stream.sample_count());
//!
//! let wav = File::create("MUSIC.WAV")?;
//! stream.write_wav(wav)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod adpcm;
pub mod block;
pub mod error;
pub mod mad;
pub mod sad;
pub mod wav;

pub use block::Block;
pub use error::{Channel, Error, Result};
pub use mad::{MonoStream, Sentinel};
pub use sad::{StereoSentinel, StereoStream};
pub use wav::SAMPLE_RATE;

/// Index field value that marks the sentinel header in both stream layouts.
pub const SENTINEL_INDEX: i16 = 99;
