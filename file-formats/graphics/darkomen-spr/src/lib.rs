//! # Dark Omen SPR
//!
//! A parser for the SPR sprite atlas format used by the 1998 real-time
//! tactics game Warhammer: Dark Omen.
//!
//! An atlas bundles a set of animation frames with a shared color table.
//! Frames store palette indices under one of two run-length schemes (or
//! verbatim), and a frame's type tag records whether the raster is stored
//! mirrored, repeats an earlier frame, or is empty.
//!
//! ## Usage
//!
//! ```no_run
//! use darkomen_spr::Sprite;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sprite = Sprite::load("GRAPHICS/SPRITES/BERNHD.SPR")?;
//! println!("{} frames", sprite.frame_count());
//!
//! for (i, frame) in sprite.frames.iter().enumerate() {
//!     if let Some(image) = darkomen_spr::frame_to_image(frame) {
//!         image.save(format!("frame_{i:03}.png"))?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Format notes
//!
//! - All multi-byte fields are little-endian; u16 header fields occupy
//!   4-byte slots on disk.
//! - Pixel bytes index the color table relative to the frame's own base
//!   slot, and entries are stored as BGRx.
//! - Decoded rasters are plain RGBA byte vectors; [`convert`] bridges to
//!   the `image` crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod convert;
pub mod error;
pub mod rle;
pub mod types;

mod parser;

pub use convert::{frame_to_image, sprite_to_images};
pub use error::{Error, Result};
pub use types::{Color, Compression, Frame, FrameType, Header, MAGIC, Sprite};
