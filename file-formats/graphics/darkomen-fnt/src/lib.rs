//! # Dark Omen FNT
//!
//! A parser for the FNT bitmap font format used by the 1998 real-time
//! tactics game Warhammer: Dark Omen.
//!
//! A font holds two 16-color palettes and a fixed table of 256 glyph slots,
//! one per byte value. Glyph pixels are packed two per byte (low nibble
//! first) and index the first palette. Advance metrics live partly in the
//! file header and partly per glyph; the glyph advance adds to the base.
//!
//! ```no_run
//! use darkomen_fnt::{Font, glyph_to_image};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let font = Font::load("GRAPHICS/FONTS/F_BOOKS.FNT")?;
//! println!("line height {}", font.line_height());
//!
//! if let Some(image) = glyph_to_image(font.glyph(b'A')) {
//!     image.save("A.png")?;
//! }
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

pub mod convert;
pub mod error;
pub mod types;

mod parser;

pub use convert::glyph_to_image;
pub use error::{Error, Result};
pub use types::{Color, Font, GLYPH_COUNT, Glyph, GlyphType, Header, MAGIC};
