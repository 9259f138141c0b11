//! Shared byte-level primitives for the Dark Omen file format crates.
//!
//! The asset formats shipped with Warhammer: Dark Omen all follow the same
//! low-level conventions: little-endian numeric fields and NUL-terminated
//! Latin-1 strings embedded in fixed-width slots. This crate provides those
//! conventions once — typed reader/writer extension traits and string field
//! decoding — so each format crate only describes its own layout.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use darkomen_data::{ReadExt, string_from_field};
//!
//! let mut r = Cursor::new(vec![0x0A, 0x00, b'O', b'R', b'C', 0x00]);
//! assert_eq!(r.read_u16_le().unwrap(), 10);
//! assert_eq!(string_from_field(&r.into_inner()[2..]), "ORC");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod io_ext;
pub mod string;

pub use io_ext::{ReadExt, WriteExt};
pub use string::{read_string_field, split_nul_separated, string_from_field};
