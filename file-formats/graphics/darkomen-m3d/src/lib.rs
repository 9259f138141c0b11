//! # Dark Omen M3D
//!
//! A parser for the M3D 3D model format used by the 1998 real-time tactics
//! game Warhammer: Dark Omen, including the `.M3X` variant.
//!
//! A model is a texture table plus a list of named mesh objects. Each object
//! carries its own faces and vertices and may name an earlier object as its
//! parent, forming a forest. Render-feature flags are not stored in the file
//! at all; the engine reads them out of the file name, which [`flags`]
//! mirrors.
//!
//! ## Usage
//!
//! ```no_run
//! use darkomen_m3d::{Model, flags_from_file_name};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = Model::load("MESHES/_4BRIDGE.M3D")?;
//! println!(
//!     "{} objects, {} faces, flags {:?}",
//!     model.objects.len(),
//!     model.face_count(),
//!     flags_from_file_name("_4BRIDGE.M3D"),
//! );
//!
//! for object in &model.objects {
//!     let pivot = object.pivot.to_glam();
//!     println!("  {} at {pivot}", object.name);
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

pub mod error;
pub mod flags;
pub mod types;

mod parser;

pub use error::{Error, Result};
pub use flags::{ModelFlags, flags_from_file_name};
pub use types::{Color, Face, Header, MAGIC, Model, Object, Texture, Vector, Vertex};
