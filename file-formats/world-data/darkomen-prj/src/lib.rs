//! # Dark Omen PRJ
//!
//! A parser for the PRJ battle project format used by the 1998 real-time
//! tactics game Warhammer: Dark Omen.
//!
//! A project bundles everything a battle map needs beyond its art: the
//! base and water model references, the furniture name table, placed
//! model instances, two terrain heightmaps with a shared offset
//! directory, and the per-cell attribute map. Blocks appear in a fixed
//! order and each is introduced by a 4-byte ASCII ID.
//!
//! Terrain heights are stored per 8x8-cell block as a minimum plus one
//! delta byte per cell; [`Terrain::height_at`] reassembles them.
//!
//! ## Usage
//!
//! ```no_run
//! use darkomen_prj::{Heightmap, Project};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project = Project::load("GAMEDATA/1PBAT/B1_01/B1_01.PRJ")?;
//! println!(
//!     "{} on {}x{} terrain, {} instances",
//!     project.base.model_file_name,
//!     project.terrain.width,
//!     project.terrain.height,
//!     project.instances.len(),
//! );
//!
//! if let Some(height) = project.terrain.height_at(Heightmap::Primary, 0, 0) {
//!     println!("corner height: {height}");
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
pub mod types;

mod parser;

pub use error::{Error, Result};
pub use types::{
    Attributes, Base, FORMAT, Furniture, Heightmap, Instance, Project, Terrain, TerrainBlock,
    Water,
};
