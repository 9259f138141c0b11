//! Parser for DOT waypoint map files
//!
//! DOT files describe the waypoint paths overlaid on a battle map:
//! ordered lists of map coordinates the camera and AI follow, plus the
//! name of the map image the paths belong to.
//!
//! # Usage
//!
//! ```no_run
//! use darkomen_dot::Map;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let map = Map::load("B1_01.DOT")?;
//! for (i, path) in map.paths.iter().enumerate() {
//!     println!("path {i}: {} points", path.points.len());
//! }
//! println!("map image: {}", map.map_file_name);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]

pub mod error;
pub mod types;

mod parser;

pub use error::{Error, Result};
pub use types::{Header, MAGIC, Map, Path, Point};
