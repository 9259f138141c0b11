//! # Dark Omen ARM
//!
//! A parser for the ARM army roster format used by the 1998 real-time
//! tactics game Warhammer: Dark Omen, covering standalone `.ARM` files,
//! the save-game framing of the same layout, and the sprite and
//! magic-item name tables embedded in the game executable that roster
//! records index into.
//!
//! ## Usage
//!
//! ```no_run
//! use darkomen_army::Army;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let army = Army::load("GAMEDATA/1PARM/B101MRC.ARM")?;
//! for regiment in &army.regiments {
//!     println!(
//!         "{} ({:?} {:?}): {}/{} troops",
//!         regiment.name,
//!         regiment.race(),
//!         regiment.unit_type(),
//!         regiment.alive_troops,
//!         regiment.max_troops,
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Format notes
//!
//! - All multi-byte fields are little-endian; the header's u16 fields
//!   occupy 4-byte slots on disk.
//! - Save games carry a fixed 504-byte prefix before the ordinary
//!   roster layout; [`Army::parse`] detects the framing by probing for
//!   the magic at both offsets.
//! - Sprite and banner indices resolve through [`engrel`], the reader
//!   for the executable's embedded name tables.
//!
//! ## Features
//!
//! - `serde-support`: derives `Serialize`/`Deserialize` on all record
//!   types. Off by default.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod engrel;
pub mod error;
pub mod types;

mod parser;

pub use error::{Error, Result};
pub use types::{
    Alignment, Army, HEADER_SIZE, Header, Leader, MAGIC, MAGIC_ITEM_SLOT_DISABLED, Race, Regiment,
    SAVE_PREFIX_SIZE, TroopAttributes, UnitType, normalize_books_path,
};
