//! Name tables embedded in the game executable
//!
//! Regiment records index into two read-only tables inside
//! `PRG_ENG/ENGREL.EXE`: sprite file names (banner and troop sprites) and
//! magic-item names. The sprite table is a flat array of fixed 44-byte
//! C-string slots. The magic-item table is a run of NUL-separated strings
//! stored in reverse: the first string read belongs to the highest item
//! ID, so the table fills backward.

use std::io::{Read, Seek, SeekFrom};

use darkomen_data::{ReadExt, string_from_field};

use crate::error::{Error, Result};

/// File offset of the sprite name table inside the executable
pub const SPRITE_NAMES_OFFSET: u64 = 0x000C_CB54;

/// Number of entries in the sprite name table
pub const SPRITE_NAME_COUNT: usize = 252;

/// Size in bytes of one sprite name slot
pub const SPRITE_NAME_SIZE: usize = 44;

/// File offset of the magic-item name region inside the executable
pub const MAGIC_ITEM_NAMES_OFFSET: u64 = 0x000D_B374;

/// Number of entries in the magic-item name table
pub const MAGIC_ITEM_COUNT: usize = 64;

/// Reads the whole sprite name table from the executable.
///
/// The result can be indexed directly with a regiment's
/// [`sprite_index`](crate::Regiment::sprite_index) or
/// [`banner_index`](crate::Regiment::banner_index).
pub fn read_sprite_names<R: Read + Seek>(reader: &mut R) -> Result<Vec<String>> {
    reader.seek(SeekFrom::Start(SPRITE_NAMES_OFFSET))?;

    let mut names = Vec::with_capacity(SPRITE_NAME_COUNT);
    for index in 0..SPRITE_NAME_COUNT {
        let slot = reader
            .read_vec(SPRITE_NAME_SIZE)
            .map_err(|source| Error::TruncatedNameTable { index, source })?;
        names.push(string_from_field(&slot));
    }
    Ok(names)
}

/// Reads the sprite name at one index from the executable.
pub fn read_sprite_name<R: Read + Seek>(reader: &mut R, index: usize) -> Result<String> {
    if index >= SPRITE_NAME_COUNT {
        return Err(Error::NameIndexOutOfRange {
            index,
            count: SPRITE_NAME_COUNT,
        });
    }

    reader.seek(SeekFrom::Start(
        SPRITE_NAMES_OFFSET + (SPRITE_NAME_SIZE * index) as u64,
    ))?;
    let slot = reader
        .read_vec(SPRITE_NAME_SIZE)
        .map_err(|source| Error::TruncatedNameTable { index, source })?;
    Ok(string_from_field(&slot))
}

/// Reads the whole magic-item name table from the executable.
///
/// The result can be indexed directly with a regiment's
/// [`magic_book`](crate::Regiment::magic_book) or one of its
/// [`magic_items`](crate::Regiment::magic_items) values.
pub fn read_magic_item_names<R: Read + Seek>(reader: &mut R) -> Result<Vec<String>> {
    reader.seek(SeekFrom::Start(MAGIC_ITEM_NAMES_OFFSET))?;

    let mut names = vec![String::new(); MAGIC_ITEM_COUNT];
    let mut found = 0;
    let mut current = Vec::new();
    loop {
        let byte = match reader.read_u8() {
            Ok(byte) => byte,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                return Err(Error::MissingMagicItemNames {
                    found,
                    expected: MAGIC_ITEM_COUNT,
                });
            }
            Err(e) => return Err(e.into()),
        };
        if byte != 0 {
            current.push(byte);
            continue;
        }
        // Empty runs between strings are padding, not entries.
        if current.is_empty() {
            continue;
        }
        names[MAGIC_ITEM_COUNT - 1 - found] = string_from_field(&current);
        current.clear();
        found += 1;
        if found == MAGIC_ITEM_COUNT {
            return Ok(names);
        }
    }
}

/// Reads the magic-item name at one index from the executable.
pub fn read_magic_item_name<R: Read + Seek>(reader: &mut R, index: usize) -> Result<String> {
    if index >= MAGIC_ITEM_COUNT {
        return Err(Error::NameIndexOutOfRange {
            index,
            count: MAGIC_ITEM_COUNT,
        });
    }
    let mut names = read_magic_item_names(reader)?;
    Ok(names.swap_remove(index))
}
