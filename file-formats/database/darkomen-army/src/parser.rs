//! Army roster decoding
//!
//! A roster is a 192-byte header followed by `regiment_count` records of
//! `regiment_record_size` bytes each. Save games wrap the same layout in
//! a fixed 504-byte prefix, so the decoder probes for the magic at both
//! framings before committing.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use darkomen_data::{ReadExt, string_from_field};

use crate::error::{Error, Result};
use crate::types::{
    Army, HEADER_SIZE, Header, Leader, MAGIC, REGIMENT_RECORD_MIN_SIZE, Regiment,
    SAVE_PREFIX_SIZE, TroopAttributes,
};

impl Army {
    /// Parses an army roster from a byte source.
    ///
    /// Accepts both plain `.ARM` files and save games; for a save game
    /// the raw prefix is kept on the returned army.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let first: [u8; 4] = reader.read_array()?;

        let mut save_prefix = None;
        if first != MAGIC {
            // No magic at offset 0: the only other valid framing is a
            // save game, which puts the magic after a 504-byte prefix.
            // An input too short for that is simply not an army file,
            // so report the unrecognized leading bytes.
            let bad_magic = || Error::InvalidMagic {
                expected: MAGIC,
                found: first,
            };

            let mut prefix = vec![0u8; SAVE_PREFIX_SIZE];
            prefix[..4].copy_from_slice(&first);
            reader.read_exact(&mut prefix[4..]).map_err(|_| bad_magic())?;

            let magic: [u8; 4] = reader.read_array().map_err(|_| bad_magic())?;
            if magic != MAGIC {
                return Err(bad_magic());
            }

            log::warn!("roster framed as a save game, {SAVE_PREFIX_SIZE}-byte prefix kept");
            save_prefix = Some(prefix);
        }

        let mut raw = [0u8; HEADER_SIZE];
        raw[..4].copy_from_slice(&MAGIC);
        reader
            .read_exact(&mut raw[4..])
            .map_err(|source| Error::TruncatedHeader { source })?;
        let header = parse_header(&raw);

        let record_size = usize::from(header.regiment_record_size);
        if record_size < REGIMENT_RECORD_MIN_SIZE {
            return Err(Error::RecordTooSmall {
                declared: record_size,
                required: REGIMENT_RECORD_MIN_SIZE,
            });
        }

        let expected = usize::from(header.regiment_count);
        let mut regiments = Vec::with_capacity(expected);
        for index in 0..expected {
            let record = reader
                .read_vec(record_size)
                .map_err(|_| Error::MissingRegiments { expected, index })?;
            regiments.push(parse_regiment(&record));
        }

        log::debug!(
            "parsed army: {} regiments, {} gold in coffers",
            regiments.len(),
            header.gold_in_coffers
        );

        Ok(Self {
            header,
            regiments,
            save_prefix,
        })
    }

    /// Opens and parses an army roster from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(&mut BufReader::new(file))
    }
}

fn u16_at(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn bytes_at<const N: usize>(buf: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[offset..offset + N]);
    out
}

fn attributes_at(buf: &[u8], offset: usize) -> TroopAttributes {
    TroopAttributes {
        movement: buf[offset],
        weapon_skill: buf[offset + 1],
        ballistic_skill: buf[offset + 2],
        strength: buf[offset + 3],
        toughness: buf[offset + 4],
        wounds: buf[offset + 5],
        initiative: buf[offset + 6],
        attacks: buf[offset + 7],
        leadership: buf[offset + 8],
    }
}

fn parse_header(buf: &[u8; HEADER_SIZE]) -> Header {
    Header {
        format: u16_at(buf, 0),
        regiment_count: u16_at(buf, 4),
        regiment_record_size: u16_at(buf, 8),
        race: buf[12],
        unknown1: bytes_at(buf, 13),
        default_name: string_from_field(&buf[16..18]),
        army_name: string_from_field(&buf[18..50]),
        small_banner_path: string_from_field(&buf[50..82]),
        small_banner_disabled_path: string_from_field(&buf[82..114]),
        large_banner_path: string_from_field(&buf[114..146]),
        gold_from_treasures: u16_at(buf, 146),
        gold_in_coffers: u16_at(buf, 148),
        magic_items: buf[150..190].to_vec(),
        unknown2: bytes_at(buf, 190),
    }
}

fn parse_regiment(buf: &[u8]) -> Regiment {
    Regiment {
        status: bytes_at(buf, 0),
        unknown1: bytes_at(buf, 2),
        id: u16_at(buf, 4),
        unknown2: bytes_at(buf, 6),
        wizard_type: buf[8],
        max_armour: buf[9],
        cost: u16_at(buf, 10),
        banner_index: u16_at(buf, 12),
        unknown3: bytes_at(buf, 14),
        attributes: bytes_at(buf, 16),
        sprite_index: u16_at(buf, 20),
        name: string_from_field(&buf[22..54]),
        name_id: u16_at(buf, 54),
        alignment: buf[56],
        max_troops: buf[57],
        alive_troops: buf[58],
        ranks: buf[59],
        unknown4: bytes_at(buf, 60),
        troop_attributes: attributes_at(buf, 64),
        mount: buf[73],
        armour: buf[74],
        weapon: buf[75],
        class: buf[76],
        point_value: buf[77],
        missile_weapon: buf[78],
        unknown5: buf[79],
        unknown6: bytes_at(buf, 80),
        leader: Leader {
            sprite_index: u16_at(buf, 84),
            name: string_from_field(&buf[86..118]),
            attributes: attributes_at(buf, 127),
            mount: buf[136],
            armour: buf[137],
            weapon: buf[138],
            unit_class: buf[139],
            point_value: buf[140],
            missile_weapon: buf[141],
            head_id: u16_at(buf, 146),
            x: bytes_at(buf, 148),
            y: bytes_at(buf, 152),
        },
        unknown7: bytes_at(buf, 142),
        experience: u16_at(buf, 156),
        duplicate_id: buf[158],
        min_armour: buf[159],
        magic_book: u16_at(buf, 160),
        magic_items: [u16_at(buf, 162), u16_at(buf, 164), u16_at(buf, 166)],
        purchased_armour: buf[180],
        max_purchasable_armour: buf[181],
        repurchased_troops: buf[182],
        max_purchasable_troops: buf[183],
        book_profile: bytes_at(buf, 184),
    }
}
