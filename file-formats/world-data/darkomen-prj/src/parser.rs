//! Battle project decoding
//!
//! Blocks appear in a fixed order and sizes are only discoverable from
//! their headers, so the decoder runs a single forward pass over the
//! input.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use darkomen_data::{ReadExt, string_from_field};
use glam::Vec3;

use crate::error::{Error, Result};
use crate::types::{
    ATTRIBUTES_ID, Attributes, BASE_ID, Base, FORMAT, FURNITURE_ID, Furniture, HEADER_SIZE,
    Heightmap, INSTANCES_ID, Instance, POSITION_SCALE, Project, ROTATION_SCALE, TERRAIN_ID,
    Terrain, TerrainBlock, WATER_ID, Water,
};

impl Project {
    /// Parses a battle project from a byte source.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let raw: [u8; HEADER_SIZE] = reader.read_array()?;
        if raw != *FORMAT.as_bytes() {
            return Err(Error::InvalidFormat {
                expected: FORMAT,
                found: String::from_utf8_lossy(&raw).into_owned(),
            });
        }

        let base = Base {
            model_file_name: read_model_name(reader, BASE_ID)?,
        };
        let water = Water {
            model_file_name: read_model_name(reader, WATER_ID)?,
        };
        let furniture = read_furniture(reader)?;
        let instances = read_instances(reader)?;
        let terrain = read_terrain(reader)?;
        let attributes = read_attributes(reader)?;

        log::debug!(
            "parsed project: base {:?}, {} furniture names, {} instances, {}x{} terrain",
            base.model_file_name,
            furniture.file_names.len(),
            instances.len(),
            terrain.width,
            terrain.height
        );

        Ok(Self {
            base,
            water,
            furniture,
            instances,
            terrain,
            attributes,
        })
    }

    /// Opens and parses a battle project from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(&mut BufReader::new(file))
    }
}

/// Reads a block ID and size field, requiring the expected ID.
fn read_block_header<R: Read>(reader: &mut R, expected: &'static str) -> Result<u32> {
    let raw: [u8; 8] = reader
        .read_array()
        .map_err(|source| Error::TruncatedBlock {
            id: expected,
            source,
        })?;

    if &raw[..4] != expected.as_bytes() {
        return Err(Error::UnexpectedBlock {
            expected,
            found: String::from_utf8_lossy(&raw[..4]).into_owned(),
        });
    }

    let mut cur = &raw[4..];
    Ok(cur.read_u32_le()?)
}

fn read_model_name<R: Read>(reader: &mut R, id: &'static str) -> Result<String> {
    let size = read_block_header(reader, id)?;
    let payload = reader
        .read_vec(size as usize)
        .map_err(|source| Error::TruncatedBlock { id, source })?;

    Ok(string_from_field(&payload))
}

/// Reads the furniture name table.
///
/// The declared block size counts the name count field and the name
/// bytes but not the per-name length prefixes.
fn read_furniture<R: Read>(reader: &mut R) -> Result<Furniture> {
    let declared = read_block_header(reader, FURNITURE_ID)?;
    let truncated = |source| Error::TruncatedBlock {
        id: FURNITURE_ID,
        source,
    };

    let count = reader.read_u32_le().map_err(truncated)?;
    let mut file_names = Vec::with_capacity((count as usize).min(1024));
    let mut name_bytes = 0u32;
    for _ in 0..count {
        let length = reader.read_u32_le().map_err(truncated)?;
        let raw = reader.read_vec(length as usize).map_err(truncated)?;
        name_bytes = name_bytes.saturating_add(length);
        file_names.push(string_from_field(&raw));
    }

    let actual = name_bytes.saturating_add(4);
    if declared != actual {
        return Err(Error::FurnitureSizeMismatch { declared, actual });
    }

    Ok(Furniture { file_names })
}

fn read_instances<R: Read>(reader: &mut R) -> Result<Vec<Instance>> {
    let size = read_block_header(reader, INSTANCES_ID)?;
    let truncated = |source| Error::TruncatedBlock {
        id: INSTANCES_ID,
        source,
    };

    let count = reader.read_u32_le().map_err(truncated)? as usize;
    let record_size = reader.read_u32_le().map_err(truncated)? as usize;
    let data = reader.read_vec(size as usize).map_err(truncated)?;

    let mut instances = Vec::with_capacity(count.min(1024));
    for index in 0..count {
        // Records are laid out at a fixed stride; bytes past the fixed
        // fields are reserved and skipped.
        let record = data.get(index * record_size..).unwrap_or_default();
        instances.push(
            parse_instance(record)
                .map_err(|source| Error::TruncatedInstance { index, source })?,
        );
    }

    Ok(instances)
}

fn parse_instance(mut cur: &[u8]) -> io::Result<Instance> {
    Ok(Instance {
        prev: cur.read_i32_le()?,
        next: cur.read_i32_le()?,
        selected: cur.read_i32_le()?,
        exclude_from_terrain: cur.read_i32_le()?,
        position: read_scaled_vector(&mut cur, POSITION_SCALE)?,
        rotation: read_scaled_vector(&mut cur, ROTATION_SCALE)?,
        min: read_scaled_vector(&mut cur, POSITION_SCALE)?,
        max: read_scaled_vector(&mut cur, POSITION_SCALE)?,
        mesh_slot: cur.read_i32_le()?,
        mesh_id: cur.read_i32_le()?,
        attackable: cur.read_i32_le()?,
        toughness: cur.read_i32_le()?,
        wounds: cur.read_i32_le()?,
        unknown1: cur.read_i32_le()?,
        owner_unit_index: cur.read_i32_le()?,
        burnable: cur.read_i32_le()?,
        sfx_code: cur.read_i32_le()?,
        gfx_code: cur.read_i32_le()?,
        locked: cur.read_i32_le()?,
        exclude_from_terrain_shadow: cur.read_i32_le()?,
        exclude_from_walk: cur.read_i32_le()?,
        magic_item_code: cur.read_i32_le()?,
        particle_effect_code: cur.read_i32_le()?,
        dead_mesh_slot: cur.read_i32_le()?,
        dead_mesh_id: cur.read_i32_le()?,
        light: cur.read_i32_le()?,
        light_radius: cur.read_i32_le()?,
        light_ambient: cur.read_i32_le()?,
        unknown2: cur.read_i32_le()?,
        unknown3: cur.read_i32_le()?,
    })
}

fn read_scaled_vector(cur: &mut &[u8], scale: f32) -> io::Result<Vec3> {
    let x = cur.read_i32_le()? as f32 / scale;
    let y = cur.read_i32_le()? as f32 / scale;
    let z = cur.read_i32_le()? as f32 / scale;

    Ok(Vec3::new(x, y, z))
}

fn read_terrain<R: Read>(reader: &mut R) -> Result<Terrain> {
    let _size = read_block_header(reader, TERRAIN_ID)?;
    let truncated = |source| Error::TruncatedBlock {
        id: TERRAIN_ID,
        source,
    };

    let raw: [u8; 20] = reader.read_array().map_err(truncated)?;
    let mut cur = &raw[..];
    let width = cur.read_u32_le()?;
    let height = cur.read_u32_le()?;
    let compressed_blocks = cur.read_u32_le()?;
    let uncompressed_blocks = cur.read_u32_le()?;
    let map_block_size = cur.read_u32_le()?;

    // Both heightmaps split the declared block byte size evenly.
    let half = (map_block_size / 2) as usize;
    let primary_raw = reader.read_vec(half).map_err(truncated)?;
    let primary = parse_heightmap(&primary_raw, uncompressed_blocks, Heightmap::Primary)?;
    let secondary_raw = reader.read_vec(half).map_err(truncated)?;
    let secondary = parse_heightmap(&secondary_raw, uncompressed_blocks, Heightmap::Secondary)?;

    let offset_count = reader.read_u32_le().map_err(truncated)?;
    if offset_count != compressed_blocks.saturating_mul(64) {
        return Err(Error::OffsetCountMismatch {
            blocks: compressed_blocks,
            offsets: offset_count,
        });
    }

    let mut offsets = Vec::with_capacity((compressed_blocks as usize).min(4096));
    for _ in 0..compressed_blocks {
        offsets.push(reader.read_array().map_err(truncated)?);
    }

    Ok(Terrain {
        width,
        height,
        primary,
        secondary,
        offsets,
    })
}

/// Parses one heightmap's block entries.
///
/// Offset indices are stored premultiplied by the directory chunk size
/// and reduce to plain chunk indices here.
fn parse_heightmap(raw: &[u8], count: u32, map: Heightmap) -> Result<Vec<TerrainBlock>> {
    let truncated = |source| Error::TruncatedBlock {
        id: TERRAIN_ID,
        source,
    };

    let mut cur = raw;
    let mut blocks = Vec::with_capacity((count as usize).min(4096));
    for index in 0..count as usize {
        let minimum = cur.read_u32_le().map_err(truncated)?;
        let value = cur.read_u32_le().map_err(truncated)?;
        if value % 64 != 0 {
            return Err(Error::MisalignedOffsetIndex {
                heightmap: map,
                index,
                value,
            });
        }

        blocks.push(TerrainBlock {
            minimum,
            offset_index: value / 64,
        });
    }

    Ok(blocks)
}

fn read_attributes<R: Read>(reader: &mut R) -> Result<Attributes> {
    let size = read_block_header(reader, ATTRIBUTES_ID)?;
    let truncated = |source| Error::TruncatedBlock {
        id: ATTRIBUTES_ID,
        source,
    };

    let data = reader.read_vec(size as usize).map_err(truncated)?;
    let mut cur = &data[..];
    let width = cur.read_u32_le().map_err(truncated)?;
    let height = cur.read_u32_le().map_err(truncated)?;

    Ok(Attributes {
        width,
        height,
        data: cur.to_vec(),
    })
}
