//! Battle project data structures

use std::fmt;

use glam::Vec3;

/// Format string at the start of every battle project file.
/// The trailing spaces are part of the format.
pub const FORMAT: &str = "Dark Omen Battle file 1.10      ";

/// Size in bytes of the file header
pub const HEADER_SIZE: usize = 32;

/// Size in bytes of a block ID plus its size field
pub const BLOCK_HEADER_SIZE: usize = 8;

/// Size in bytes of the fixed fields of one instance record
pub const INSTANCE_RECORD_SIZE: usize = 152;

/// Block ID of the base model block
pub const BASE_ID: &str = "BASE";

/// Block ID of the water model block
pub const WATER_ID: &str = "WATR";

/// Block ID of the furniture name table block
pub const FURNITURE_ID: &str = "FURN";

/// Block ID of the instance list block
pub const INSTANCES_ID: &str = "INST";

/// Block ID of the terrain block
pub const TERRAIN_ID: &str = "TERR";

/// Block ID of the attribute map block
pub const ATTRIBUTES_ID: &str = "ATTR";

/// Fixed-point divisor for positions and bounding boxes
pub const POSITION_SCALE: f32 = 1024.0;

/// Fixed-point divisor for rotations, in turns
pub const ROTATION_SCALE: f32 = 4096.0;

/// Heightmap blocks and offset directory chunks cover 8x8 map cells.
const BLOCK_DIM: u32 = 8;

/// The base terrain model reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    /// File name of the base terrain model
    pub model_file_name: String,
}

/// The water model reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Water {
    /// File name of the water model, empty when the map has no water
    pub model_file_name: String,
}

/// The furniture model name table
///
/// Instance records refer to these names through their one-based
/// mesh slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Furniture {
    /// Furniture model file names in slot order
    pub file_names: Vec<String>,
}

/// A placed model instance on the battle map
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Linked-list index of the previous instance, as stored
    pub prev: i32,
    /// Linked-list index of the next instance, as stored
    pub next: i32,
    /// Editor selection handle
    pub selected: i32,
    /// Exclusion flag for terrain height sampling
    pub exclude_from_terrain: i32,
    /// Position in world units
    pub position: Vec3,
    /// Rotation in turns around each axis
    pub rotation: Vec3,
    /// Bounding box minimum in world units
    pub min: Vec3,
    /// Bounding box maximum in world units
    pub max: Vec3,
    /// One-based slot into the furniture name table
    pub mesh_slot: i32,
    /// Mesh ID as stored
    pub mesh_id: i32,
    /// Whether units can attack this instance
    pub attackable: i32,
    /// Toughness when attackable
    pub toughness: i32,
    /// Wounds when attackable
    pub wounds: i32,
    /// Unknown field
    pub unknown1: i32,
    /// Index of the owning unit, -1 when unowned
    pub owner_unit_index: i32,
    /// Whether the instance can catch fire
    pub burnable: i32,
    /// Sound effect code
    pub sfx_code: i32,
    /// Graphical effect code
    pub gfx_code: i32,
    /// Whether the editor locks the instance
    pub locked: i32,
    /// Exclusion flag for terrain shadow casting
    pub exclude_from_terrain_shadow: i32,
    /// Exclusion flag for walkability
    pub exclude_from_walk: i32,
    /// Magic item code
    pub magic_item_code: i32,
    /// Particle effect code
    pub particle_effect_code: i32,
    /// Mesh slot used once the instance is destroyed
    pub dead_mesh_slot: i32,
    /// Mesh ID used once the instance is destroyed
    pub dead_mesh_id: i32,
    /// Light type
    pub light: i32,
    /// Light radius
    pub light_radius: i32,
    /// Ambient light level
    pub light_ambient: i32,
    /// Unknown field
    pub unknown2: i32,
    /// Unknown field
    pub unknown3: i32,
}

/// Selects one of the two terrain heightmaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heightmap {
    /// The terrain surface heightmap
    Primary,
    /// The second heightmap layered over the first
    Secondary,
}

impl fmt::Display for Heightmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
        }
    }
}

/// An 8x8-cell heightmap block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainBlock {
    /// Minimum height of the block's cells
    pub minimum: u32,
    /// Index into the offset directory
    pub offset_index: u32,
}

/// The decoded terrain of a battle map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    /// Map width in cells
    pub width: u32,
    /// Map height in cells
    pub height: u32,
    /// Blocks of the primary heightmap, row-major in 8x8 tiles
    pub primary: Vec<TerrainBlock>,
    /// Blocks of the secondary heightmap, row-major in 8x8 tiles
    pub secondary: Vec<TerrainBlock>,
    /// Offset directory: per-cell height deltas for one block each
    pub offsets: Vec<[u8; 64]>,
}

impl Terrain {
    /// Number of heightmap blocks per row of the map
    #[must_use]
    pub fn blocks_per_row(&self) -> u32 {
        self.width.div_ceil(BLOCK_DIM)
    }

    /// Reconstructs the height of one map cell.
    ///
    /// The cell's block supplies a minimum height and its directory
    /// chunk the per-cell delta. Returns `None` when the coordinates
    /// lie outside the map or the block references a missing chunk.
    #[must_use]
    pub fn height_at(&self, map: Heightmap, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let blocks = match map {
            Heightmap::Primary => &self.primary,
            Heightmap::Secondary => &self.secondary,
        };
        let block_index = (y / BLOCK_DIM) * self.blocks_per_row() + x / BLOCK_DIM;
        let block = blocks.get(block_index as usize)?;
        let chunk = self.offsets.get(block.offset_index as usize)?;
        let cell = (y % BLOCK_DIM) * BLOCK_DIM + x % BLOCK_DIM;

        Some(block.minimum + u32::from(chunk[cell as usize]))
    }
}

/// The per-cell attribute map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    /// Map width in cells
    pub width: u32,
    /// Map height in cells
    pub height: u32,
    /// Raw attribute bytes following the dimensions
    pub data: Vec<u8>,
}

/// A fully decoded battle project
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Base terrain model
    pub base: Base,
    /// Water model
    pub water: Water,
    /// Furniture name table
    pub furniture: Furniture,
    /// Placed model instances
    pub instances: Vec<Instance>,
    /// Terrain heightmaps
    pub terrain: Terrain,
    /// Attribute map
    pub attributes: Attributes,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_terrain() -> Terrain {
        let mut first = [0u8; 64];
        for (cell, value) in first.iter_mut().enumerate() {
            *value = cell as u8;
        }

        Terrain {
            width: 16,
            height: 8,
            primary: vec![
                TerrainBlock {
                    minimum: 100,
                    offset_index: 0,
                },
                TerrainBlock {
                    minimum: 200,
                    offset_index: 1,
                },
            ],
            secondary: vec![
                TerrainBlock {
                    minimum: 50,
                    offset_index: 1,
                },
                TerrainBlock {
                    minimum: 60,
                    offset_index: 0,
                },
            ],
            offsets: vec![first, [7u8; 64]],
        }
    }

    #[test]
    fn test_height_reconstruction() {
        let terrain = sample_terrain();
        assert_eq!(terrain.blocks_per_row(), 2);

        // Cell (0, 0) sits in block 0, delta 0.
        assert_eq!(terrain.height_at(Heightmap::Primary, 0, 0), Some(100));
        // Cell (3, 2) sits in block 0 at chunk cell 2 * 8 + 3.
        assert_eq!(terrain.height_at(Heightmap::Primary, 3, 2), Some(119));
        // Cell (9, 7) sits in block 1, whose chunk is all sevens.
        assert_eq!(terrain.height_at(Heightmap::Primary, 9, 7), Some(207));
        assert_eq!(terrain.height_at(Heightmap::Secondary, 0, 0), Some(57));
    }

    #[test]
    fn test_height_outside_map() {
        let terrain = sample_terrain();
        assert_eq!(terrain.height_at(Heightmap::Primary, 16, 0), None);
        assert_eq!(terrain.height_at(Heightmap::Primary, 0, 8), None);
    }

    #[test]
    fn test_height_with_missing_chunk() {
        let mut terrain = sample_terrain();
        terrain.primary[1].offset_index = 9;
        assert_eq!(terrain.height_at(Heightmap::Primary, 8, 0), None);
    }
}
