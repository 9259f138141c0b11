//! Model data structures

use std::io::{Read, Write};

use darkomen_data::{ReadExt, WriteExt};

/// Magic bytes at the start of every model file.
/// The game spells "M3D" backwards on disk.
pub const MAGIC: [u8; 4] = *b"PD3M";

/// Size in bytes of the file header
pub const HEADER_SIZE: usize = 24;

/// Size in bytes of one texture record
pub const TEXTURE_SIZE: usize = 96;

/// Size in bytes of one object header
pub const OBJECT_HEADER_SIZE: usize = 64;

/// Size in bytes of one face record
pub const FACE_SIZE: usize = 28;

/// Size in bytes of one vertex record
pub const VERTEX_SIZE: usize = 44;

/// A vector in 3D space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector {
    /// Parse a vector from a reader
    pub fn parse<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let x = reader.read_f32_le()?;
        let y = reader.read_f32_le()?;
        let z = reader.read_f32_le()?;

        Ok(Self { x, y, z })
    }

    /// Write a vector to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_f32_le(self.x)?;
        writer.write_f32_le(self.y)?;
        writer.write_f32_le(self.z)?;

        Ok(())
    }

    /// Convert to a glam vector for easier math operations
    #[must_use]
    pub fn to_glam(&self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Create from a glam vector
    #[must_use]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// A vertex color with alpha
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha component
    pub a: u8,
}

/// File header of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Secondary magic value, recorded but not validated
    pub magic: u32,
    /// Format version, recorded but not validated
    pub version: u32,
    /// Checksum as stored in the file, not validated
    pub crc: u32,
    /// Bitwise NOT of the checksum, not validated
    pub not_crc: u32,
    /// Number of texture records
    pub texture_count: u16,
    /// Number of objects
    pub object_count: u16,
}

/// A texture reference
///
/// The path field records a directory on the original developer's machine
/// and carries no useful data beyond trivia; the file name is what the
/// engine resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Original build-machine directory
    pub path: String,
    /// Texture image file name
    pub file_name: String,
}

/// A triangle face within an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Indices into the object's vertex list
    pub indices: [u16; 3],
    /// Index into the model's texture table
    pub texture_index: u16,
    /// Face normal
    pub normal: Vector,
    /// Reserved trailing fields
    pub reserved: [u32; 2],
}

/// A vertex within an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in object space
    pub position: Vector,
    /// Vertex normal
    pub normal: Vector,
    /// Vertex color
    pub color: Color,
    /// Texture U coordinate
    pub u: f32,
    /// Texture V coordinate
    pub v: f32,
    /// Index as recorded in the file
    pub index: u32,
    /// Reserved trailing field
    pub reserved: u32,
}

/// A named mesh object
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// Object name
    pub name: String,
    /// Index of the parent object, -1 for roots
    pub parent_index: i16,
    /// Alignment padding as stored in the file
    pub padding: i16,
    /// Pivot point
    pub pivot: Vector,
    /// Raw object flags
    pub flags: u32,
    /// Reserved trailing header fields
    pub reserved: [u32; 2],
    /// Triangle faces
    pub faces: Vec<Face>,
    /// Vertices
    pub vertices: Vec<Vertex>,
}

impl Object {
    /// Whether this object sits at the root of the hierarchy
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_index < 0
    }
}

/// A fully decoded model
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// The file header
    pub header: Header,
    /// Texture table
    pub textures: Vec<Texture>,
    /// Mesh objects in file order
    pub objects: Vec<Object>,
}

impl Model {
    /// Total number of triangle faces across all objects
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.objects.iter().map(|o| o.faces.len()).sum()
    }

    /// Total number of vertices across all objects
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.objects.iter().map(|o| o.vertices.len()).sum()
    }
}
