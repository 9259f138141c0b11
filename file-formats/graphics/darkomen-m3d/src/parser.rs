//! Model decoding
//!
//! Every section of a model file is laid out back to back, and object sizes
//! are only discoverable from their headers, so the decoder runs a single
//! forward pass over the input.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use darkomen_data::{ReadExt, string_from_field};

use crate::error::{Error, Result};
use crate::types::{
    Color, FACE_SIZE, Face, HEADER_SIZE, Header, MAGIC, Model, OBJECT_HEADER_SIZE, Object,
    TEXTURE_SIZE, Texture, VERTEX_SIZE, Vector, Vertex,
};

impl Model {
    /// Parses a model from a byte source.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let raw: [u8; HEADER_SIZE] = reader.read_array()?;
        let found = [raw[0], raw[1], raw[2], raw[3]];
        if found != MAGIC {
            return Err(Error::InvalidMagic {
                expected: MAGIC,
                found,
            });
        }

        let mut cur = &raw[4..];
        let header = Header {
            magic: cur.read_u32_le()?,
            version: cur.read_u32_le()?,
            crc: cur.read_u32_le()?,
            not_crc: cur.read_u32_le()?,
            texture_count: cur.read_u16_le()?,
            object_count: cur.read_u16_le()?,
        };

        let mut textures = Vec::with_capacity(usize::from(header.texture_count));
        for index in 0..usize::from(header.texture_count) {
            textures.push(read_texture(reader, index)?);
        }

        let mut objects = Vec::with_capacity(usize::from(header.object_count));
        for index in 0..usize::from(header.object_count) {
            let object = read_object(reader, index)?;

            if object.parent_index >= 0 && usize::from(object.parent_index.unsigned_abs()) >= index
            {
                return Err(Error::InvalidParentIndex {
                    object: index,
                    parent: object.parent_index,
                });
            }

            objects.push(object);
        }

        log::debug!(
            "parsed model: {} textures, {} objects, {} faces",
            textures.len(),
            objects.len(),
            objects.iter().map(|o| o.faces.len()).sum::<usize>()
        );

        Ok(Self {
            header,
            textures,
            objects,
        })
    }

    /// Opens and parses a model from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(&mut BufReader::new(file))
    }
}

fn read_texture<R: Read>(reader: &mut R, index: usize) -> Result<Texture> {
    let raw: [u8; TEXTURE_SIZE] = reader
        .read_array()
        .map_err(|source| Error::TruncatedTexture { index, source })?;

    Ok(Texture {
        path: string_from_field(&raw[..64]),
        file_name: string_from_field(&raw[64..]),
    })
}

fn read_object<R: Read>(reader: &mut R, index: usize) -> Result<Object> {
    let raw: [u8; OBJECT_HEADER_SIZE] = reader
        .read_array()
        .map_err(|source| Error::TruncatedObject { index, source })?;

    let name = string_from_field(&raw[..32]);
    let mut cur = &raw[32..];
    let parent_index = cur.read_i16_le()?;
    let padding = cur.read_i16_le()?;
    let pivot = Vector::parse(&mut cur)?;
    let vertex_count = cur.read_u16_le()?;
    let face_count = cur.read_u16_le()?;
    let flags = cur.read_u32_le()?;
    let reserved = [cur.read_u32_le()?, cur.read_u32_le()?];

    // Faces precede vertices in the stream.
    let mut faces = Vec::with_capacity(usize::from(face_count));
    for face_index in 0..usize::from(face_count) {
        let face = read_face(reader, index)?;

        if let Some(&bad) = face.indices.iter().find(|&&i| i >= vertex_count) {
            return Err(Error::FaceIndexOutOfRange {
                object: index,
                face: face_index,
                index: bad,
                vertex_count,
            });
        }

        faces.push(face);
    }

    let mut vertices = Vec::with_capacity(usize::from(vertex_count));
    for _ in 0..vertex_count {
        vertices.push(read_vertex(reader, index)?);
    }

    Ok(Object {
        name,
        parent_index,
        padding,
        pivot,
        flags,
        reserved,
        faces,
        vertices,
    })
}

fn read_face<R: Read>(reader: &mut R, object: usize) -> Result<Face> {
    let raw: [u8; FACE_SIZE] = reader.read_array().map_err(|source| {
        Error::TruncatedObject {
            index: object,
            source,
        }
    })?;

    let mut cur = &raw[..];
    Ok(Face {
        indices: [
            cur.read_u16_le()?,
            cur.read_u16_le()?,
            cur.read_u16_le()?,
        ],
        texture_index: cur.read_u16_le()?,
        normal: Vector::parse(&mut cur)?,
        reserved: [cur.read_u32_le()?, cur.read_u32_le()?],
    })
}

fn read_vertex<R: Read>(reader: &mut R, object: usize) -> Result<Vertex> {
    let raw: [u8; VERTEX_SIZE] = reader.read_array().map_err(|source| {
        Error::TruncatedObject {
            index: object,
            source,
        }
    })?;

    let mut cur = &raw[..];
    Ok(Vertex {
        position: Vector::parse(&mut cur)?,
        normal: Vector::parse(&mut cur)?,
        color: Color {
            r: cur.read_u8()?,
            g: cur.read_u8()?,
            b: cur.read_u8()?,
            a: cur.read_u8()?,
        },
        u: cur.read_f32_le()?,
        v: cur.read_f32_le()?,
        index: cur.read_u32_le()?,
        reserved: cur.read_u32_le()?,
    })
}
