//! Integration tests for battle project parsing

use darkomen_data::WriteExt;
use darkomen_prj::{Heightmap, Project, TerrainBlock};
use glam::Vec3;

const RECORD_SIZE: usize = 152;

fn push_block(buf: &mut Vec<u8>, id: &str, payload: &[u8]) {
    buf.extend_from_slice(id.as_bytes());
    buf.write_u32_le(payload.len() as u32).unwrap();
    buf.extend_from_slice(payload);
}

fn push_furniture(buf: &mut Vec<u8>, names: &[&str]) {
    let lengths: u32 = names.iter().map(|n| n.len() as u32 + 1).sum();
    buf.extend_from_slice(b"FURN");
    buf.write_u32_le(4 + lengths).unwrap();
    buf.write_u32_le(names.len() as u32).unwrap();
    for name in names {
        buf.write_u32_le(name.len() as u32 + 1).unwrap();
        buf.extend_from_slice(name.as_bytes());
        buf.push(0);
    }
}

fn instance_record(prev: i32, next: i32, position: [i32; 3], mesh_slot: i32) -> Vec<u8> {
    let mut raw = Vec::with_capacity(RECORD_SIZE);
    raw.write_i32_le(prev).unwrap();
    raw.write_i32_le(next).unwrap();
    for _ in 0..2 {
        raw.write_i32_le(0).unwrap(); // selected, exclude_from_terrain
    }
    for value in position {
        raw.write_i32_le(value).unwrap();
    }
    for _ in 0..9 {
        raw.write_i32_le(0).unwrap(); // rotation, min, max
    }
    raw.write_i32_le(mesh_slot).unwrap();
    for _ in 0..21 {
        raw.write_i32_le(0).unwrap();
    }

    assert_eq!(raw.len(), RECORD_SIZE);
    raw
}

/// A small riverside map: two furniture pieces placed on 16x8 cells of
/// terrain split into two 8x8 blocks per heightmap.
fn sample_project() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"Dark Omen Battle file 1.10      ");
    push_block(&mut buf, "BASE", b"B1_01.M3D\0");
    push_block(&mut buf, "WATR", b"\0");
    push_furniture(&mut buf, &["BRIDGE.M3D", "TREE2.M3D", "CART.M3D"]);

    let records = [
        instance_record(-1, 1, [4096, 0, 2048], 1),
        instance_record(0, -1, [8192, 1024, 0], 3),
    ];
    let payload = records.concat();
    buf.extend_from_slice(b"INST");
    buf.write_u32_le(payload.len() as u32).unwrap();
    buf.write_u32_le(records.len() as u32).unwrap();
    buf.write_u32_le(RECORD_SIZE as u32).unwrap();
    buf.extend_from_slice(&payload);

    buf.extend_from_slice(b"TERR");
    buf.write_u32_le(20 + 32 + 4 + 128).unwrap();
    buf.write_u32_le(16).unwrap(); // width
    buf.write_u32_le(8).unwrap(); // height
    buf.write_u32_le(2).unwrap(); // compressed blocks
    buf.write_u32_le(2).unwrap(); // uncompressed blocks
    buf.write_u32_le(32).unwrap(); // heightmap block bytes
    for (minimum, offset) in [(300u32, 64u32), (340, 0)] {
        buf.write_u32_le(minimum).unwrap();
        buf.write_u32_le(offset).unwrap();
    }
    for (minimum, offset) in [(0u32, 0u32), (0, 0)] {
        buf.write_u32_le(minimum).unwrap();
        buf.write_u32_le(offset).unwrap();
    }
    buf.write_u32_le(128).unwrap();
    buf.extend_from_slice(&[2u8; 64]);
    for cell in 0..64u8 {
        buf.push(cell);
    }

    let mut attributes = Vec::new();
    attributes.write_u32_le(16).unwrap();
    attributes.write_u32_le(8).unwrap();
    attributes.extend_from_slice(&[0u8; 128]);
    push_block(&mut buf, "ATTR", &attributes);

    buf
}

#[test]
fn test_parse_full_project() {
    let bytes = sample_project();
    let project = Project::parse(&mut &bytes[..]).unwrap();

    assert_eq!(project.base.model_file_name, "B1_01.M3D");
    assert!(project.water.model_file_name.is_empty());
    assert_eq!(
        project.furniture.file_names,
        ["BRIDGE.M3D", "TREE2.M3D", "CART.M3D"]
    );

    assert_eq!(project.instances.len(), 2);
    let bridge = &project.instances[0];
    assert_eq!(bridge.next, 1);
    assert_eq!(bridge.position, Vec3::new(4.0, 0.0, 2.0));
    assert_eq!(bridge.mesh_slot, 1);
    let cart = &project.instances[1];
    assert_eq!(cart.prev, 0);
    assert_eq!(cart.position, Vec3::new(8.0, 1.0, 0.0));

    assert_eq!(
        project.terrain.primary[0],
        TerrainBlock {
            minimum: 300,
            offset_index: 1,
        }
    );
    assert_eq!(project.attributes.data.len(), 128);
}

#[test]
fn test_height_reconstruction_across_blocks() {
    let bytes = sample_project();
    let project = Project::parse(&mut &bytes[..]).unwrap();

    // Left block min 300 with ramped deltas, right block min 340, flat 2.
    assert_eq!(project.terrain.height_at(Heightmap::Primary, 0, 0), Some(300));
    assert_eq!(project.terrain.height_at(Heightmap::Primary, 7, 7), Some(363));
    assert_eq!(project.terrain.height_at(Heightmap::Primary, 8, 0), Some(342));
    assert_eq!(project.terrain.height_at(Heightmap::Secondary, 15, 7), Some(2));
    assert_eq!(project.terrain.height_at(Heightmap::Primary, 16, 0), None);
}

#[test]
fn test_decoding_twice_is_equal() {
    let bytes = sample_project();
    let first = Project::parse(&mut &bytes[..]).unwrap();
    let second = Project::parse(&mut &bytes[..]).unwrap();
    assert_eq!(first, second);
}
