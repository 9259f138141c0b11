//! Print a summary of a model file.
//!
//! Usage: info <input.m3d>

use std::env;
use std::path::Path;

use darkomen_m3d::{Model, flags_from_file_name};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.m3d>", args[0]);
        std::process::exit(1);
    }

    let input = &args[1];
    let model = match Model::load(input) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("✗ Failed to parse {input}: {e}");
            std::process::exit(1);
        }
    };

    let file_name = Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    println!("✓ Parsed {input}");
    println!("  version:  {}", model.header.version);
    println!("  flags:    {:?}", flags_from_file_name(&file_name));
    println!("  textures: {}", model.textures.len());
    for texture in &model.textures {
        println!("    - {}", texture.file_name);
    }
    println!(
        "  objects:  {} ({} faces, {} vertices)",
        model.objects.len(),
        model.face_count(),
        model.vertex_count()
    );
    for object in &model.objects {
        let parent = if object.is_root() {
            "root".to_string()
        } else {
            format!("child of {}", object.parent_index)
        };
        println!(
            "    - {} [{}]: {} faces, {} vertices",
            object.name,
            parent,
            object.faces.len(),
            object.vertices.len()
        );
    }
}
