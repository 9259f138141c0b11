//! Print a summary of a battle project file.
//!
//! Usage: info <input.prj>

use std::env;

use darkomen_prj::{Heightmap, Project};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.prj>", args[0]);
        std::process::exit(1);
    }

    let input = &args[1];
    let project = match Project::load(input) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("✗ Failed to parse {input}: {e}");
            std::process::exit(1);
        }
    };

    println!("✓ Parsed {input}");
    println!("  base:      {}", project.base.model_file_name);
    println!("  water:     {}", project.water.model_file_name);
    println!("  furniture: {}", project.furniture.file_names.len());
    for name in &project.furniture.file_names {
        println!("    - {name}");
    }
    println!("  instances: {}", project.instances.len());
    for instance in &project.instances {
        println!(
            "    - slot {} at {} (owner {})",
            instance.mesh_slot, instance.position, instance.owner_unit_index
        );
    }

    let terrain = &project.terrain;
    println!(
        "  terrain:   {}x{} cells, {} blocks per heightmap, {} directory chunks",
        terrain.width,
        terrain.height,
        terrain.primary.len(),
        terrain.offsets.len()
    );
    let mid = terrain.height_at(Heightmap::Primary, terrain.width / 2, terrain.height / 2);
    if let Some(height) = mid {
        println!("  centre height: {height}");
    }
    println!(
        "  attributes: {}x{} ({} bytes)",
        project.attributes.width,
        project.attributes.height,
        project.attributes.data.len()
    );
}
