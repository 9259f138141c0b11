//! Extract every frame of a sprite atlas as PNG files.
//!
//! Usage: extract <input.spr> [output-dir]

use std::env;
use std::path::Path;

use darkomen_spr::{Sprite, frame_to_image};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.spr> [output-dir]", args[0]);
        std::process::exit(1);
    }

    let input = &args[1];
    let output_dir = args.get(2).map_or(".", String::as_str);

    let sprite = match Sprite::load(input) {
        Ok(sprite) => sprite,
        Err(e) => {
            eprintln!("✗ Failed to parse {input}: {e}");
            std::process::exit(1);
        }
    };

    let stem = Path::new(input)
        .file_stem()
        .map_or_else(|| "frame".to_string(), |s| s.to_string_lossy().to_string());

    println!(
        "✓ Parsed {input}: {} frames, {} colors",
        sprite.frame_count(),
        sprite.color_table.len()
    );

    let mut written = 0usize;
    for (i, frame) in sprite.frames.iter().enumerate() {
        let Some(image) = frame_to_image(frame) else {
            println!("  frame {i:03}: empty, skipped");
            continue;
        };

        let path = format!("{output_dir}/{stem}_{i:03}.png");
        match image.save(&path) {
            Ok(()) => {
                println!(
                    "  frame {i:03}: {}x{} ({:?}) -> {path}",
                    frame.width, frame.height, frame.frame_type
                );
                written += 1;
            }
            Err(e) => {
                eprintln!("✗ Failed to write {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    println!("✓ Wrote {written} PNG files to {output_dir}");
}
