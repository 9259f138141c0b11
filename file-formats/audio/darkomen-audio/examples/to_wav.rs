use std::fs::File;
use std::io::BufReader;

use darkomen_audio::{MonoStream, StereoStream};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <input.mad|input.sad> [output.wav]", args[0]);
        println!("\nExample: Convert a Dark Omen audio stream to WAV");
        return;
    }

    let input = &args[1];
    let output = args.get(2).map(String::as_str).unwrap_or("output.wav");

    let file = match File::open(input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("✗ Failed to open '{input}': {e}");
            return;
        }
    };
    let mut reader = BufReader::new(file);

    let result = if input.to_ascii_lowercase().ends_with(".sad") {
        StereoStream::decode(&mut reader).and_then(|stream| {
            println!("✓ Loaded stereo stream: {input}");
            println!("  Blocks per channel: {}", stream.left.len());
            println!("  Samples per channel: {}", stream.sample_count());
            stream.write_wav(File::create(output)?)
        })
    } else {
        MonoStream::decode(&mut reader).and_then(|stream| {
            println!("✓ Loaded mono stream: {input}");
            println!("  Blocks: {}", stream.blocks.len());
            println!("  Samples: {}", stream.sample_count());
            stream.write_wav(File::create(output)?)
        })
    };

    match result {
        Ok(()) => println!("✓ Saved as: {output}"),
        Err(e) => eprintln!("✗ Failed to convert '{input}': {e}"),
    }
}
