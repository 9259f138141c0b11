//! Print a summary of an army roster.
//!
//! Usage: info <input.arm>

use std::env;

use darkomen_army::Army;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.arm>", args[0]);
        std::process::exit(1);
    }

    let input = &args[1];
    let army = match Army::load(input) {
        Ok(army) => army,
        Err(e) => {
            eprintln!("✗ Failed to parse {input}: {e}");
            std::process::exit(1);
        }
    };

    println!("✓ Parsed {input}");
    if army.is_save_game() {
        println!("  framing:   save game");
    }
    println!("  race:      {}", army.header.race);
    println!(
        "  gold:      {} in coffers, {} from treasures",
        army.header.gold_in_coffers, army.header.gold_from_treasures
    );
    println!("  regiments: {}", army.regiment_count());
    for regiment in &army.regiments {
        println!(
            "    - {:<32} {:?} {:?}, {}/{} troops, threat {}",
            regiment.name,
            regiment.race(),
            regiment.unit_type(),
            regiment.alive_troops,
            regiment.max_troops,
            regiment.threat_level(),
        );
    }
}
