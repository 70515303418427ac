//! Generate a city and print a per-block summary.
//!
//! Run with: `cargo run --example generate_city -- [seed]`

use citygen_core::city::CityGenerator;
use citygen_core::config::CityConfig;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let generator = match CityGenerator::new(CityConfig::default()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("invalid config: {e}");
            std::process::exit(1);
        }
    };
    let city = generator.generate_seeded(seed);
    let stats = city.stats();

    println!(
        "seed {seed}: {} blocks ({} commercial, {} residential), {} buildings",
        stats.blocks, stats.commercial_blocks, stats.residential_blocks, stats.buildings
    );

    for block in city.blocks() {
        println!();
        println!("block {} [{}]", block.coord(), block.block_type());
        print!("{}", block.occupancy());
        for building in block.buildings() {
            println!(
                "  {:>3}x{:<3} at ({}, {})  {}",
                building.footprint.width,
                building.footprint.height,
                building.origin.row,
                building.origin.col,
                building.address
            );
        }
    }
}
