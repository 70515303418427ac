//! Shared test helpers for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use std::collections::{BTreeMap, HashSet};

use crate::block::{Block, Side};
use crate::city::{City, CityGenerator};
use crate::config::CityConfig;

// ===========================================================================
// Builders
// ===========================================================================

/// Config producing small cities quickly.
pub fn small_config() -> CityConfig {
    CityConfig {
        sensitivity_to_distance: 1.2,
        max_blocks: 200,
        ..Default::default()
    }
}

/// Generate a city from a config that is known to be valid.
pub fn generate(config: CityConfig, seed: u64) -> City {
    CityGenerator::new(config)
        .expect("test config should be valid")
        .generate_seeded(seed)
}

// ===========================================================================
// Invariant checks
// ===========================================================================

/// No two buildings in the block cover the same cell.
pub fn assert_disjoint(block: &Block) {
    let mut seen = HashSet::new();
    for building in block.buildings() {
        for cell in building.cells() {
            assert!(
                seen.insert(cell),
                "block {} has overlapping buildings at {:?}",
                block.coord(),
                cell
            );
        }
    }
}

/// Every building stays inside `inset..block_size - inset` on both axes.
pub fn assert_contained(block: &Block, block_size: u32, inset: u32) {
    let ring_size = block_size - inset;
    for building in block.buildings() {
        let (origin, fp) = (building.origin, building.footprint);
        assert!(origin.row >= inset && origin.col >= inset);
        assert!(
            origin.row + fp.width <= ring_size && origin.col + fp.height <= ring_size,
            "building at {origin:?} with {fp:?} leaves the ring of block {}",
            block.coord()
        );
    }
}

/// Street numbers strictly increase per side in building-list order.
pub fn assert_monotonic_addresses(block: &Block) {
    for side in Side::all() {
        let numbers: Vec<u32> = block
            .buildings_on(side)
            .map(|b| b.street_number().expect("building should be addressed"))
            .collect();
        for pair in numbers.windows(2) {
            assert!(
                pair[0] < pair[1],
                "block {} side {side:?} numbers out of order: {numbers:?}",
                block.coord()
            );
        }
    }
}

/// Disjointness, containment, address order, and coordinate uniqueness for
/// a whole city.
pub fn assert_city_invariants(city: &City) {
    let config = city.config();
    let mut coords = HashSet::new();
    for block in city.blocks() {
        assert!(coords.insert(block.coord()), "duplicate block {}", block.coord());
        assert_disjoint(block);
        assert_contained(block, config.block_size, config.ring_inset);
        assert_monotonic_addresses(block);
        for building in block.buildings() {
            assert_eq!(building.block, block.coord());
        }
    }
    assert_eq!(coords.len(), city.block_count());
}

/// A comparable snapshot of every building: coordinate to
/// `(origin, footprint, address)` lists.
pub fn building_snapshot(city: &City) -> BTreeMap<String, Vec<String>> {
    city.blocks()
        .map(|block| {
            let buildings = block
                .buildings()
                .iter()
                .map(|b| format!("{:?} {:?} {}", b.origin, b.footprint, b.address))
                .collect();
            (block.coord().to_string(), buildings)
        })
        .collect()
}
