//! Top-level generation pipeline and its read-only result.
//!
//! Generation runs in two phases. The graph phase claims every block; the
//! fill phase then visits blocks in claim order, placing and addressing
//! buildings. Only the fill phase touches occupancy grids, and each block is
//! filled exactly once.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::block::{Block, BlockCoord, BlockType, Building};
use crate::config::CityConfig;
use crate::error::ConfigError;
use crate::fill::fill_block;
use crate::graph::build_graph;
use crate::occupancy::RingBounds;
use crate::ring::ring_cells;
use crate::rng::CityRng;

/// A generated city. Read-only once built.
///
/// Serializes as its config plus a list of blocks in claim order, since
/// coordinate keys cannot be map keys in most formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CityRecord", into = "CityRecord")]
pub struct City {
    config: CityConfig,
    blocks: BTreeMap<BlockCoord, Block>,
    order: Vec<BlockCoord>,
    truncated: bool,
}

impl City {
    pub fn config(&self) -> &CityConfig {
        &self.config
    }

    pub fn block(&self, coord: BlockCoord) -> Option<&Block> {
        self.blocks.get(&coord)
    }

    /// Blocks in the order they were claimed, origin first.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.order.iter().filter_map(|coord| self.blocks.get(coord))
    }

    /// The full coordinate-keyed map.
    pub fn block_map(&self) -> &BTreeMap<BlockCoord, Block> {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Every building in the city, block by block.
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.blocks().flat_map(|block| block.buildings().iter())
    }

    /// Whether a block or depth cap stopped expansion early.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn stats(&self) -> CityStats {
        let mut stats = CityStats {
            blocks: self.blocks.len(),
            truncated: self.truncated,
            ..Default::default()
        };
        for block in self.blocks.values() {
            match block.block_type() {
                BlockType::Commercial => stats.commercial_blocks += 1,
                BlockType::Residential => stats.residential_blocks += 1,
            }
            stats.buildings += block.buildings().len();
            stats.occupied_cells += block.occupancy().occupied_count();
        }
        stats
    }
}

#[derive(Serialize, Deserialize)]
struct CityRecord {
    config: CityConfig,
    blocks: Vec<Block>,
    truncated: bool,
}

impl From<City> for CityRecord {
    fn from(mut city: City) -> Self {
        let blocks = city
            .order
            .iter()
            .filter_map(|coord| city.blocks.remove(coord))
            .collect();
        Self {
            config: city.config,
            blocks,
            truncated: city.truncated,
        }
    }
}

impl From<CityRecord> for City {
    fn from(record: CityRecord) -> Self {
        let mut blocks = BTreeMap::new();
        let mut order = Vec::with_capacity(record.blocks.len());
        for block in record.blocks {
            let coord = block.coord();
            if blocks.insert(coord, block).is_none() {
                order.push(coord);
            }
        }
        Self {
            config: record.config,
            blocks,
            order,
            truncated: record.truncated,
        }
    }
}

/// Summary counts for a generated city.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityStats {
    pub blocks: usize,
    pub commercial_blocks: usize,
    pub residential_blocks: usize,
    pub buildings: usize,
    pub occupied_cells: usize,
    pub truncated: bool,
}

/// Validated entry point for city generation.
#[derive(Debug, Clone)]
pub struct CityGenerator {
    config: CityConfig,
}

impl CityGenerator {
    /// Validate `config` up front; generation itself cannot fail.
    pub fn new(config: CityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CityConfig {
        &self.config
    }

    /// Generate a city, drawing all randomness from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> City {
        let graph = build_graph(&self.config, rng);
        let mut blocks = graph.blocks;

        let ring = ring_cells(self.config.block_size, self.config.ring_inset);
        let bounds = RingBounds::from_config(&self.config);
        let mut placed = 0;
        for coord in &graph.order {
            if let Some(block) = blocks.get_mut(coord) {
                placed += fill_block(block, &ring, bounds, rng).placed;
            }
        }
        log::debug!(
            "fill phase placed {placed} buildings across {} blocks",
            blocks.len()
        );

        City {
            config: self.config.clone(),
            blocks,
            order: graph.order,
            truncated: graph.truncated,
        }
    }

    /// Generate a city from a seed, using [`CityRng`].
    pub fn generate_seeded(&self, seed: u64) -> City {
        let mut rng = CityRng::new(seed);
        self.generate(&mut rng)
    }
}
