//! City graph expansion: grow the set of blocks outward from the origin.
//!
//! Each expansion of a block at Manhattan distance `d` draws one uniform per
//! 8-connected neighbour and admits it when the draw is below
//! `sensitivity_to_distance / (d + 1)` and the coordinate is still
//! unclaimed. One further draw decides whether the admitted children are
//! commercial (below `sensitivity_to_commercial_origin / (d + 1)`) or
//! residential; all children of one expansion share that type.
//!
//! Expansion runs on an explicit worklist instead of the call stack, so
//! deep cities cannot exhaust it. [`ExpansionOrder::DepthFirst`] reproduces
//! recursive order exactly: every admitted child is claimed and fully
//! expanded before its next sibling. A sibling that a deeper branch claimed
//! in the meantime is skipped.

use rand::Rng;
use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::block::{Block, BlockCoord, BlockType};
use crate::config::{CityConfig, ExpansionOrder};
use crate::rng::unit;

/// Blocks produced by the graph phase, before any building is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct CityGraph {
    pub blocks: BTreeMap<BlockCoord, Block>,
    /// Coordinates in the order they were claimed. Starts with the origin.
    pub order: Vec<BlockCoord>,
    /// Whether `max_blocks` or `max_depth` stopped expansion early.
    pub truncated: bool,
}

/// Children admitted by one expansion, waiting to be claimed.
#[derive(Debug)]
struct Frame {
    children: std::vec::IntoIter<BlockCoord>,
    child_type: BlockType,
    depth: usize,
}

/// Mutable state of a single graph-phase run.
///
/// Holds the visited set and the block map explicitly, so independent runs
/// never share state.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    config: &'a CityConfig,
    visited: HashSet<BlockCoord>,
    blocks: BTreeMap<BlockCoord, Block>,
    order: Vec<BlockCoord>,
    truncated: bool,
}

impl<'a> GenerationContext<'a> {
    /// A context holding only the hand-made commercial origin block.
    pub fn new(config: &'a CityConfig) -> Self {
        let mut ctx = Self {
            config,
            visited: HashSet::new(),
            blocks: BTreeMap::new(),
            order: Vec::new(),
            truncated: false,
        };
        ctx.claim(BlockCoord::ORIGIN, BlockType::Commercial);
        ctx
    }

    pub fn is_claimed(&self, coord: BlockCoord) -> bool {
        self.blocks.contains_key(&coord)
    }

    pub fn is_visited(&self, coord: BlockCoord) -> bool {
        self.visited.contains(&coord)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Run the graph phase to completion and hand back the blocks.
    pub fn expand_all<R: Rng + ?Sized>(mut self, rng: &mut R) -> CityGraph {
        match self.config.expansion_order {
            ExpansionOrder::DepthFirst => self.expand_depth_first(rng),
            ExpansionOrder::BreadthFirst => self.expand_breadth_first(rng),
        }
        if self.truncated {
            log::warn!(
                "city expansion truncated at {} blocks (max_blocks {}, max_depth {})",
                self.blocks.len(),
                self.config.max_blocks,
                self.config.max_depth
            );
        }
        CityGraph {
            blocks: self.blocks,
            order: self.order,
            truncated: self.truncated,
        }
    }

    fn expand_depth_first<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut stack = vec![self.expand(BlockCoord::ORIGIN, 1, rng)];
        while let Some(frame) = stack.last_mut() {
            let Some(child) = frame.children.next() else {
                stack.pop();
                continue;
            };
            if self.is_claimed(child) {
                continue;
            }
            if !self.has_room() {
                return;
            }
            let (child_type, depth) = (frame.child_type, frame.depth + 1);
            self.claim(child, child_type);
            let next = self.expand(child, depth, rng);
            stack.push(next);
        }
    }

    fn expand_breadth_first<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut queue = VecDeque::from([(BlockCoord::ORIGIN, 1)]);
        while let Some((coord, depth)) = queue.pop_front() {
            let frame = self.expand(coord, depth, rng);
            for child in frame.children {
                if self.is_claimed(child) {
                    continue;
                }
                if !self.has_room() {
                    return;
                }
                self.claim(child, frame.child_type);
                queue.push_back((child, depth + 1));
            }
        }
    }

    /// Mark `coord` visited and decide which neighbours it admits.
    fn expand<R: Rng + ?Sized>(
        &mut self,
        coord: BlockCoord,
        depth: usize,
        rng: &mut R,
    ) -> Frame {
        self.visited.insert(coord);

        let falloff = f64::from(coord.manhattan_from_origin()) + 1.0;
        let admit_below = self.config.sensitivity_to_distance / falloff;

        if depth >= self.config.max_depth {
            // Only a cut if this block could still have grown.
            if admit_below > 0.0 && coord.neighbors_8().iter().any(|&n| self.is_open(n)) {
                self.truncated = true;
            }
            return Frame {
                children: Vec::new().into_iter(),
                child_type: BlockType::Residential,
                depth,
            };
        }

        let mut children = Vec::new();
        for neighbor in coord.neighbors_8() {
            // Draw for every neighbour so the stream does not depend on
            // which coordinates are already taken.
            let draw = unit(rng);
            if draw < admit_below && self.is_open(neighbor) {
                children.push(neighbor);
            }
        }

        let commercial_below = self.config.sensitivity_to_commercial_origin / falloff;
        let child_type = if unit(rng) < commercial_below {
            BlockType::Commercial
        } else {
            BlockType::Residential
        };

        Frame {
            children: children.into_iter(),
            child_type,
            depth,
        }
    }

    fn is_open(&self, coord: BlockCoord) -> bool {
        !self.is_claimed(coord) && !self.is_visited(coord)
    }

    fn has_room(&mut self) -> bool {
        if self.blocks.len() >= self.config.max_blocks {
            self.truncated = true;
            false
        } else {
            true
        }
    }

    fn claim(&mut self, coord: BlockCoord, block_type: BlockType) {
        self.blocks
            .insert(coord, Block::new(coord, block_type, self.config.block_size));
        self.order.push(coord);
    }
}

/// Build the block graph for `config` from the origin.
pub fn build_graph<R: Rng + ?Sized>(config: &CityConfig, rng: &mut R) -> CityGraph {
    log::debug!(
        "expanding city graph ({:?}, sensitivity_to_distance {})",
        config.expansion_order,
        config.sensitivity_to_distance
    );
    let graph = GenerationContext::new(config).expand_all(rng);
    log::debug!("graph phase produced {} blocks", graph.blocks.len());
    graph
}
