//! City data model: block coordinates, blocks, and buildings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::occupancy::OccupancyGrid;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// Position of a block in the city grid. The origin block sits at `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
}

impl BlockCoord {
    pub const ORIGIN: BlockCoord = BlockCoord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance from the origin block.
    pub fn manhattan_from_origin(&self) -> u32 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }

    /// The eight surrounding coordinates, starting east and turning
    /// counter-clockwise.
    pub fn neighbors_8(&self) -> [BlockCoord; 8] {
        let (x, y) = (self.x, self.y);
        [
            BlockCoord::new(x + 1, y),
            BlockCoord::new(x + 1, y + 1),
            BlockCoord::new(x, y + 1),
            BlockCoord::new(x - 1, y + 1),
            BlockCoord::new(x - 1, y),
            BlockCoord::new(x - 1, y - 1),
            BlockCoord::new(x, y - 1),
            BlockCoord::new(x + 1, y - 1),
        ]
    }
}

impl fmt::Display for BlockCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// A cell inside a block's grid, addressed as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: u32,
    pub col: u32,
}

impl CellPos {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

// ---------------------------------------------------------------------------
// Block / building attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Residential,
    Commercial,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Residential => "residential",
            BlockType::Commercial => "commercial",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compass side of a block, used to pick the street a building faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    N,
    E,
    S,
    W,
}

impl Side {
    pub fn all() -> [Side; 4] {
        [Side::N, Side::E, Side::S, Side::W]
    }
}

/// Size of a building in grid cells.
///
/// `width` extends along the row axis and `height` along the column axis,
/// so a footprint at `origin` covers rows `origin.row..origin.row + width`
/// and columns `origin.col..origin.col + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Iterate over all cells covered by this footprint at the given origin.
    pub fn cells(&self, origin: CellPos) -> impl Iterator<Item = CellPos> {
        let (w, h) = (self.width, self.height);
        (0..w).flat_map(move |dr| {
            (0..h).map(move |dc| CellPos::new(origin.row + dr, origin.col + dc))
        })
    }
}

// ---------------------------------------------------------------------------
// Building / Block
// ---------------------------------------------------------------------------

/// A placed building. Owned by exactly one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub footprint: Footprint,
    /// Top-left cell within the block grid.
    pub origin: CellPos,
    pub side: Side,
    /// Empty until the owning block has been addressed.
    pub address: String,
    /// Coordinate of the owning block.
    pub block: BlockCoord,
}

impl Building {
    /// All cells this building covers.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> {
        self.footprint.cells(self.origin)
    }

    /// Leading street number of the address, if one has been assigned.
    pub fn street_number(&self) -> Option<u32> {
        self.address.split_whitespace().next()?.parse().ok()
    }
}

/// One square block of the city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    coord: BlockCoord,
    block_type: BlockType,
    pub(crate) occupancy: OccupancyGrid,
    pub(crate) buildings: Vec<Building>,
}

impl Block {
    /// A fresh block with an empty occupancy grid and no buildings.
    pub fn new(coord: BlockCoord, block_type: BlockType, block_size: u32) -> Self {
        Self {
            coord,
            block_type,
            occupancy: OccupancyGrid::new(block_size),
            buildings: Vec::new(),
        }
    }

    pub fn coord(&self) -> BlockCoord {
        self.coord
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// Buildings in ring-traversal order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Buildings on one side, in building-list order.
    pub fn buildings_on(&self, side: Side) -> impl Iterator<Item = &Building> {
        self.buildings.iter().filter(move |b| b.side == side)
    }
}
