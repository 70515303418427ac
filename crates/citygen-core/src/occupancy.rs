//! Occupancy grid and building placement.
//!
//! Placement is split into a pure check ([`OccupancyGrid::check`]) and an
//! explicit commit ([`OccupancyGrid::commit`]). [`OccupancyGrid::try_place`]
//! runs both and never mutates the grid on rejection.
//!
//! ```text
//! existing     new 2x2 at (0, 2)      existing     new 2x2 at (1, 1)
//! 0 0 0 0 0    0 0 1 1 0              0 0 0 0 0    0 0 0 0 0
//! 0 1 0 0 0    0 0 1 1 0              0 1 0 0 0    0 1 1 0 0
//! 0 0 0 1 0    0 0 0 0 0              0 0 0 1 0    0 1 1 0 0
//! 0 1 0 1 0    0 0 0 0 0              0 1 0 1 0    0 0 0 0 0
//! fits                                collides at (1, 1)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::block::{CellPos, Footprint};
use crate::config::CityConfig;
use crate::error::{GridShapeError, PlacementRejection};

/// The rectangle buildings must stay inside: `inset..ring_size` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingBounds {
    pub inset: u32,
    pub ring_size: u32,
}

impl RingBounds {
    pub fn new(block_size: u32, inset: u32) -> Self {
        Self {
            inset,
            ring_size: block_size.saturating_sub(inset),
        }
    }

    pub fn from_config(config: &CityConfig) -> Self {
        Self::new(config.block_size, config.ring_inset)
    }
}

/// Square boolean grid marking which cells of a block are built on.
///
/// Deserialization rejects a cell list that is not `size * size` long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRecord")]
pub struct OccupancyGrid {
    size: u32,
    cells: Vec<bool>,
}

#[derive(Deserialize)]
struct GridRecord {
    size: u32,
    cells: Vec<bool>,
}

impl TryFrom<GridRecord> for OccupancyGrid {
    type Error = GridShapeError;

    fn try_from(record: GridRecord) -> Result<Self, Self::Error> {
        let side = record.size as usize;
        let expected = side.checked_mul(side).ok_or(GridShapeError {
            size: record.size,
            expected: usize::MAX,
            found: record.cells.len(),
        })?;
        if record.cells.len() != expected {
            return Err(GridShapeError {
                size: record.size,
                expected,
                found: record.cells.len(),
            });
        }
        Ok(Self {
            size: record.size,
            cells: record.cells,
        })
    }
}

impl OccupancyGrid {
    /// An empty `size x size` grid.
    pub fn new(size: u32) -> Self {
        let n = size as usize;
        Self {
            size,
            cells: vec![false; n * n],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether a cell is covered. Cells outside the grid read as free.
    pub fn is_occupied(&self, pos: CellPos) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    /// Number of covered cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Check whether `footprint` can go at `origin` without touching the grid.
    ///
    /// Grid bounds are checked first, then ring bounds, then collisions.
    pub fn check(
        &self,
        footprint: Footprint,
        origin: CellPos,
        ring: RingBounds,
    ) -> Result<(), PlacementRejection> {
        let row_end = u64::from(origin.row) + u64::from(footprint.width);
        let col_end = u64::from(origin.col) + u64::from(footprint.height);

        if row_end > u64::from(self.size) || col_end > u64::from(self.size) {
            return Err(PlacementRejection::OutOfGrid);
        }

        let ring_end = u64::from(ring.ring_size);
        if origin.row < ring.inset
            || origin.col < ring.inset
            || row_end > ring_end
            || col_end > ring_end
        {
            return Err(PlacementRejection::OutsideRing);
        }

        if footprint.cells(origin).any(|cell| self.is_occupied(cell)) {
            return Err(PlacementRejection::Collision);
        }

        Ok(())
    }

    /// OR the footprint into the grid. Callers are expected to have run
    /// [`check`](Self::check); cells past the grid edge are ignored.
    pub fn commit(&mut self, footprint: Footprint, origin: CellPos) {
        for cell in footprint.cells(origin) {
            if let Some(i) = self.index(cell) {
                self.cells[i] = true;
            }
        }
    }

    /// Check, then commit on success.
    pub fn try_place(
        &mut self,
        footprint: Footprint,
        origin: CellPos,
        ring: RingBounds,
    ) -> Result<(), PlacementRejection> {
        self.check(footprint, origin, ring)?;
        self.commit(footprint, origin);
        Ok(())
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.row < self.size && pos.col < self.size {
            Some(pos.row as usize * self.size as usize + pos.col as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<&str> = row.iter().map(|&c| if c { "1" } else { "0" }).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
