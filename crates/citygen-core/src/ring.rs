//! Ring topology: the walkable band of cells, inset from the block edge,
//! where buildings are seeded.
//!
//! With `ring_size = block_size - inset`, a cell `(row, col)` is on the ring
//! when it sits on one of the lines `row = inset`, `row = ring_size - 1`,
//! `col = inset` or `col = ring_size - 1`, and the other coordinate is
//! strictly between `0` and `ring_size`. Cells come out row-major.
//!
//! Side tags follow a fixed convention that addressing depends on:
//!
//! | line                | side |
//! |---------------------|------|
//! | `col = ring_size-1` | N    |
//! | `col = inset`       | S    |
//! | `row = ring_size-1` | E    |
//! | `row = inset`       | W    |
//!
//! Checked top to bottom, so cells on two lines take the first match.

use serde::{Deserialize, Serialize};

use crate::block::{CellPos, Side};

/// One ring position with the side of the block it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingCell {
    pub side: Side,
    pub pos: CellPos,
}

/// Every ring cell of a block, in traversal order.
pub fn ring_cells(block_size: u32, inset: u32) -> Vec<RingCell> {
    remaining_ring_cells(block_size, inset, 0)
}

/// Ring cells in traversal order, skipping the first `offset` entries.
///
/// Lets a traversal resume part-way around the ring.
pub fn remaining_ring_cells(block_size: u32, inset: u32, offset: usize) -> Vec<RingCell> {
    let Some(ring_size) = block_size.checked_sub(inset) else {
        return Vec::new();
    };
    // ring_size - 1 only exists when ring_size > 0.
    let last = ring_size.checked_sub(1);
    let interior = |v: u32| v != 0 && v != ring_size;

    let mut cells = Vec::new();
    for row in 0..=ring_size {
        for col in 0..=ring_size {
            let on_row_line = (row == inset || Some(row) == last) && interior(col);
            let on_col_line = (col == inset || Some(col) == last) && interior(row);
            if !(on_row_line || on_col_line) {
                continue;
            }
            let side = if Some(col) == last {
                Side::N
            } else if col == inset {
                Side::S
            } else if Some(row) == last {
                Side::E
            } else {
                Side::W
            };
            cells.push(RingCell {
                side,
                pos: CellPos::new(row, col),
            });
        }
    }
    cells.into_iter().skip(offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(cells: &[RingCell], side: Side) -> usize {
        cells.iter().filter(|c| c.side == side).count()
    }

    #[test]
    fn default_block_has_28_cells() {
        let cells = ring_cells(10, 1);
        assert_eq!(cells.len(), 28);

        // All on the border of the 8x8 square spanning rows/cols 1..=8.
        for cell in &cells {
            let CellPos { row, col } = cell.pos;
            assert!((1..=8).contains(&row) && (1..=8).contains(&col));
            assert!(row == 1 || row == 8 || col == 1 || col == 8);
        }
    }

    #[test]
    fn default_block_side_tags() {
        let cells = ring_cells(10, 1);
        let side_at = |row, col| {
            cells
                .iter()
                .find(|c| c.pos == CellPos::new(row, col))
                .map(|c| c.side)
        };

        assert_eq!(side_at(1, 8), Some(Side::N));
        assert_eq!(side_at(8, 8), Some(Side::N));
        assert_eq!(side_at(1, 1), Some(Side::S));
        assert_eq!(side_at(8, 1), Some(Side::S));
        assert_eq!(side_at(8, 4), Some(Side::E));
        assert_eq!(side_at(1, 4), Some(Side::W));
        assert_eq!(side_at(4, 4), None);

        // Column lines keep their corners, row lines get the remainder.
        assert_eq!(count(&cells, Side::N), 8);
        assert_eq!(count(&cells, Side::S), 8);
        assert_eq!(count(&cells, Side::E), 6);
        assert_eq!(count(&cells, Side::W), 6);
    }

    #[test]
    fn traversal_is_row_major() {
        let cells = ring_cells(10, 1);
        let positions: Vec<_> = cells.iter().map(|c| (c.pos.row, c.pos.col)).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert_eq!(cells[0].pos, CellPos::new(1, 1));
        assert_eq!(cells[27].pos, CellPos::new(8, 8));
    }

    #[test]
    fn offset_skips_leading_entries() {
        let all = ring_cells(10, 1);
        let rest = remaining_ring_cells(10, 1, 5);
        assert_eq!(rest.len(), 23);
        assert_eq!(rest[..], all[5..]);
        assert!(remaining_ring_cells(10, 1, 100).is_empty());
    }

    #[test]
    fn larger_inset_shrinks_ring() {
        // Lines 2 and 7 with partner coordinates 1..=7, so each line keeps
        // one cell in the margin at index 1.
        let cells = ring_cells(10, 2);
        assert_eq!(cells.len(), 24);

        let outside: Vec<_> = cells
            .iter()
            .filter(|c| c.pos.row < 2 || c.pos.col < 2)
            .map(|c| (c.pos.row, c.pos.col, c.side))
            .collect();
        assert_eq!(
            outside,
            vec![
                (1, 2, Side::S),
                (1, 7, Side::N),
                (2, 1, Side::W),
                (7, 1, Side::E),
            ]
        );
        assert!(cells.iter().all(|c| c.pos.row <= 7 && c.pos.col <= 7));
    }

    #[test]
    fn zero_inset_drops_outer_edge() {
        // Lines row/col 0 have no interior partner cells at 0, so only the
        // far lines and the in-between cells of the near lines survive.
        let cells = ring_cells(4, 0);
        assert!(cells.iter().all(|c| c.pos.row < 4 && c.pos.col < 4));
        assert!(!cells.iter().any(|c| c.pos == CellPos::new(0, 0)));
    }

    #[test]
    fn degenerate_sizes_yield_nothing() {
        assert!(ring_cells(0, 0).is_empty());
        assert!(ring_cells(2, 3).is_empty());
    }
}
