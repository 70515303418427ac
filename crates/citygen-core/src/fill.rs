//! Block filling: walk the ring, try one building per ring cell, then
//! address whatever was placed.

use rand::Rng;

use crate::address::assign_addresses;
use crate::block::{Block, Building};
use crate::footprint::sample_footprint;
use crate::occupancy::RingBounds;
use crate::ring::RingCell;

/// Outcome of filling one block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Ring cells visited (one placement attempt each).
    pub attempted: usize,
    /// Buildings that fit.
    pub placed: usize,
}

/// Populate `block` along `ring`, in ring order.
///
/// Each ring cell gets exactly one freshly sampled footprint; a rejected
/// placement is skipped, never retried. Addresses are assigned once every
/// ring cell has been tried.
pub fn fill_block<R: Rng + ?Sized>(
    block: &mut Block,
    ring: &[RingCell],
    bounds: RingBounds,
    rng: &mut R,
) -> FillReport {
    let mut report = FillReport::default();
    let coord = block.coord();
    let block_type = block.block_type();

    for cell in ring {
        report.attempted += 1;
        let footprint = sample_footprint(block_type, rng);
        if block.occupancy.try_place(footprint, cell.pos, bounds).is_err() {
            continue;
        }
        block.buildings.push(Building {
            footprint,
            origin: cell.pos,
            side: cell.side,
            address: String::new(),
            block: coord,
        });
        report.placed += 1;
    }

    assign_addresses(block);
    log::trace!(
        "filled {block_type} block {coord}: {}/{} ring cells built",
        report.placed,
        report.attempted
    );
    report
}
