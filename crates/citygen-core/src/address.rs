//! Street naming and building numbering.
//!
//! Streets run along grid lines between blocks. Lines crossing the x axis
//! carry even ordinals (`E 2nd`, `E 4th`, ... east of the origin line,
//! `W 4th`, `W 6th`, ... west of it); lines crossing the y axis carry odd
//! ordinals (`N 1st`, `N 3rd`, ... and `S 3rd`, `S 5th`, ...). A block at
//! `(bx, by)` fronts line `bx` on its W side, `bx + 1` on its E side, `by` on
//! its S side and `by + 1` on its N side, so neighbouring blocks agree on the
//! name of the street between them.
//!
//! House numbers start from a per-side base (`100·|bx| + 1` for E,
//! `100·|bx| + 11` for W, `100·|by| + 1` for S, `100·|by| + 11` for N) and
//! count up in building-list order.

use crate::block::{Block, BlockCoord, Side};

/// English ordinal for `n`: `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Name of the street on grid line `line` crossing the x axis.
pub fn x_street_name(line: i32) -> String {
    let prefix = if line >= 0 { "E" } else { "W" };
    format!("{prefix} {}", ordinal(2 * (line.unsigned_abs() + 1)))
}

/// Name of the street on grid line `line` crossing the y axis.
pub fn y_street_name(line: i32) -> String {
    let prefix = if line >= 0 { "N" } else { "S" };
    format!("{prefix} {}", ordinal(2 * line.unsigned_abs() + 1))
}

/// The street a block fronts on the given side.
pub fn street_name(coord: BlockCoord, side: Side) -> String {
    match side {
        Side::W => x_street_name(coord.x),
        Side::E => x_street_name(coord.x + 1),
        Side::S => y_street_name(coord.y),
        Side::N => y_street_name(coord.y + 1),
    }
}

/// First house number used on the given side of a block.
pub fn base_number(coord: BlockCoord, side: Side) -> u32 {
    let (axis, offset) = match side {
        Side::E => (coord.x, 1),
        Side::W => (coord.x, 11),
        Side::S => (coord.y, 1),
        Side::N => (coord.y, 11),
    };
    100 * axis.unsigned_abs() + offset
}

/// Street names and running house numbers for one block.
#[derive(Debug, Clone)]
pub struct StreetNumbering {
    coord: BlockCoord,
    names: [String; 4],
    next: [u32; 4],
}

impl StreetNumbering {
    pub fn new(coord: BlockCoord) -> Self {
        let sides = Side::all();
        Self {
            coord,
            names: sides.map(|side| street_name(coord, side)),
            next: sides.map(|side| base_number(coord, side)),
        }
    }

    pub fn coord(&self) -> BlockCoord {
        self.coord
    }

    pub fn street(&self, side: Side) -> &str {
        &self.names[side_index(side)]
    }

    /// Allocate the next address on `side`.
    pub fn next_address(&mut self, side: Side) -> String {
        let i = side_index(side);
        let number = self.next[i];
        self.next[i] += 1;
        format!("{number} {}", self.names[i])
    }
}

/// Assign addresses to every building of a block, in building-list order.
pub fn assign_addresses(block: &mut Block) {
    let mut numbering = StreetNumbering::new(block.coord());
    for building in &mut block.buildings {
        building.address = numbering.next_address(building.side);
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::N => 0,
        Side::E => 1,
        Side::S => 2,
        Side::W => 3,
    }
}
