//! Error types for configuration, grid data, and building placement.

/// Invalid generator configuration. Reported before generation starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A block must be at least one cell wide.
    #[error("block_size must be greater than zero")]
    ZeroBlockSize,

    /// The block grid would be larger than generation allows.
    #[error("block_size {block_size} exceeds the maximum of {max}")]
    BlockSizeTooLarge { block_size: u32, max: u32 },

    /// The inset leaves no room for a ring (`ring_inset >= block_size / 2`).
    #[error("ring_inset {ring_inset} leaves no ring inside a block of size {block_size}")]
    InsetTooLarge { block_size: u32, ring_inset: u32 },

    /// A sensitivity parameter is negative, NaN, or infinite.
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidSensitivity { name: &'static str, value: f64 },

    /// A generation cap was set to zero.
    #[error("{name} must be greater than zero")]
    ZeroLimit { name: &'static str },
}

/// A deserialized occupancy grid whose cell list does not match its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("occupancy grid of size {size} needs {expected} cells, found {found}")]
pub struct GridShapeError {
    pub size: u32,
    pub expected: usize,
    pub found: usize,
}

/// Why a candidate footprint could not be placed.
///
/// Rejections are an expected outcome of block filling, not a failure:
/// the filler simply skips the ring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementRejection {
    /// The footprint extends past the edge of the block grid.
    #[error("footprint extends beyond the block grid")]
    OutOfGrid,

    /// The footprint leaves the inset ring.
    #[error("footprint extends beyond the inset ring")]
    OutsideRing,

    /// At least one cell is already covered by another building.
    #[error("footprint overlaps an existing building")]
    Collision,
}
