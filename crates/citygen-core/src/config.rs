//! Generator configuration and eager validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted `block_size`. Each block owns a `block_size²` grid.
pub const MAX_BLOCK_SIZE: u32 = 256;

/// Traversal order used while expanding the block graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionOrder {
    /// Each admitted neighbour is fully expanded before its next sibling.
    #[default]
    DepthFirst,
    /// Admitted neighbours are claimed immediately and expanded in FIFO order.
    /// Gives a canonical shape that does not depend on branch ordering.
    BreadthFirst,
}

/// Tunable inputs for city generation.
///
/// Missing fields fall back to [`CityConfig::default`] when deserialized, so
/// a config file only has to mention what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityConfig {
    /// Side length of a block in grid cells.
    pub block_size: u32,
    /// Margin between the block edge and the building ring.
    pub ring_inset: u32,
    /// Scales the chance of admitting a neighbour. Decays with distance.
    pub sensitivity_to_distance: f64,
    /// Scales the chance of a commercial expansion. Decays with distance.
    pub sensitivity_to_commercial_origin: f64,
    /// Hard cap on the number of blocks in a city.
    pub max_blocks: usize,
    /// Hard cap on expansion depth (origin is depth 1).
    pub max_depth: usize,
    pub expansion_order: ExpansionOrder,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            block_size: 10,
            ring_inset: 1,
            sensitivity_to_distance: 1.0,
            sensitivity_to_commercial_origin: 0.9,
            max_blocks: 10_000,
            max_depth: 4_096,
            expansion_order: ExpansionOrder::DepthFirst,
        }
    }
}

impl CityConfig {
    /// Exclusive outer bound of the ring: `block_size - ring_inset`.
    pub fn ring_size(&self) -> u32 {
        self.block_size.saturating_sub(self.ring_inset)
    }

    /// Check every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::BlockSizeTooLarge {
                block_size: self.block_size,
                max: MAX_BLOCK_SIZE,
            });
        }
        // ring_inset >= block_size / 2, kept in integers.
        if u64::from(self.ring_inset) * 2 >= u64::from(self.block_size) {
            return Err(ConfigError::InsetTooLarge {
                block_size: self.block_size,
                ring_inset: self.ring_inset,
            });
        }
        check_sensitivity("sensitivity_to_distance", self.sensitivity_to_distance)?;
        check_sensitivity(
            "sensitivity_to_commercial_origin",
            self.sensitivity_to_commercial_origin,
        )?;
        if self.max_blocks == 0 {
            return Err(ConfigError::ZeroLimit { name: "max_blocks" });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroLimit { name: "max_depth" });
        }
        Ok(())
    }
}

fn check_sensitivity(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSensitivity { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = CityConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_size, 10);
        assert_eq!(config.ring_inset, 1);
        assert_eq!(config.ring_size(), 9);
    }

    #[test]
    fn zero_block_size_rejected() {
        let config = CityConfig {
            block_size: 0,
            ring_inset: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBlockSize));
    }

    #[test]
    fn oversized_block_rejected() {
        let config = CityConfig {
            block_size: 100_000,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BlockSizeTooLarge {
                block_size: 100_000,
                max: MAX_BLOCK_SIZE
            })
        );

        let largest = CityConfig {
            block_size: MAX_BLOCK_SIZE,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn inset_at_half_block_rejected() {
        let config = CityConfig {
            ring_inset: 5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InsetTooLarge {
                block_size: 10,
                ring_inset: 5
            })
        ));
    }

    #[test]
    fn inset_just_below_half_accepted() {
        let config = CityConfig {
            ring_inset: 4,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let odd = CityConfig {
            block_size: 9,
            ring_inset: 4,
            ..Default::default()
        };
        assert!(odd.validate().is_ok());
    }

    #[test]
    fn bad_sensitivities_rejected() {
        for value in [-0.5, f64::NAN, f64::INFINITY] {
            let config = CityConfig {
                sensitivity_to_distance: value,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSensitivity {
                    name: "sensitivity_to_distance",
                    ..
                })
            ));
        }

        let config = CityConfig {
            sensitivity_to_commercial_origin: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSensitivity {
                name: "sensitivity_to_commercial_origin",
                ..
            })
        ));
    }

    #[test]
    fn zero_sensitivity_is_allowed() {
        let config = CityConfig {
            sensitivity_to_distance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limits_rejected() {
        let config = CityConfig {
            max_blocks: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroLimit { name: "max_blocks" })
        );

        let config = CityConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroLimit { name: "max_depth" })
        );
    }
}
