//! Citygen Core -- procedural generation of block-based city layouts.
//!
//! A city is a set of square blocks grown outward from an origin block,
//! each populated with non-overlapping rectangular buildings along an inset
//! ring and given street addresses derived from its coordinates.
//!
//! # Two-Phase Pipeline
//!
//! Each call to [`city::CityGenerator::generate`] runs:
//!
//! 1. **Graph** -- Expand 8-connected neighbours from the origin with
//!    distance-decaying probability, deciding each expansion's block type.
//! 2. **Fill** -- For every block in claim order, walk the ring, sample one
//!    footprint per ring cell, place it if it fits, then assign addresses.
//!
//! All randomness comes from one caller-supplied `rand::Rng`, so a seeded
//! run is fully reproducible:
//!
//! ```rust
//! use citygen_core::city::CityGenerator;
//! use citygen_core::config::CityConfig;
//!
//! let generator = CityGenerator::new(CityConfig::default()).unwrap();
//! let city = generator.generate_seeded(42);
//! assert_eq!(city, generator.generate_seeded(42));
//! ```
//!
//! # Key Types
//!
//! - [`city::City`] -- Read-only result: coordinate-keyed blocks in claim order.
//! - [`block::Block`] / [`block::Building`] -- The data a renderer consumes.
//! - [`config::CityConfig`] -- Tunables, validated before generation.
//! - [`occupancy::OccupancyGrid`] -- Per-block collision grid with a pure
//!   fit check and an explicit commit.
//! - [`graph::GenerationContext`] -- Worklist-based block expansion.

pub mod address;
pub mod block;
pub mod city;
pub mod config;
pub mod error;
pub mod fill;
pub mod footprint;
pub mod graph;
pub mod occupancy;
pub mod ring;
pub mod rng;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
