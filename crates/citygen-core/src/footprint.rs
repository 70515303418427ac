//! Building footprint sampling.
//!
//! Residential blocks lean towards small buildings; commercial blocks lean
//! towards long frontages. The mapping from two uniform draws to a footprint
//! is pure ([`footprint_from_uniforms`]) so it can be tested with exact
//! inputs; [`sample_footprint`] only supplies the draws.

use rand::Rng;
use std::f64::consts::FRAC_PI_2;

use crate::block::{BlockType, Footprint};
use crate::rng::unit;

/// Largest residential dimension before the `+ 1` offset.
pub const RESIDENTIAL_MAX_SIZE: f64 = 5.0;
/// Largest commercial dimension before the `+ 1` offset.
pub const COMMERCIAL_MAX_SIZE: f64 = 9.0;
/// Commercial width floor and depth ceiling.
pub const COMMERCIAL_CLAMP: u32 = 4;

/// Draw a footprint for a building on a block of the given type.
///
/// Consumes exactly two uniforms from `rng`: width first, then height.
pub fn sample_footprint<R: Rng + ?Sized>(block_type: BlockType, rng: &mut R) -> Footprint {
    let ux = unit(rng);
    let uy = unit(rng);
    footprint_from_uniforms(block_type, ux, uy)
}

/// Map two uniforms in `[0, 1)` to a footprint.
pub fn footprint_from_uniforms(block_type: BlockType, ux: f64, uy: f64) -> Footprint {
    match block_type {
        BlockType::Residential => {
            Footprint::new(residential_dimension(ux), residential_dimension(uy))
        }
        BlockType::Commercial => {
            // Width is floored at 4 and depth capped at 4.
            let width = commercial_dimension(ux).max(COMMERCIAL_CLAMP);
            let height = commercial_dimension(uy).min(COMMERCIAL_CLAMP);
            Footprint::new(width, height)
        }
    }
}

/// CDF of Gamma(shape = 1, scale = 1). Shape 1 reduces to the exponential
/// distribution, so the regularized incomplete gamma is `1 - e^-x`.
pub fn unit_gamma_cdf(x: f64) -> f64 {
    if x <= 0.0 { 0.0 } else { 1.0 - (-x).exp() }
}

/// Fold `sin(u * pi/2)^2` around 0.5 into `[0, 1]`: values near 0 and 1 map
/// high, values near 0.5 map low.
pub fn tent(u: f64) -> f64 {
    let beta = (u * FRAC_PI_2).sin().powi(2);
    if beta > 0.5 {
        2.0 * beta - 1.0
    } else {
        2.0 * (1.0 - beta) - 1.0
    }
}

fn residential_dimension(u: f64) -> u32 {
    (unit_gamma_cdf(u) * RESIDENTIAL_MAX_SIZE).floor() as u32 + 1
}

fn commercial_dimension(u: f64) -> u32 {
    (tent(u) * COMMERCIAL_MAX_SIZE).floor() as u32 + 1
}
