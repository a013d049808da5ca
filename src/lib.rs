//! Solar Orbits - Keplerian planet positions in 2D
//!
//! A library crate solving Kepler's equation and turning classical orbital
//! elements into planar heliocentric positions, plus the Bevy plugins of a
//! small viewer drawing them.

pub mod camera;
pub mod ephemeris;
pub mod render;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;
