//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! CRITICAL: All randomness in the simulator MUST go through this module.

mod noise;
mod xorshift;

pub use noise::{FixedNoise, NoiseSource};
pub use xorshift::RngManager;
