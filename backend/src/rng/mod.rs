//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. CRITICAL: All randomness in the simulator MUST go through
//! this module.
//!
//! Each `SimulationEngine` owns its own `RngManager` instance, which is
//! passed by `&mut` reference into the propagation and mutation subsystems.
//! There is no process-wide generator, so independent runs can be
//! parallelized without sharing entropy state.

mod xorshift;

pub use xorshift::{RngManager, SeedSpec};
