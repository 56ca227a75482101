//! Swarm Sim - integer particle swarm and generator judge
//!
//! Core modules:
//! - `sim`: Deterministic particle swarm (closed-form motion, collisions, reset)
//! - `input`: Decoding of particle and generator seed lines
//! - `judge`: Linear-congruential generator pair and low-bit match counting
//! - `report`: End-to-end runs of both solvers
//! - `settings`: Run configuration with JSON overrides

pub mod error;
pub mod input;
pub mod judge;
pub mod report;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use report::{JudgeReport, SwarmReport, run_judge, run_swarm};
pub use settings::Settings;
pub use sim::{InitialConditions, Particle, ParticleSystem, Vec3};

/// Run configuration constants
pub mod consts {
    /// Non-collision steps before asking for the particle closest to origin
    pub const CLOSEST_STEPS: u32 = 1_000_000;
    /// Collision-aware unit steps before counting survivors
    pub const COLLISION_STEPS: u32 = 1_000;

    /// Generator A multiplier
    pub const FACTOR_A: u64 = 16807;
    /// Generator B multiplier
    pub const FACTOR_B: u64 = 48271;
    /// Shared generator modulus (2^31 - 1)
    pub const DIVISOR: u64 = 2_147_483_647;
    /// Number of low-order bits compared by the judge
    pub const JUDGE_BITS: u32 = 16;
    /// Pairs compared by the judge
    pub const JUDGE_PAIRS: u64 = 40_000_000;
}

/// Sum of absolute component values
#[inline]
pub fn manhattan(v: Vec3) -> i64 {
    v.abs().element_sum()
}

/// Triangular number t(t+1)/2, the number of acceleration applications
/// accumulated into position over `t` unit steps
///
/// The even factor is halved before multiplying so every `u32` step count
/// stays within `i64`.
#[inline]
pub fn triangular(t: i64) -> i64 {
    if t % 2 == 0 {
        (t / 2) * (t + 1)
    } else {
        t * ((t + 1) / 2)
    }
}
