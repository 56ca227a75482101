//! Deterministic particle swarm
//!
//! This module must stay pure and deterministic:
//! - Integer arithmetic only
//! - Seeded RNG only
//! - Stable iteration order (by particle ID)
//! - No I/O beyond log output

pub mod cloud;
pub mod particle;
pub mod system;

pub use cloud::generate_cloud;
pub use particle::{InitialConditions, Particle, Vec3};
pub use system::{CollisionGroup, ParticleSystem};
