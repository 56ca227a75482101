//! Seeded random swarms for demo runs and tests

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::particle::{InitialConditions, Vec3};

/// Acceleration components are drawn from [-MAX_ACCEL, MAX_ACCEL]
pub const MAX_ACCEL: i64 = 3;

/// Generate `count` particles from `seed`
///
/// Positions fall in [-spread, spread], velocities in [-spread/10, spread/10].
/// The same seed always yields the same cloud.
pub fn generate_cloud(seed: u64, count: usize, spread: i64) -> Vec<InitialConditions> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let spread = spread.saturating_abs();
    let speed = spread / 10;

    let mut random_vec = |limit: i64| {
        Vec3::new(
            rng.random_range(-limit..=limit),
            rng.random_range(-limit..=limit),
            rng.random_range(-limit..=limit),
        )
    };

    let cloud: Vec<InitialConditions> = (0..count)
        .map(|_| {
            let position = random_vec(spread);
            let velocity = random_vec(speed);
            let acceleration = random_vec(MAX_ACCEL);
            InitialConditions::new(position, velocity, acceleration)
        })
        .collect();

    log::info!("Generated cloud of {} particles (seed {}, spread {})", count, seed, spread);
    cloud
}
