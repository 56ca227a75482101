//! Particle entity and its closed-form motion

use glam::I64Vec3;
use serde::{Deserialize, Serialize};

use crate::{manhattan, triangular};

/// Fixed 3D integer vector used for position, velocity and acceleration
pub type Vec3 = I64Vec3;

/// Initial state of one particle, in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialConditions {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
}

impl InitialConditions {
    pub fn new(position: Vec3, velocity: Vec3, acceleration: Vec3) -> Self {
        Self {
            position,
            velocity,
            acceleration,
        }
    }
}

/// A particle moving under constant acceleration
///
/// State only changes through [`Particle::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    id: u32,
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
}

impl Particle {
    pub fn new(id: u32, initial: InitialConditions) -> Self {
        Self {
            id,
            position: initial.position,
            velocity: initial.velocity,
            acceleration: initial.acceleration,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Advance by `t` unit steps in one jump
    ///
    /// Each unit step is `velocity += acceleration; position += velocity`, so
    /// after `t` steps position has picked up `t` copies of the starting
    /// velocity plus `1 + 2 + ... + t` copies of the acceleration.
    pub fn update(&mut self, t: u32) {
        let t = i64::from(t);
        self.position += self.velocity * t + self.acceleration * triangular(t);
        self.velocity += self.acceleration * t;
    }

    /// Manhattan distance of the position from the origin
    #[inline]
    pub fn manhattan_distance(&self) -> i64 {
        manhattan(self.position)
    }
}

impl std::fmt::Display for Particle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
