//! Particle system: stepping, collision resolution and reset

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::particle::{InitialConditions, Particle, Vec3};

/// Particles sharing one exact position at the same instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionGroup {
    pub position: Vec3,
    /// Member ids, ascending
    pub ids: Vec<u32>,
}

/// A swarm of independently moving particles plus the state it started from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSystem {
    /// Live particles (sorted by id for determinism)
    particles: Vec<Particle>,
    /// Construction-time copy used by `reset`
    initial: Vec<Particle>,
    /// Total time units advanced since construction or last reset
    elapsed: u64,
}

impl ParticleSystem {
    /// Build a system from initial conditions, assigning ids 0.. in input order
    pub fn new<I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = InitialConditions>,
    {
        let particles: Vec<Particle> = conditions
            .into_iter()
            .zip(0u32..)
            .map(|(c, id)| Particle::new(id, c))
            .collect();
        let initial = particles.clone();
        Self {
            particles,
            initial,
            elapsed: 0,
        }
    }

    /// Advance the system by `t` time units
    ///
    /// Without collisions every particle takes a single closed-form jump.
    /// With collisions the system moves in unit steps and resolves collisions
    /// after each one; particles that cross between integer times are missed.
    pub fn update(&mut self, t: u32, collisions: bool) {
        if collisions {
            for _ in 0..t {
                self.advance(1);
                self.destroy_colliding();
            }
        } else {
            self.advance(t);
        }
        self.elapsed += u64::from(t);
    }

    fn advance(&mut self, t: u32) {
        for particle in &mut self.particles {
            particle.update(t);
        }
    }

    /// Groups of two or more particles at the same position right now
    pub fn collision_groups(&self) -> Vec<CollisionGroup> {
        let mut by_position: HashMap<[i64; 3], Vec<u32>> = HashMap::new();
        for particle in &self.particles {
            by_position
                .entry(particle.position().to_array())
                .or_default()
                .push(particle.id());
        }

        let mut groups: Vec<CollisionGroup> = by_position
            .into_iter()
            .filter(|(_, ids)| ids.len() >= 2)
            .map(|(position, mut ids)| {
                ids.sort_unstable();
                CollisionGroup {
                    position: Vec3::from(position),
                    ids,
                }
            })
            .collect();
        groups.sort_by_key(|g| g.ids[0]);
        groups
    }

    /// Remove every particle that shares its position with another one
    ///
    /// Grouping sees all positions before anything is removed, so a particle
    /// hit by several others goes down together with all of them. Returns the
    /// number of particles destroyed.
    pub fn destroy_colliding(&mut self) -> usize {
        let groups = self.collision_groups();
        if groups.is_empty() {
            return 0;
        }

        let doomed: HashSet<u32> = groups.iter().flat_map(|g| g.ids.iter().copied()).collect();
        for group in &groups {
            log::debug!(
                "t={}: particles {:?} collided at {}",
                self.elapsed,
                group.ids,
                group.position
            );
        }

        let before = self.particles.len();
        self.particles.retain(|p| !doomed.contains(&p.id()));
        before - self.particles.len()
    }

    /// Restore the construction-time particles and zero the clock
    pub fn reset(&mut self) {
        self.particles = self.initial.clone();
        self.elapsed = 0;
    }

    /// Particle with the smallest Manhattan distance; lowest id wins ties
    pub fn closest_to_origin(&self) -> Option<&Particle> {
        self.particles.iter().min_by_key(|p| p.manhattan_distance())
    }

    pub fn survivor_count(&self) -> usize {
        self.particles.len()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}
