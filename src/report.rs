//! End-to-end runs of both solvers and their printable results

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::judge::{Generator, count_matches};
use crate::settings::{JudgeSettings, Settings};
use crate::sim::{InitialConditions, ParticleSystem};

/// Results of the particle swarm run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwarmReport {
    /// Id closest to origin after the long non-collision run
    pub closest: Option<u32>,
    /// Particles left after the collision-aware run
    pub survivors: usize,
}

impl SwarmReport {
    pub fn lines(&self) -> [String; 2] {
        let closest = match self.closest {
            Some(id) => id.to_string(),
            None => "none".to_string(),
        };
        [
            format!("Part 1: {}", closest),
            format!("Part 2: {}", self.survivors),
        ]
    }
}

/// Result of the generator judge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeReport {
    pub matches: u64,
}

impl JudgeReport {
    pub fn lines(&self) -> [String; 1] {
        [format!("Part 1: {}", self.matches)]
    }
}

/// Run both swarm queries on one system, resetting in between
pub fn run_swarm(conditions: Vec<InitialConditions>, settings: &Settings) -> SwarmReport {
    let mut system = ParticleSystem::new(conditions);
    log::info!("Simulating {} particles", system.len());

    system.update(settings.closest_steps, false);
    let closest = system.closest_to_origin().map(|p| p.id());
    match closest {
        Some(id) => log::info!("After {} steps particle {} is closest", system.elapsed(), id),
        None => log::warn!("No particle found closest to origin (empty swarm)"),
    }

    system.reset();
    system.update(settings.collision_steps, true);
    let survivors = system.survivor_count();
    log::info!("{} particles survive {} collision steps", survivors, system.elapsed());

    SwarmReport { closest, survivors }
}

/// Run the generator judge from the two start values
pub fn run_judge(seeds: (u64, u64), settings: &JudgeSettings) -> Result<JudgeReport> {
    settings.validate()?;
    let mut a = Generator::new(seeds.0, settings.factor_a, settings.divisor);
    let mut b = Generator::new(seeds.1, settings.factor_b, settings.divisor);
    log::info!("Judging {} pairs from seeds {} and {}", settings.pairs, seeds.0, seeds.1);
    let matches = count_matches(&mut a, &mut b, settings.pairs, settings.bits);
    Ok(JudgeReport { matches })
}
