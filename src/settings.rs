//! Run settings
//!
//! Defaults reproduce the reference runs; a JSON file can override any field.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Generator judge parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeSettings {
    pub factor_a: u64,
    pub factor_b: u64,
    pub divisor: u64,
    /// Low-order bits compared per pair
    pub bits: u32,
    /// Number of pairs compared
    pub pairs: u64,
}

impl JudgeSettings {
    /// Reject values the generators cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.divisor == 0 {
            return Err(Error::InvalidSetting("judge.divisor must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for JudgeSettings {
    fn default() -> Self {
        Self {
            factor_a: FACTOR_A,
            factor_b: FACTOR_B,
            divisor: DIVISOR,
            bits: JUDGE_BITS,
            pairs: JUDGE_PAIRS,
        }
    }
}

/// Random cloud parameters (used when no input file is given)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudSettings {
    pub seed: u64,
    pub spread: i64,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            seed: 12345,
            spread: 1000,
        }
    }
}

/// Settings for both solvers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Non-collision steps before the closest-to-origin query
    pub closest_steps: u32,
    /// Collision-aware unit steps before counting survivors
    pub collision_steps: u32,

    pub judge: JudgeSettings,
    pub cloud: CloudSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            closest_steps: CLOSEST_STEPS,
            collision_steps: COLLISION_STEPS,
            judge: JudgeSettings::default(),
            cloud: CloudSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.judge.validate()
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
