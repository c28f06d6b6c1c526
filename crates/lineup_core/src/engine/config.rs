//! # Simulation Configuration
//!
//! Tuning knobs for the advancement engine and the season loop.
//!
//! ## Usage
//! ```rust
//! use lineup_core::engine::config::SimConfig;
//!
//! let config = SimConfig::default();
//! let aggressive = SimConfig::aggressive();
//! assert!(aggressive.extra_base.base_chance > config.extra_base.base_chance);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::Speed;

/// Games per simulated season.
pub const DEFAULT_GAMES_PER_SEASON: u32 = 143;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub games_per_season: u32,
    pub extra_base: ExtraBaseConfig,
    pub sacrifice: SacrificeConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games_per_season: DEFAULT_GAMES_PER_SEASON,
            extra_base: ExtraBaseConfig::default(),
            sacrifice: SacrificeConfig::default(),
        }
    }
}

/// Chance that a runner takes one more base than the standard advance on a hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraBaseConfig {
    /// Chance for any runner (default: 0.3)
    pub base_chance: f64,
    /// Added when runner speed is strictly above `fast_speed_threshold` (default: 0.3)
    pub fast_runner_bonus: f64,
    pub fast_speed_threshold: Speed,
    /// Added with two outs (default: 0.2)
    pub two_out_bonus: f64,
}

impl Default for ExtraBaseConfig {
    fn default() -> Self {
        Self {
            base_chance: 0.3,
            fast_runner_bonus: 0.3,
            fast_speed_threshold: 5,
            two_out_bonus: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SacrificeConfig {
    /// Probability that runners move up on a sacrifice attempt with fewer than two outs.
    pub success_rate: f64,
}

impl Default for SacrificeConfig {
    fn default() -> Self {
        Self { success_rate: 0.8 }
    }
}

impl SimConfig {
    pub fn standard() -> Self {
        Self::default()
    }

    /// Runners push for the extra base more often.
    pub fn aggressive() -> Self {
        let mut cfg = Self::default();
        cfg.extra_base.base_chance = 0.45;
        cfg.extra_base.fast_runner_bonus = 0.35;
        cfg.extra_base.two_out_bonus = 0.2;
        cfg
    }

    /// Station-to-station baserunning.
    pub fn conservative() -> Self {
        let mut cfg = Self::default();
        cfg.extra_base.base_chance = 0.15;
        cfg.extra_base.fast_runner_bonus = 0.2;
        cfg.extra_base.two_out_bonus = 0.1;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.games_per_season == 0 {
            return Err("games_per_season must be >= 1".to_string());
        }
        let probs = [
            ("extra_base.base_chance", self.extra_base.base_chance),
            ("extra_base.fast_runner_bonus", self.extra_base.fast_runner_bonus),
            ("extra_base.two_out_bonus", self.extra_base.two_out_bonus),
            ("sacrifice.success_rate", self.sacrifice.success_rate),
        ];
        for (name, value) in probs {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be within 0..=1, got {value}"));
            }
        }
        Ok(())
    }
}
