//! Combat configuration.
//!
//! Every section is optional in TOML; omitted fields keep the defaults from
//! `constants`. Values are checked once by [`CombatConfig::validate`] so the
//! simulation itself never has to reject input.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::types::ItemId;

/// Complete configuration surface of the combat core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub health: HealthConfig,
    pub death: DeathConfig,
    pub loot: LootConfig,
    pub scoring: ScoringConfig,
}

/// Per-combatant health settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Starting and ceiling health. Must be positive.
    pub max_health: f32,
    /// Keep the health indicator hidden while health is full.
    pub hide_indicator_when_full: bool,
    /// Seconds after the last hit before a full indicator hides again.
    pub indicator_hide_delay_secs: f64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            hide_indicator_when_full: true,
            indicator_hide_delay_secs: DEFAULT_INDICATOR_HIDE_DELAY_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathConfig {
    /// Seconds between death and removal from the world.
    pub destroy_delay_secs: f64,
    /// Score awarded when the death transition fires.
    pub kill_bonus: i32,
}

impl Default for DeathConfig {
    fn default() -> Self {
        Self {
            destroy_delay_secs: DEFAULT_DESTROY_DELAY_SECS,
            kill_bonus: DEFAULT_KILL_BONUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LootConfig {
    /// Probability in [0, 1] that a dying combatant drops anything.
    pub drop_chance: f64,
    /// Candidate items; one is picked uniformly when a drop happens.
    pub drop_table: Vec<ItemId>,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self {
            drop_chance: DEFAULT_DROP_CHANCE,
            drop_table: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub damage_score_multiplier: f32,
    pub damage_penalty_multiplier: f32,
    /// Floor for the current level score. Must not exceed zero, since level
    /// transitions reset the score to zero.
    pub minimum_score: i32,
    /// Size of the per-level score history.
    pub total_levels: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            damage_score_multiplier: DEFAULT_DAMAGE_SCORE_MULTIPLIER,
            damage_penalty_multiplier: DEFAULT_DAMAGE_PENALTY_MULTIPLIER,
            minimum_score: DEFAULT_MINIMUM_SCORE,
            total_levels: DEFAULT_TOTAL_LEVELS,
        }
    }
}

impl CombatConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CombatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<()> {
        self.health.validate()?;
        self.death.validate()?;
        self.loot.validate()?;
        self.scoring.validate()
    }
}

impl HealthConfig {
    pub fn validate(&self) -> Result<()> {
        validate_max_health(self.max_health)?;
        if !self.indicator_hide_delay_secs.is_finite() || self.indicator_hide_delay_secs < 0.0 {
            return Err(ConfigError::invalid(
                "health.indicator_hide_delay_secs",
                format!("expected a non-negative number, got {}", self.indicator_hide_delay_secs),
            ));
        }
        Ok(())
    }
}

impl DeathConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.destroy_delay_secs.is_finite() || self.destroy_delay_secs < 0.0 {
            return Err(ConfigError::invalid(
                "death.destroy_delay_secs",
                format!("expected a non-negative number, got {}", self.destroy_delay_secs),
            ));
        }
        Ok(())
    }
}

impl LootConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.drop_chance) {
            return Err(ConfigError::invalid(
                "loot.drop_chance",
                format!("expected a probability in [0, 1], got {}", self.drop_chance),
            ));
        }
        Ok(())
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("scoring.damage_score_multiplier", self.damage_score_multiplier),
            ("scoring.damage_penalty_multiplier", self.damage_penalty_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("expected a non-negative multiplier, got {value}"),
                ));
            }
        }
        if self.minimum_score > 0 {
            return Err(ConfigError::invalid(
                "scoring.minimum_score",
                format!("must be <= 0, got {}", self.minimum_score),
            ));
        }
        if self.total_levels == 0 {
            return Err(ConfigError::invalid(
                "scoring.total_levels",
                "at least one level is required",
            ));
        }
        Ok(())
    }
}

/// Shared check for anything that sets a health ceiling.
pub fn validate_max_health(max_health: f32) -> Result<()> {
    if !max_health.is_finite() || max_health <= 0.0 {
        return Err(ConfigError::invalid(
            "health.max_health",
            format!("expected a positive number, got {max_health}"),
        ));
    }
    Ok(())
}
