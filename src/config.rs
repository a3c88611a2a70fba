// src/config.rs

use anyhow::Context;
use dungeon::MIN_LEVEL_LENGTH;
use error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Tunables for world creation and the per-tick spawner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of levels in the dungeon
    pub levels: usize,
    /// Side length of every level
    pub level_length: i32,
    /// Live entities per level (hero included) above which nothing spawns
    pub max_entities: usize,
    pub spawn_chance: f64,
    /// Added to the spawn chance per level of depth
    pub spawn_chance_per_depth: f64,
    pub max_spawn_chance: f64,
    /// Consecutive failed extensions that end level generation
    pub reject_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: 10,
            level_length: 30,
            max_entities: 6,
            spawn_chance: 0.10,
            spawn_chance_per_depth: 0.01,
            max_spawn_chance: 0.20,
            reject_limit: dungeon::generator::DEFAULT_REJECT_LIMIT,
        }
    }
}

impl GameConfig {
    /// Parses and validates a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse game config")?;
        config.validate().context("Invalid game config")?;
        Ok(config)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize game config")
    }

    pub fn validate(&self) -> Result<()> {
        if self.levels == 0 {
            return Err(GameError::InvalidConfig("levels must be at least 1".into()));
        }
        if self.level_length < MIN_LEVEL_LENGTH {
            return Err(GameError::InvalidLevelLength {
                length: self.level_length,
                min: MIN_LEVEL_LENGTH,
            });
        }
        for (name, p) in [
            ("spawn_chance", self.spawn_chance),
            ("spawn_chance_per_depth", self.spawn_chance_per_depth),
            ("max_spawn_chance", self.max_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must lie in [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }

    /// Per-tick spawn probability on a level `depth` levels down.
    pub fn spawn_chance_at(&self, depth: usize) -> f64 {
        (self.spawn_chance + self.spawn_chance_per_depth * depth as f64)
            .min(self.max_spawn_chance)
            .clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.levels, 10);
        assert_eq!(config.max_entities, 6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "levels": 3, "level_length": 20 }"#).unwrap();
        assert_eq!(config.levels, 3);
        assert_eq!(config.level_length, 20);
        assert_eq!(config.reject_limit, 20);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(GameConfig::from_json(r#"{ "level_length": 5 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "levels": 0 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "spawn_chance": 1.5 }"#).is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_spawn_chance_grows_with_depth_and_caps() {
        let config = GameConfig::default();
        assert!((config.spawn_chance_at(0) - 0.10).abs() < 1e-9);
        assert!((config.spawn_chance_at(5) - 0.15).abs() < 1e-9);
        assert!((config.spawn_chance_at(40) - 0.20).abs() < 1e-9);
    }
}
