//! Engine configuration with documented constants
//!
//! All tunables of the decision engine are collected here. The host runtime
//! supplies its own per-round [`RoundConfig`]; everything else lives in
//! [`EngineConfig`], which can be loaded from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{BotError, Result};

/// How history stores are shared between the bots one controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryScope {
    /// One radar, track and shot history for every bot (bots coordinate
    /// against each other, and conflate each other's state)
    #[default]
    Shared,
    /// Separate histories keyed by bot id
    PerBot,
}

/// Configuration for the decision engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === MAP ===
    /// Map radius S. A position is on-map when `|x| <= S`, `|y| <= S` and
    /// `|x + y| <= S`.
    pub map_radius: i32,

    // === RADAR ===
    /// Two scans in the same round overlap when their centres are closer
    /// than this (strictly less-than).
    pub radar_overlap_radius: u32,

    /// Maximum candidates drawn when looking for a non-overlapping radar
    /// position. When exhausted, the least-overlapping candidate is used.
    pub max_radar_attempts: u32,

    /// Error margin applied around the last known enemy position when
    /// picking a radar target
    pub radar_error_margin: i32,

    // === TRACKING ===
    /// A tracked enemy location older than this many rounds is stale
    pub track_freshness_rounds: u32,

    // === CANNON ===
    /// Error margin applied to every cannon shot
    pub shot_error_margin: i32,

    // === MEMORY ===
    pub memory_scope: MemoryScope,

    // === RULES ===
    /// Rule names in priority order. Must end with `fallback`.
    pub rules: Vec<String>,

    // === COSMETIC ===
    /// Display names offered to the host runtime
    pub bot_names: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            map_radius: 14,
            radar_overlap_radius: 5,
            max_radar_attempts: 64,
            radar_error_margin: 3,
            track_freshness_rounds: 6,
            shot_error_margin: 1,
            memory_scope: MemoryScope::Shared,
            rules: crate::rules::DEFAULT_RULE_ORDER
                .iter()
                .map(|name| name.to_string())
                .collect(),
            bot_names: vec!["Alpha".into(), "Beta".into(), "Gamma".into()],
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML. Missing keys take their default value.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.map_radius < 1 {
            return Err(BotError::InvalidConfig(format!(
                "map_radius ({}) must be at least 1",
                self.map_radius
            )));
        }

        if self.radar_error_margin < 0 || self.shot_error_margin < 0 {
            return Err(BotError::InvalidConfig(
                "error margins must not be negative".into(),
            ));
        }

        if self.max_radar_attempts == 0 {
            return Err(BotError::InvalidConfig(
                "max_radar_attempts must be at least 1".into(),
            ));
        }

        crate::rules::RuleTable::from_names(&self.rules)?;

        Ok(())
    }
}

/// Per-round configuration supplied by the host runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// How far a bot may move in one round
    #[serde(rename = "move")]
    pub move_range: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { move_range: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            map_radius = 8
            memory_scope = "per_bot"
            "#,
        )
        .unwrap();

        assert_eq!(config.map_radius, 8);
        assert_eq!(config.memory_scope, MemoryScope::PerBot);
        assert_eq!(config.radar_overlap_radius, 5);
        assert_eq!(config.track_freshness_rounds, 6);
        assert_eq!(config.bot_names.len(), 3);
        assert_eq!(config.rules.last().map(String::as_str), Some("fallback"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = EngineConfig::from_toml_str("map_radius = \"wide\"");
        assert!(matches!(result, Err(BotError::TomlError(_))));
    }

    #[test]
    fn test_zero_radius_fails_validation() {
        let result = EngineConfig::from_toml_str("map_radius = 0");
        assert!(matches!(result, Err(BotError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_attempts_fails_validation() {
        let config = EngineConfig {
            max_radar_attempts: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rule_order_without_fallback_fails_validation() {
        let result = EngineConfig::from_toml_str(r#"rules = ["self_detected", "radar_echo"]"#);
        assert!(matches!(result, Err(BotError::MissingFallback(_))));

        let result = EngineConfig::from_toml_str(r#"rules = ["dance", "fallback"]"#);
        assert!(matches!(result, Err(BotError::UnknownRule(_))));
    }

    #[test]
    fn test_round_config_reads_move_key() {
        let config: RoundConfig = serde_json::from_str(r#"{"move": 2}"#).unwrap();
        assert_eq!(config.move_range, 2);

        let defaulted: RoundConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted.move_range, 1);
    }
}
