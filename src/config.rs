//! Tunable constants for battle resolution.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Numbers the battle formulas read. The defaults reproduce the standard
/// rules; a RON file can override any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Chance in percent, drawn from [0, 100), that a damaging hit is critical.
    pub critical_chance_percent: f64,
    pub critical_multiplier: f64,
    /// Same-type attack bonus.
    pub stab_multiplier: f64,
    /// Number of shake checks a capture needs to pass.
    pub catch_shakes: u32,
    /// Inclusive range for individual values rolled on wild creatures.
    pub wild_iv_min: u8,
    pub wild_iv_max: u8,
    pub max_moves: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            critical_chance_percent: 6.25,
            critical_multiplier: 2.0,
            stab_multiplier: 1.5,
            catch_shakes: 4,
            wild_iv_min: 1,
            wild_iv_max: 15,
            max_moves: 4,
        }
    }
}

impl BattleConfig {
    /// Parses a config from RON. Missing fields keep their defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = BattleConfig::from_ron_str("(catch_shakes: 3)").unwrap();
        assert_eq!(config.catch_shakes, 3);
        assert_eq!(config.critical_chance_percent, 6.25);
        assert_eq!(config.max_moves, 4);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let result = BattleConfig::from_ron_str("(catch_shakes: \"four\")");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
