use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for round generation, timers and browser integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Largest quantity a counting round asks for (smallest is always 1).
    pub max_count: u8,
    /// Number of buttons in a counting round.
    pub quantity_options: usize,
    /// Maximum number of swatches in a color round, correct one included.
    pub color_options: usize,
    /// Pairs on the board of a matching round.
    pub match_pairs: usize,
    /// How long a wrong answer keeps shaking (milliseconds).
    pub shake_ms: u32,
    /// How long a name tooltip stays visible (milliseconds).
    pub tooltip_ms: u32,
    /// `sessionStorage` key holding the restorable round.
    pub storage_key: String,
    /// Query parameter that pins a game.
    pub url_param: String,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_count: 5,
            quantity_options: 3,
            color_options: 4,
            match_pairs: 4,
            shake_ms: 500,
            tooltip_ms: 1500,
            storage_key: "activeGame".to_string(),
            url_param: "id".to_string(),
        }
    }
}

impl PlayConfig {
    /// Parse tunables from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_count == 0 {
            return Err(ConfigError::Invalid("max_count must be at least 1".into()));
        }
        if self.quantity_options == 0 || self.quantity_options > self.max_count as usize {
            return Err(ConfigError::Invalid(format!(
                "quantity_options must be within 1..={}",
                self.max_count
            )));
        }
        if self.color_options == 0 {
            return Err(ConfigError::Invalid(
                "color_options must be at least 1".into(),
            ));
        }
        if self.match_pairs == 0 {
            return Err(ConfigError::Invalid("match_pairs must be at least 1".into()));
        }
        if self.storage_key.is_empty() || self.url_param.is_empty() {
            return Err(ConfigError::Invalid(
                "storage_key and url_param must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = PlayConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PlayConfig::from_toml_str("shake_ms = 300\nmatch_pairs = 3").unwrap();
        assert_eq!(config.shake_ms, 300);
        assert_eq!(config.match_pairs, 3);
        assert_eq!(config.tooltip_ms, 1500);
        assert_eq!(config.storage_key, "activeGame");
    }

    #[test]
    fn rejects_more_options_than_counts() {
        let err = PlayConfig::from_toml_str("max_count = 2\nquantity_options = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = PlayConfig::from_toml_str("shake_ms = \"slow\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
