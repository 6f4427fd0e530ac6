//! Engine configuration
//!
//! Optional TOML file; every field has a default so an absent file is fine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::ACTIVITY_SUGGESTIONS;
use crate::error::{EngineError, Result};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed "today" for reproducible runs; the local clock when unset
    pub today: Option<NaiveDate>,
    /// How many activity suggestions the dashboard shows
    pub daily_suggestions: usize,
    /// Seed for suggestion picks; random when unset
    pub suggestion_seed: Option<u64>,
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            today: None,
            daily_suggestions: 3,
            suggestion_seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)
            .map_err(|e| EngineError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.daily_suggestions == 0 || self.daily_suggestions > ACTIVITY_SUGGESTIONS.len() {
            return Err(EngineError::Config(format!(
                "daily_suggestions must be between 1 and {}",
                ACTIVITY_SUGGESTIONS.len()
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(EngineError::Config(format!(
                "log_level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.daily_suggestions, 3);
        assert!(config.today.is_none());
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(EngineConfig::load(None).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml(
            r#"
            today = "2024-06-15"
            suggestion_seed = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(config.suggestion_seed, Some(9));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(matches!(
            EngineConfig::from_toml("daily_suggestions = 0"),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml("daily_suggestions = 7"),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml("log_level = \"loud\""),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(EngineConfig::from_toml("today = \"2024-02-30\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load(Some(PathBuf::from("/nonexistent/lifepath.toml"))).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
