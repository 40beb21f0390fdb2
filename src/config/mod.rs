use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PollenError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Station-table endpoint of the public measurement backend.
pub const DEFAULT_BASE_URL: &str =
    "https://www.meteoschweiz.admin.ch/product/output/measured-values/stationsTable";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollenConfig {
    pub base_url: String,
    /// IANA timezone the measurement timestamps are localized to.
    pub timezone: Tz,
    pub timeout_seconds: u64,
}

impl Default for PollenConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timezone: chrono_tz::Europe::Zurich,
            timeout_seconds: 10,
        }
    }
}

impl PollenConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PollenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| PollenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for PollenConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

impl ConfigProvider for PollenConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timezone(&self) -> Tz {
        self.timezone
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PollenConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timezone, chrono_tz::Europe::Zurich);
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str_with_partial_config() {
        let config = PollenConfig::from_toml_str(
            r#"
            base_url = "https://backend.example/feeds"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://backend.example/feeds");
        assert_eq!(config.timezone, chrono_tz::Europe::Zurich);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_from_toml_str_with_full_config() {
        let config = PollenConfig::from_toml_str(
            r#"
            base_url = "http://localhost:8080"
            timezone = "Europe/Vienna"
            timeout_seconds = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.timezone, chrono_tz::Europe::Vienna);
        assert_eq!(config.timeout_seconds, 3);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_values() {
        assert!(PollenConfig::from_toml_str("base_url = \"not a url\"").is_err());
        assert!(PollenConfig::from_toml_str("timeout_seconds = 0").is_err());
        assert!(PollenConfig::from_toml_str("timezone = \"Mars/Olympus\"").is_err());
        assert!(PollenConfig::from_toml_str("base_url = 42").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://backend.example\"").unwrap();
        writeln!(file, "timeout_seconds = 5").unwrap();

        let config = PollenConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://backend.example");
        assert_eq!(config.timeout_seconds, 5);

        assert!(PollenConfig::from_file("/nonexistent/pollen.toml").is_err());
    }
}
