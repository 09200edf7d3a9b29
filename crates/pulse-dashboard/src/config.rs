//! Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use pulse_live::LiveConfig;

use crate::error::{AppError, AppResult};

/// Simulated metric source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Display label for the series.
    pub label: String,
    /// Optional grouping category.
    #[serde(default)]
    pub category: Option<String>,
    /// Starting value of the random walk.
    #[serde(default = "default_start_value")]
    pub start_value: f64,
    /// Maximum step per generation.
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_start_value() -> f64 {
    100.0
}

fn default_step() -> f64 {
    5.0
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API base URL placeholder. Defined for parity with deployment
    /// environments; the engine never calls it.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Live update settings.
    #[serde(default)]
    pub live: LiveConfig,
    /// Maximum per-tick movement of tracked performance metrics.
    #[serde(default = "default_delta_max_step")]
    pub delta_max_step: f64,
    /// Metric sources. Empty means the built-in default set.
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

fn default_delta_max_step() -> f64 {
    3.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            live: LiveConfig::default(),
            delta_max_step: default_delta_max_step(),
            sources: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load from `path` when it exists, otherwise fall back to defaults.
    pub fn load(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Configured sources, or the built-in default set when none are
    /// configured.
    pub fn effective_sources(&self) -> Vec<SourceConfig> {
        if !self.sources.is_empty() {
            return self.sources.clone();
        }

        vec![
            SourceConfig {
                label: "Revenue".to_string(),
                category: Some("sales".to_string()),
                start_value: 1250.0,
                step: 40.0,
            },
            SourceConfig {
                label: "Page Views".to_string(),
                category: Some("traffic".to_string()),
                start_value: 5400.0,
                step: 250.0,
            },
            SourceConfig {
                label: "Social Mentions".to_string(),
                category: Some("social".to_string()),
                start_value: 320.0,
                step: 25.0,
            },
            SourceConfig {
                label: "BTC Price".to_string(),
                category: Some("crypto".to_string()),
                start_value: 64000.0,
                step: 800.0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.api_base_url.is_none());
        assert_eq!(config.live.tick_interval_ms, 2_000);
        assert_eq!(config.effective_sources().len(), 4);
    }

    #[test]
    fn test_from_file_partial_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
api_base_url = "https://api.example.com"

[live]
tick_interval_ms = 500

[[sources]]
label = "Orders"
category = "sales"
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.live.tick_interval_ms, 500);
        // Unset live fields keep defaults.
        assert_eq!(config.live.significance_threshold, 2.0);

        let sources = config.effective_sources();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].label, "Orders");
        assert_eq!(sources[0].start_value, 100.0);
    }

    #[test]
    fn test_from_file_missing_path_is_config_error() {
        let err = AppConfig::from_file("/nonexistent/pulse.toml").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_load_falls_back_to_defaults_when_missing() {
        let config = AppConfig::load("/nonexistent/pulse.toml").unwrap();
        assert_eq!(config.live.tick_interval_ms, 2_000);
    }
}
