use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::Result;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Dataset source configuration
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Recommendation engine configuration
    #[serde(default)]
    #[validate(nested)]
    pub recommendation: RecommendationConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the embedded defaults, an optional file and environment
    ///
    /// The file is taken from `path` when given, otherwise from `CONFIG_PATH`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_string_lossy().into_owned(),
            None => std::env::var("CONFIG_PATH")
                .unwrap_or_else(|_| "config/course-analyzer.toml".to_string()),
        };

        let config: Config = config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: COURSE_ANALYZER_)
            .add_source(
                config::Environment::with_prefix("COURSE_ANALYZER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string, filling gaps with defaults
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the delimited course dataset
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationConfig {
    /// Number of titles returned by a recommendation query
    #[serde(default = "default_recommend_num")]
    #[validate(range(min = 1))]
    pub recommend_num: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            recommend_num: default_recommend_num(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

// Default value functions
fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/online_courses.csv")
}

fn default_recommend_num() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.recommendation.recommend_num, 10);
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
        assert_eq!(
            config.dataset.path,
            PathBuf::from("data/online_courses.csv")
        );
    }

    #[test]
    fn test_from_toml_str_overrides() {
        let config = Config::from_toml_str(
            r#"
            [dataset]
            path = "/tmp/courses.csv"

            [recommendation]
            recommend_num = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.path, PathBuf::from("/tmp/courses.csv"));
        assert_eq!(config.recommendation.recommend_num, 3);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_zero_recommend_num_rejected() {
        let result = Config::from_toml_str(
            r#"
            [recommendation]
            recommend_num = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_embedded_defaults_parse() {
        let config = Config::from_toml_str(include_str!("../config/default.toml")).unwrap();
        assert_eq!(config.recommendation.recommend_num, 10);
    }
}
