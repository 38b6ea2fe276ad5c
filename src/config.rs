use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_trials")]
    pub trials: u32,
    /// Fixed seed for reproducible plans; a fresh OS seed is used otherwise
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl PlannerConfig {
    pub fn planner(&self) -> dietplan_mealplan::Planner {
        let planner = dietplan_mealplan::Planner::new(self.trials);

        match self.time_limit_ms {
            Some(ms) => planner.time_limit(Duration::from_millis(ms)),
            None => planner,
        }
    }
}

fn default_trials() -> u32 {
    dietplan_mealplan::DEFAULT_TRIALS
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DIETPLAN__PLANNER__SEED, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("catalog.path", "data/catalog.json")?
            .set_default("planner.trials", i64::from(default_trials()))?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults and env still apply
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DIETPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.path.trim().is_empty() {
            return Err("Catalog path must not be empty".to_string());
        }
        if self.planner.trials == 0 {
            return Err("Planner trials must be at least 1".to_string());
        }
        if self.planner.time_limit_ms == Some(0) {
            return Err("Planner time limit must be greater than 0".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            catalog: CatalogConfig {
                path: "data/catalog.json".to_string(),
            },
            planner: PlannerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_trials() {
        let mut config = config();
        config.planner.trials = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_time_limit() {
        let mut config = config();
        config.planner.time_limit_ms = Some(0);

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_log_format() {
        let mut config = config();
        config.logging.format = "xml".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_catalog_path() {
        let mut config = config();
        config.catalog.path = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_planner_from_config() {
        let mut config = config();
        config.planner.trials = 50;
        config.planner.time_limit_ms = Some(250);

        let planner = config.planner.planner();
        assert_eq!(planner.trials, 50);
        assert_eq!(planner.time_limit, Some(Duration::from_millis(250)));
    }
}
