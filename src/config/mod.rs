pub mod log_level;
pub mod metric_filters;

use std::path::Path;

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;

use crate::config::{log_level::LogLevel, metric_filters::deserialize_metric_filters};
use crate::filter::MetricFilter;

pub const CONFIG_FILE_NAME: &str = "dpfilter.yaml";
pub const ENV_PREFIX: &str = "DPFILTER_";

#[derive(Debug, PartialEq, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    /// Points matching any of these are dropped...
    #[serde(deserialize_with = "deserialize_metric_filters")]
    pub exclude_metrics: Vec<MetricFilter>,
    /// ...unless they also match one of these.
    #[serde(deserialize_with = "deserialize_metric_filters")]
    pub include_metrics: Vec<MetricFilter>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    ParseError(String),
}

/// Load configuration from `<config_directory>/dpfilter.yaml`, overridden by
/// `DPFILTER_`-prefixed environment variables.
#[allow(clippy::module_name_repetitions)]
pub fn get_config(config_directory: &Path) -> Result<Config, ConfigError> {
    let path = config_directory.join(CONFIG_FILE_NAME);

    let figment = Figment::new()
        .merge(Yaml::file(&path))
        .merge(Env::prefixed(ENV_PREFIX));

    let config: Config = figment.extract().map_err(|err| {
        tracing::error!("CONFIG | Failed to parse filter config: {err}");
        ConfigError::ParseError(err.to_string())
    })?;

    tracing::debug!(
        "CONFIG | Loaded {} exclude and {} include metric filters",
        config.exclude_metrics.len(),
        config.include_metrics.len()
    );
    Ok(config)
}
