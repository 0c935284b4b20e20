use crate::aggregator::AggregatorOptions;
use crate::constants::{default_base_url, get_supported_sources, DEFAULT_OUTPUT_PREFIX};
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Runtime configuration: built-in defaults, optionally replaced by a TOML
/// file, then by command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_prefix: String,
    pub workers: Option<usize>,
    pub unit_timeout_secs: Option<u64>,
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    /// Replaces the site's default origin for the listing URL and link resolution
    #[serde(default)]
    pub base_url: Option<String>,
}

impl SourceConfig {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: None,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sources: Option<Vec<String>>,
    pub output_prefix: Option<String>,
    pub workers: Option<usize>,
    pub unit_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            workers: None,
            unit_timeout_secs: None,
            sources: get_supported_sources()
                .into_iter()
                .map(SourceConfig::named)
                .collect(),
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Apply command line values on top of this configuration.
    ///
    /// Sources named on the command line keep a `base_url` already configured
    /// for the same name.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(names) = overrides.sources {
            self.sources = names
                .iter()
                .map(|name| {
                    self.sources
                        .iter()
                        .find(|s| &s.name == name)
                        .cloned()
                        .unwrap_or_else(|| SourceConfig::named(name))
                })
                .collect();
        }
        if let Some(prefix) = overrides.output_prefix {
            self.output_prefix = prefix;
        }
        if overrides.workers.is_some() {
            self.workers = overrides.workers;
        }
        if overrides.unit_timeout_secs.is_some() {
            self.unit_timeout_secs = overrides.unit_timeout_secs;
        }
    }

    pub fn validate(&self) -> Result<()> {
        for source in &self.sources {
            if default_base_url(&source.name).is_none() {
                return Err(ScraperError::UnknownSource(source.name.clone()));
            }
        }
        if self.workers == Some(0) {
            return Err(ScraperError::Config("workers must be at least 1".into()));
        }
        if self.unit_timeout_secs == Some(0) {
            return Err(ScraperError::Config(
                "unit_timeout_secs must be at least 1".into(),
            ));
        }
        if self.output_prefix.trim().is_empty() {
            return Err(ScraperError::Config("output_prefix must not be empty".into()));
        }
        Ok(())
    }

    pub fn aggregator_options(&self) -> AggregatorOptions {
        AggregatorOptions {
            max_workers: self.workers,
            unit_timeout: self.unit_timeout_secs.map(Duration::from_secs),
        }
    }
}
