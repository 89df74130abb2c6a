use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PhotosieveError, Result};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Resolved limits handed to the search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum media entries returned by one search
    pub max_media_result: usize,

    /// Per-category cap on autocomplete suggestions
    pub autocomplete_max_per_category: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_media_result: DEFAULT_MAX_MEDIA_RESULT,
            autocomplete_max_per_category: DEFAULT_AUTOCOMPLETE_MAX,
        }
    }
}

const DEFAULT_MAX_MEDIA_RESULT: usize = 2000;
const DEFAULT_AUTOCOMPLETE_MAX: usize = 5;

/// Layered search configuration
///
/// Precedence: CLI arguments > environment variables > config file >
/// defaults.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub max_media_result: ConfigValue<usize>,
    pub autocomplete_max_per_category: ConfigValue<usize>,
}

impl SearchConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            max_media_result: ConfigValue::new(DEFAULT_MAX_MEDIA_RESULT, ConfigSource::Default),
            autocomplete_max_per_category: ConfigValue::new(
                DEFAULT_AUTOCOMPLETE_MAX,
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| PhotosieveError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(max_media_result) = file_config.max_media_result {
            validate_limit("max_media_result", max_media_result)?;
            self.max_media_result.update(max_media_result, ConfigSource::File);
        }

        if let Some(autocomplete_max) = file_config.autocomplete_max_per_category {
            validate_limit("autocomplete_max_per_category", autocomplete_max)?;
            self.autocomplete_max_per_category.update(autocomplete_max, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    ///
    /// Malformed values are logged and ignored rather than failing the
    /// load.
    pub fn load_from_env(mut self) -> Self {
        // PHOTOSIEVE_MAX_MEDIA_RESULT
        if let Ok(raw) = env::var("PHOTOSIEVE_MAX_MEDIA_RESULT") {
            match raw.parse::<usize>() {
                Ok(value) if value > 0 => {
                    self.max_media_result.update(value, ConfigSource::Environment);
                }
                _ => tracing::warn!(
                    "Invalid PHOTOSIEVE_MAX_MEDIA_RESULT value '{}': expected positive integer",
                    raw
                ),
            }
        }

        // PHOTOSIEVE_AUTOCOMPLETE_MAX_PER_CATEGORY
        if let Ok(raw) = env::var("PHOTOSIEVE_AUTOCOMPLETE_MAX_PER_CATEGORY") {
            match raw.parse::<usize>() {
                Ok(value) if value > 0 => {
                    self.autocomplete_max_per_category.update(value, ConfigSource::Environment);
                }
                _ => tracing::warn!(
                    "Invalid PHOTOSIEVE_AUTOCOMPLETE_MAX_PER_CATEGORY value '{}': expected positive integer",
                    raw
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(max_media_result) = overrides.max_media_result {
            self.max_media_result.update(max_media_result, ConfigSource::Cli);
        }

        if let Some(autocomplete_max) = overrides.autocomplete_max_per_category {
            self.autocomplete_max_per_category.update(autocomplete_max, ConfigSource::Cli);
        }
    }

    /// Resolved values for the engine
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_media_result: self.max_media_result.value,
            autocomplete_max_per_category: self.autocomplete_max_per_category.value,
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "max_media_result".to_string(),
            (self.max_media_result.value.to_string(), self.max_media_result.source),
        );

        map.insert(
            "autocomplete_max_per_category".to_string(),
            (
                self.autocomplete_max_per_category.value.to_string(),
                self.autocomplete_max_per_category.source,
            ),
        );

        map
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn validate_limit(key: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(PhotosieveError::ConfigInvalid {
            key: key.to_string(),
            reason: "must be a positive integer".to_string(),
        });
    }
    Ok(())
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    max_media_result: Option<usize>,
    autocomplete_max_per_category: Option<usize>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub max_media_result: Option<usize>,
    pub autocomplete_max_per_category: Option<usize>,
}
