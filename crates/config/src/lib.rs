//! Conversion configuration models and loaders for geodistance.

use std::fs::File;
use std::path::Path;

use geodist_core::rounding::{RoundingMode, decimals_in_range};
use geodist_core::units::Unit;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// How computed distances should be reported.
///
/// An empty `units` list means every supported unit, in table order.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConversionConfig {
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default = "default_round_up")]
    pub round_up: bool,
    #[serde(default)]
    pub units: Vec<String>,
}

fn default_round_up() -> bool {
    true
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            decimals: None,
            round_up: default_round_up(),
            units: Vec::new(),
        }
    }
}

impl ConversionConfig {
    pub fn rounding_mode(&self) -> RoundingMode {
        RoundingMode::from(self.round_up)
    }

    /// Check every listed unit against the unit table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(unit) = self
            .units
            .iter()
            .find(|unit| Unit::from_symbol(unit).is_none())
        {
            return Err(ConfigError::UnknownUnit {
                unit: unit.clone(),
                supported: Unit::supported_symbols(),
            });
        }
        if let Some(decimals) = self.decimals.filter(|d| !decimals_in_range(*d)) {
            warn!(decimals, "decimals outside [1, 9]; values will not be rounded");
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown unit '{unit}' in config (expected one of: {supported})")]
    UnknownUnit { unit: String, supported: String },
}

/// Load and validate a conversion config. `.toml` files are read as TOML, anything else as YAML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConversionConfig, ConfigError> {
    let path = path.as_ref();
    let config: ConversionConfig = if path.extension().is_some_and(|ext| ext == "toml") {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    debug!(
        path = %path.display(),
        decimals = ?config.decimals,
        round_up = config.round_up,
        units = config.units.len(),
        "loaded conversion config"
    );
    Ok(config)
}
