//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orderbox/orderbox.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `ORDERBOX_*` prefix
//!
//! Command line flags (`--currency`, `--scale`) are applied by the CLI on top.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;

/// Unified configuration for orderbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Currency label appended to amounts (default: RUB)
    pub currency: String,
    /// Decimal places shown for amounts (default: 2)
    pub scale: u32,
    /// Show orders as a box-drawing tree instead of an indented list
    pub tree: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "RUB".into(),
            scale: 2,
            tree: false,
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub currency: Option<String>,
    pub scale: Option<u32>,
    pub tree: Option<bool>,
}

/// Get the XDG config directory for orderbox.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orderbox").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orderbox.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            currency: overlay
                .currency
                .clone()
                .unwrap_or_else(|| self.currency.clone()),
            scale: overlay.scale.unwrap_or(self.scale),
            tree: overlay.tree.unwrap_or(self.tree),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist if given
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (replace - explicit override)
        Self::apply_env_overrides(current)
    }

    /// Apply ORDERBOX_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ORDERBOX")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;
        settings.apply_overrides(&config)
    }

    /// Overrides from an already built source; a present but unparsable key is an error.
    fn apply_overrides(mut self, config: &Config) -> Result<Self, ApplicationError> {
        if let Some(val) = override_value::<String>(config, "currency")? {
            self.currency = val;
        }
        if let Some(val) = override_value::<u32>(config, "scale")? {
            self.scale = val;
        }
        if let Some(val) = override_value::<bool>(config, "tree")? {
            self.tree = val;
        }
        Ok(self)
    }

    /// Amount with `scale` decimal places and the currency label.
    ///
    /// Midpoints round away from zero (0.125 shows as 0.13).
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{:.*} {}",
            self.scale as usize,
            amount.round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero),
            self.currency
        )
    }
}

/// `None` when the key is absent.
fn override_value<T: DeserializeOwned>(
    config: &Config,
    key: &str,
) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("ORDERBOX_{}: {}", key.to_uppercase(), e),
        }),
    }
}
