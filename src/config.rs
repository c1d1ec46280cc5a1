//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <FILE>`, else `$XDG_CONFIG_HOME/webring/webring.toml`
//! 3. Environment variables: `WEBRING_*` prefix
//!
//! Command-line flags override all of these per invocation.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for webring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Threshold used by `purge` and `scavenge` when no `--min-sites` is given
    pub min_sites: usize,
    /// Substring marking a site as a dead link
    pub dead_link_flag: String,
    /// Network file used when a command is given no file argument
    pub network_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_sites: 1,
            dead_link_flag: "dead".into(),
            network_file: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub min_sites: Option<usize>,
    pub dead_link_flag: Option<String>,
    pub network_file: Option<PathBuf>,
}

/// Get the XDG config directory for webring.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "webring").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("webring.toml"))
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

/// Expand `~`, `$VAR` and `${VAR}`; leaves the input as-is when a variable is unset.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(file) = &self.network_file {
            let expanded = expand_env_vars(file.to_string_lossy().as_ref());
            self.network_file = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            min_sites: overlay.min_sites.unwrap_or(self.min_sites),
            dead_link_flag: overlay
                .dead_link_flag
                .clone()
                .unwrap_or_else(|| self.dead_link_flag.clone()),
            network_file: overlay
                .network_file
                .clone()
                .or_else(|| self.network_file.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// An explicit `config_file` must exist; the global file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!(path = %global_path.display(), "loading global config");
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply `WEBRING_*` environment variables as explicit overrides.
    ///
    /// Unset variables are skipped; values that fail to convert are errors.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("WEBRING")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_int("min_sites"))? {
            settings.min_sites = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("WEBRING_MIN_SITES must not be negative: {val}"),
            })?;
        }
        if let Some(val) = env_value(config.get_string("dead_link_flag"))? {
            settings.dead_link_flag = val;
        }
        if let Some(val) = env_value(config.get_string("network_file"))? {
            settings.network_file = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.dead_link_flag.is_empty() {
            return Err(ApplicationError::Config {
                message: "dead_link_flag must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# webring configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/webring/webring.toml  (or --config <FILE>)
#   Env:  WEBRING_* environment variables (explicit overrides)

# Threshold for purge and scavenge
# min_sites = 1

# Substring marking a site as a dead link
# dead_link_flag = "dead"

# Network file used when no file argument is given
# network_file = "~/rings.toml"
"#
        .to_string()
    }
}

/// A missing key means the variable is unset; any other error is reported.
fn env_value<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
