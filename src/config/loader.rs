//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `--config PATH`, or `.stmath.toml` in the working directory
//! 4. `~/.config/stmath/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::env::Env;
use crate::functions::LogOptions;
use crate::models::{NonPositivePolicy, OutputFormat};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration, fully resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputConfig,
}

/// Settings for the logarithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogConfig {
    pub policy: NonPositivePolicy,
    pub trace: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            policy: NonPositivePolicy::Reject,
            trace: true,
        }
    }
}

/// Settings for how the CLI reports a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// One config file as written: only the keys it sets are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub log: LogLayer,
    pub output: OutputLayer,
}

/// `[log]` table of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogLayer {
    pub policy: Option<NonPositivePolicy>,
    pub trace: Option<bool>,
}

/// `[output]` table of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputLayer {
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the working-directory lookup and must exist.
    pub fn load(explicit: Option<&Path>, cwd: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        // Layer 3: explicit or working-directory config
        match (explicit, cwd) {
            (Some(path), _) => config.merge(Self::load_file(path)?),
            (None, Some(dir)) => {
                let local_path = dir.join(crate::constants::CONFIG_FILENAME);
                if local_path.exists() {
                    config.merge(Self::load_file(&local_path)?);
                }
            }
            (None, None) => {}
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load a config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Apply a higher-priority layer: every key it sets wins.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(policy) = layer.log.policy {
            self.log.policy = policy;
        }
        if let Some(trace) = layer.log.trace {
            self.log.trace = trace;
        }
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        use crate::constants::{ENV_FORMAT, ENV_LOG_POLICY, ENV_TRACE};

        if let Some(val) = env.var(ENV_LOG_POLICY) {
            match val.parse::<NonPositivePolicy>() {
                Ok(policy) => self.log.policy = policy,
                Err(e) => warn!("ignoring invalid {ENV_LOG_POLICY} value: {e}"),
            }
        }

        match env.flag(ENV_TRACE) {
            Some(Ok(trace)) => self.log.trace = trace,
            Some(Err(val)) => warn!("ignoring invalid {ENV_TRACE} value: {val}"),
            None => {}
        }

        if let Some(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(e) => warn!("ignoring invalid {ENV_FORMAT} value: {e}"),
            }
        }
    }

    /// Options for the logarithm derived from this config.
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            policy: self.log.policy,
            trace: self.log.trace,
        }
    }
}
