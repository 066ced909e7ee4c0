//! calcsh configuration
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. `calcsh.toml` in the working directory, or the file given with `--config`
//! 3. `CALCSH_*` environment variables (e.g. `CALCSH_ANGLE_MODE=radians`)
//! 4. Command-line flags (applied by the caller)

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use sci_calc::{AngleMode, EngineOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "calcsh.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CALCSH_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcshConfig {
    /// Angle mode at startup and after `clear`
    #[serde(default)]
    pub angle_mode: AngleMode,

    /// Cap on typed entry length (digits); unset means unbounded
    #[serde(default)]
    pub max_entry_digits: Option<usize>,

    /// tracing filter directive for engine diagnostics
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "bool_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "error".to_string()
}

fn bool_true() -> bool {
    true
}

impl Default for CalcshConfig {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::default(),
            max_entry_digits: None,
            log_level: default_log_level(),
            color: true,
        }
    }
}

impl CalcshConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => {
                if !p.exists() {
                    bail!("Config file not found: {}", p.display());
                }
                p.to_path_buf()
            },
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        Figment::from(Serialized::defaults(CalcshConfig::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", file.display()))
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            angle_mode: self.angle_mode,
            max_entry_digits: self.max_entry_digits,
        }
    }
}
