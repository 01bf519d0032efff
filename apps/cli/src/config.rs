//! Layered application configuration.
//!
//! Precedence, lowest first: built-in defaults, `lomake.toml` (or the file
//! given with `--config`), `LOMAKE_*` variables with `__` separating nested
//! keys (`LOMAKE_LOG__LEVEL`, `LOMAKE_VALIDATION__USED_NAMES`), then CLI
//! flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use lomake_forms::integrations::DEFAULT_USED_NAMES;
use lomake_log::Format;
use lomake_validator::validator::DEFAULT_RULE_SETS;
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lomake.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogSettings,
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub format: Format,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: Format::Compact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Rule sets run when `--rule-set` is not given.
    pub default_rule_sets: Vec<String>,
    /// Names the sample form's server rules treat as taken.
    pub used_names: Vec<String>,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            default_rule_sets: DEFAULT_RULE_SETS.iter().map(|s| (*s).to_owned()).collect(),
            used_names: DEFAULT_USED_NAMES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// CLI flags that override every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub log_format: Option<Format>,
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let file = match path {
            Some(path) => {
                ensure!(path.exists(), "config file {} not found", path.display());
                path.to_path_buf()
            }
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let mut figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&file))
            .merge(
                Env::prefixed("LOMAKE_")
                    .filter(|key| key.as_str().contains("__"))
                    .split("__"),
            );

        if let Some(level) = &overrides.log_level {
            figment = figment.merge(Serialized::default("log.level", level));
        }
        if let Some(format) = overrides.log_format {
            figment = figment.merge(Serialized::default("log.format", format));
        }

        figment
            .extract()
            .with_context(|| format!("invalid configuration (file: {})", file.display()))
    }

    /// Logger configuration derived from the `log` section.
    pub fn logger(&self) -> lomake_log::Config {
        lomake_log::Config {
            level: self.log.level.clone(),
            format: self.log.format,
            ..lomake_log::Config::default()
        }
    }
}
