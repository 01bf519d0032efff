//! Logger builder implementation
//!
//! - `format`: formatting layer per output format

mod format;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::core::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful build
///
/// Keep it alive for as long as the process logs. Dropping it does not
/// uninstall the global subscriber.
#[derive(Debug)]
#[must_use = "the guard should be held for the lifetime of the program"]
pub struct LoggerGuard {
    config: Option<Config>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Replace the filter directive
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Parse the filter without installing anything
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the directive cannot be parsed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::filter(self.config.level.clone(), e))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already set
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let fmt_layer = format::fmt_layer(self.config.format, &self.config.display);

        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            config: Some(self.config),
        })
    }
}

impl LoggerGuard {
    /// Guard for a logger that was not installed by this call
    pub(crate) const fn noop() -> Self {
        Self { config: None }
    }

    /// Configuration the logger was installed with, if this call installed it
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }
}
