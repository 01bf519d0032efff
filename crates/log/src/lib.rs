//! # lomake-log
//!
//! Logging setup for lomake binaries: an [`EnvFilter`](tracing_subscriber::EnvFilter)
//! plus one `fmt` layer in pretty, compact or JSON form, writing to stderr.
//! Library crates only emit `tracing` events; binaries call one of the init
//! functions once at startup.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lomake_log::{Config, Format};
//!
//! fn main() -> Result<(), lomake_log::LogError> {
//!     let _guard = lomake_log::init_with(Config {
//!         format: Format::Json,
//!         ..Config::production()
//!     })?;
//!
//!     lomake_log::info!(port = 8080, "server starting");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;
mod macros;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use crate::core::{LogError, LogResult};

// Re-export tracing for macros and callers
#[doc(hidden)]
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};

/// Auto-detect and initialize the best logging configuration
///
/// `LOMAKE_LOG` or `RUST_LOG` selects [`Config::from_env`]; otherwise debug
/// builds get [`Config::development`] and release builds
/// [`Config::production`]. Returns a no-op guard when a subscriber is
/// already installed.
pub fn auto_init() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }

    if std::env::var("LOMAKE_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
