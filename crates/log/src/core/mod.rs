//! Error types for logger setup.

pub mod error;

pub use error::{LogError, LogResult};
