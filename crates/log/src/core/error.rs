//! Error handling for lomake-log

/// Result alias for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Failure while configuring or installing the logger
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The filter directive could not be parsed
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The directive as given
        filter: String,
        /// Parser message
        reason: String,
    },

    /// An output format name was not recognised
    #[error("unknown log format '{0}' (expected pretty, compact or json)")]
    Format(String),

    /// A global subscriber is already installed
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

impl LogError {
    /// Create a filter parsing error
    pub fn filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }
}
