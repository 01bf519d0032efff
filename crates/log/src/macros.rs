//! Convenience macros for structured logging

/// Log an error and return it
///
/// ```rust
/// let err = lomake_log::log_error!(std::io::Error::other("disk full"), path = "lomake.toml");
/// assert_eq!(err.to_string(), "disk full");
/// ```
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        $crate::error!(error = %e);
        e
    }};
    ($err:expr, $($arg:tt)*) => {{
        let e = $err;
        $crate::error!(error = %e, $($arg)*);
        e
    }};
}

/// Create a span with an empty `elapsed_ms` field
#[macro_export]
macro_rules! timed_span {
    ($name:expr) => {
        $crate::tracing::info_span!($name, elapsed_ms = $crate::tracing::field::Empty)
    };
    ($name:expr, $($field:tt)*) => {
        $crate::tracing::info_span!($name, elapsed_ms = $crate::tracing::field::Empty, $($field)*)
    };
}

/// Await a future inside a timed span and log how long it took
///
/// ```rust
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let value = lomake_log::measure!("answer", async { 42 });
/// assert_eq!(value, 42);
/// # });
/// ```
#[macro_export]
macro_rules! measure {
    ($name:expr, $future:expr) => {{
        use $crate::tracing::Instrument as _;
        let __start = std::time::Instant::now();
        let __span = $crate::timed_span!($name);
        let __result = $future.instrument(__span.clone()).await;
        let __elapsed = u64::try_from(__start.elapsed().as_millis()).unwrap_or(u64::MAX);
        __span.record("elapsed_ms", __elapsed);
        $crate::tracing::debug!(name = %$name, elapsed_ms = __elapsed, "operation completed");
        __result
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_error_returns_value() {
        let err = crate::log_error!(std::fmt::Error);
        assert_eq!(err, std::fmt::Error);
    }

    #[tokio::test]
    async fn test_measure_returns_result() {
        let value = crate::measure!("double", async { 21 * 2 });
        assert_eq!(value, 42);
    }
}
