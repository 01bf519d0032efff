//! Finnish and international identifier algorithms.
//!
//! Pure functions; nothing here suspends or touches shared state.
//!
//! - [`hetu`]: personal identity code (henkilötunnus) parsing and validation
//! - [`business_id`]: business ID (Y-tunnus) and Finnish VAT number checksums
//! - [`iban`]: IBAN structure and MOD 97-10 checksum

pub mod business_id;
pub mod hetu;
pub mod iban;

pub use business_id::BusinessId;
pub use hetu::{HetuRecord, Sex};

/// Structural failure while parsing an identifier.
///
/// A wrong checksum is not a format error: parsers report it through the
/// returned value so callers can still inspect the decoded parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Input does not match the identifier grammar.
    #[error("malformed {kind}: {reason}")]
    Malformed {
        /// Identifier kind, e.g. "personal identity code".
        kind: &'static str,
        /// What failed.
        reason: &'static str,
    },

    /// Grammar matched but the encoded date does not exist.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Full year after applying the century marker.
        year: i32,
        /// Month, 1-based.
        month: u32,
        /// Day of month, 1-based.
        day: u32,
    },
}

impl FormatError {
    pub(crate) const fn malformed(kind: &'static str, reason: &'static str) -> Self {
        Self::Malformed { kind, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        assert_eq!(
            FormatError::malformed("business ID", "expected DDDDDDD-D").to_string(),
            "malformed business ID: expected DDDDDDD-D"
        );
        assert_eq!(
            FormatError::InvalidDate {
                year: 1900,
                month: 2,
                day: 29
            }
            .to_string(),
            "invalid date 1900-02-29"
        );
    }
}
