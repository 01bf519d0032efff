//! Asynchronous collaborator contracts consumed by rules and callers.
//!
//! The engine never talks to a real integration. Forms inject
//! implementations as `Arc<dyn UsedNameLookup>` and capture them in
//! `must_async` checks; every call receives the evaluation's cancellation
//! token and should return [`LookupError::Cancelled`] once it fires.

use std::borrow::Cow;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Failure reported by a lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The caller's token fired before the lookup finished.
    #[error("lookup cancelled")]
    Cancelled,

    /// The backing service could not answer.
    #[error("{lookup} unavailable: {reason}")]
    Unavailable {
        /// Which lookup failed.
        lookup: Cow<'static, str>,
        /// Why it failed.
        reason: String,
    },
}

impl LookupError {
    /// Creates an [`LookupError::Unavailable`].
    pub fn unavailable(lookup: impl Into<Cow<'static, str>>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            lookup: lookup.into(),
            reason: reason.into(),
        }
    }
}

/// Source of names that are already taken.
///
/// Stored by validators as `Arc<dyn UsedNameLookup>`.
#[async_trait]
pub trait UsedNameLookup: Send + Sync {
    /// Returns every used name. Comparison is the caller's concern.
    async fn used_names(&self, cancel: CancellationToken) -> Result<Vec<String>, LookupError>;
}

/// Contact details an integration can prefill for a known name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefillData {
    /// Street address.
    pub address_line1: String,
    /// Apartment, suite or c/o line.
    pub address_line2: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Phone number as typed by the integration.
    pub phone_number: String,
    /// E-mail address.
    pub email: String,
}

/// Looks up prefill data by name. Not called by the engine.
#[async_trait]
pub trait PrefillLookup: Send + Sync {
    /// Returns data for `name`, or `None` when nothing matches.
    async fn lookup(
        &self,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<Option<PrefillData>, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = LookupError::unavailable("used names", "connection refused");
        assert_eq!(err.to_string(), "used names unavailable: connection refused");
        assert_eq!(LookupError::Cancelled.to_string(), "lookup cancelled");
    }

    #[test]
    fn test_prefill_data_uses_camel_case() {
        let data = PrefillData {
            address_line1: "Mannerheimintie 1".into(),
            postal_code: "00100".into(),
            ..PrefillData::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["addressLine1"], "Mannerheimintie 1");
        assert_eq!(json["postalCode"], "00100");
    }
}
