//! Stand-in collaborators for the lookup contracts.
//!
//! These answer from fixed data with simulated latency so the demo forms and
//! the CLI can exercise cancellation and stale-response handling without a
//! backend.

use std::time::Duration;

use async_trait::async_trait;
use lomake_validator::lookup::{LookupError, PrefillData, PrefillLookup, UsedNameLookup};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::prefill::{FAST_RACE_NAME, MATCHING_NAME, SLOW_RACE_NAME};

/// Names the server reports as taken unless configured otherwise.
pub const DEFAULT_USED_NAMES: [&str; 3] = ["Taken", "Existing", "AlreadyUsed"];

// ============================================================================
// USED NAMES
// ============================================================================

/// Used-name source backed by a fixed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticUsedNameLookup {
    names: Vec<String>,
}

impl StaticUsedNameLookup {
    /// Creates a lookup answering with `names`.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StaticUsedNameLookup {
    fn default() -> Self {
        Self::new(DEFAULT_USED_NAMES)
    }
}

#[async_trait]
impl UsedNameLookup for StaticUsedNameLookup {
    async fn used_names(&self, cancel: CancellationToken) -> Result<Vec<String>, LookupError> {
        if cancel.is_cancelled() {
            return Err(LookupError::Cancelled);
        }
        debug!(count = self.names.len(), "used names served from static list");
        Ok(self.names.clone())
    }
}

/// Client-side used-name source: nothing is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyUsedNameLookup;

#[async_trait]
impl UsedNameLookup for EmptyUsedNameLookup {
    async fn used_names(&self, _cancel: CancellationToken) -> Result<Vec<String>, LookupError> {
        Ok(Vec::new())
    }
}

// ============================================================================
// PREFILL
// ============================================================================

/// Prefill source with canned answers for three demo names.
///
/// - [`MATCHING_NAME`] answers after `latency` and honours cancellation.
/// - [`FAST_RACE_NAME`] answers after `fast_latency`.
/// - [`SLOW_RACE_NAME`] answers after `slow_latency` and ignores
///   cancellation, so a superseded request still completes late.
///
/// Other names resolve to `None` after `latency`. Names are trimmed and
/// compared without regard to case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPrefillLookup {
    pub latency: Duration,
    pub fast_latency: Duration,
    pub slow_latency: Duration,
}

impl Default for MockPrefillLookup {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(250),
            fast_latency: Duration::from_millis(75),
            slow_latency: Duration::from_millis(900),
        }
    }
}

impl MockPrefillLookup {
    async fn delay(duration: Duration, cancel: &CancellationToken) -> Result<(), LookupError> {
        tokio::select! {
            () = cancel.cancelled() => Err(LookupError::Cancelled),
            () = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

#[async_trait]
impl PrefillLookup for MockPrefillLookup {
    async fn lookup(
        &self,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<Option<PrefillData>, LookupError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        if name.eq_ignore_ascii_case(SLOW_RACE_NAME) {
            info!(name, "slow prefill lookup started, cancellation ignored");
            tokio::time::sleep(self.slow_latency).await;
            return Ok(Some(slow_race_data()));
        }

        if name.eq_ignore_ascii_case(FAST_RACE_NAME) {
            Self::delay(self.fast_latency, &cancel).await?;
            return Ok(Some(fast_race_data()));
        }

        Self::delay(self.latency, &cancel).await?;
        if name.eq_ignore_ascii_case(MATCHING_NAME) {
            Ok(Some(matching_data()))
        } else {
            debug!(name, "no prefill data");
            Ok(None)
        }
    }
}

fn prefill(
    address_line1: &str,
    address_line2: &str,
    city: &str,
    postal_code: &str,
    phone_number: &str,
    email: &str,
) -> PrefillData {
    PrefillData {
        address_line1: address_line1.to_owned(),
        address_line2: address_line2.to_owned(),
        city: city.to_owned(),
        postal_code: postal_code.to_owned(),
        phone_number: phone_number.to_owned(),
        email: email.to_owned(),
    }
}

/// Data returned for [`MATCHING_NAME`].
pub fn matching_data() -> PrefillData {
    prefill(
        "123 Analytical Engine Way",
        "Suite 42",
        "London",
        "SW1A 1AA",
        "+44 20 7946 0958",
        "ada.lovelace@example.com",
    )
}

/// Data returned for [`SLOW_RACE_NAME`].
pub fn slow_race_data() -> PrefillData {
    prefill(
        "123 Slow St",
        "Suite 1",
        "Slowville",
        "11111",
        "+1 111 111 1111",
        "slow@example.com",
    )
}

/// Data returned for [`FAST_RACE_NAME`].
pub fn fast_race_data() -> PrefillData {
    prefill(
        "456 Rapid Ave",
        "Floor 9",
        "Velocity City",
        "99999",
        "+1 999 999 9999",
        "fast@example.com",
    )
}
