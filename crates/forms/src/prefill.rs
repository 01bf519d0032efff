//! Contact form that can be prefilled from an integration by name.
//!
//! [`PrefillSession`] runs lookups for live-typed names. Each new lookup
//! cancels the previous one, and answers that arrive after a newer lookup
//! started are reported as [`PrefillOutcome::Superseded`] instead of being
//! applied.

use std::sync::Arc;

use lomake_validator::lookup::{LookupError, PrefillData, PrefillLookup};
use lomake_validator::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::generation::GenerationTracker;

/// Name the integration has data for.
pub const MATCHING_NAME: &str = "Ada Lovelace";

/// Name whose lookup is slow and ignores cancellation.
pub const SLOW_RACE_NAME: &str = "Slow Race";

/// Name whose lookup answers quickly.
pub const FAST_RACE_NAME: &str = "Fast Race";

const PHONE_PATTERN: &str = r"^[0-9+()\-\s]{7,30}$";

/// Contact details, possibly prefilled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrefillForm {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub postal_code: String,
    pub phone_number: String,
    pub email: String,
}

impl PrefillForm {
    /// Overwrites every contact field with `data`, keeping the name.
    pub fn apply(&mut self, data: &PrefillData) {
        self.address_line1.clone_from(&data.address_line1);
        self.address_line2.clone_from(&data.address_line2);
        self.city.clone_from(&data.city);
        self.postal_code.clone_from(&data.postal_code);
        self.phone_number.clone_from(&data.phone_number);
        self.email.clone_from(&data.email);
    }
}

type Form = PrefillForm;
type Text = fn(&Form) -> &str;

fn required(field: &'static str, code: &'static str, read: Text) -> Rule<Form> {
    Rule::field(field, read)
        .must_pass(not_blank())
        .with_code(code)
}

fn length(field: &'static str, code: &'static str, read: Text, max: usize) -> Rule<Form> {
    Rule::field(field, read)
        .must_pass(max_length(max))
        .with_code(code)
}

/// Builds the prefill form validator.
///
/// A blank phone number or e-mail reports both its `required` and its
/// `invalid` code.
///
/// # Errors
///
/// Fails only if the phone pattern does not compile.
pub fn prefill_validator() -> Result<Validator<PrefillForm>, regex::Error> {
    let phone = lomake_validator::validators::matches_regex(PHONE_PATTERN)?;

    let local = RuleSet::new("Local")
        .rule(required("Name", "name.required", |f| &f.name))
        .rule(length("Name", "name.length", |f| &f.name, 120))
        .rule(required("AddressLine1", "address_line1.required", |f| &f.address_line1))
        .rule(length("AddressLine1", "address_line1.length", |f| &f.address_line1, 200))
        .rule(length("AddressLine2", "address_line2.length", |f| &f.address_line2, 200))
        .rule(required("City", "city.required", |f| &f.city))
        .rule(length("City", "city.length", |f| &f.city, 120))
        .rule(required("PostalCode", "postal_code.required", |f| &f.postal_code))
        .rule(length("PostalCode", "postal_code.length", |f| &f.postal_code, 20))
        .rule(required("PhoneNumber", "phone.required", |f| &f.phone_number))
        .rule(
            Rule::field("PhoneNumber", |f: &Form| f.phone_number.as_str())
                .must_pass(phone)
                .with_code("phone.invalid"),
        )
        .rule(required("Email", "email.required", |f| &f.email))
        .rule(
            Rule::field("Email", |f: &Form| f.email.as_str())
                .must_pass(email())
                .with_code("email.invalid"),
        );

    Ok(Validator::new(vec![local]))
}

// ============================================================================
// LOOKUP
// ============================================================================

/// What a lookup endpoint reports back for a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefillLookupResponse {
    pub found: bool,
    /// The name as looked up, trimmed.
    pub lookup_name: String,
    /// Hint for which name has data.
    pub matching_name: String,
    pub data: Option<PrefillData>,
    pub message: String,
}

/// Looks up `name` and wraps the answer for display.
///
/// A blank name is answered without calling `lookup`.
///
/// # Errors
///
/// Propagates the lookup's failure, including [`LookupError::Cancelled`].
pub async fn lookup_prefill(
    lookup: &dyn PrefillLookup,
    name: &str,
    cancel: CancellationToken,
) -> Result<PrefillLookupResponse, LookupError> {
    let lookup_name = name.trim().to_owned();
    if lookup_name.is_empty() {
        info!("prefill lookup skipped for empty name");
        return Ok(PrefillLookupResponse {
            found: false,
            lookup_name,
            matching_name: MATCHING_NAME.to_owned(),
            data: None,
            message: "Enter a name to look up existing data.".to_owned(),
        });
    }

    info!(name_length = lookup_name.len(), "prefill lookup started");
    let data = lookup.lookup(&lookup_name, cancel).await?;
    let found = data.is_some();
    info!(found, name_length = lookup_name.len(), "prefill lookup completed");

    Ok(PrefillLookupResponse {
        found,
        lookup_name,
        matching_name: MATCHING_NAME.to_owned(),
        data,
        message: if found {
            "Integration returned existing data.".to_owned()
        } else {
            "No integration data found for that name.".to_owned()
        },
    })
}

/// Result of a session lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefillOutcome {
    /// The lookup is still the latest one; its answer may be applied.
    Current(PrefillLookupResponse),
    /// A newer lookup started first; the answer was dropped.
    Superseded,
}

/// Serializes live lookups so only the latest answer is applied.
pub struct PrefillSession {
    lookup: Arc<dyn PrefillLookup>,
    tracker: GenerationTracker,
}

impl PrefillSession {
    /// Creates a session over `lookup`.
    pub fn new(lookup: Arc<dyn PrefillLookup>) -> Self {
        Self {
            lookup,
            tracker: GenerationTracker::new(),
        }
    }

    /// Starts a lookup for `name`, cancelling any lookup still in flight.
    ///
    /// # Errors
    ///
    /// Returns the lookup's failure only while this lookup is current.
    pub async fn lookup(&self, name: &str) -> Result<PrefillOutcome, LookupError> {
        let ticket = self.tracker.begin();
        let result = lookup_prefill(self.lookup.as_ref(), name, ticket.token()).await;

        if !self.tracker.is_current(&ticket) {
            debug!(generation = ticket.generation(), "stale prefill answer dropped");
            return Ok(PrefillOutcome::Superseded);
        }
        result.map(PrefillOutcome::Current)
    }

    /// Number of lookups started so far.
    pub fn latest_generation(&self) -> u64 {
        self.tracker.latest()
    }
}

impl std::fmt::Debug for PrefillSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefillSession")
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}
