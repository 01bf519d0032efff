//! # lomake-forms
//!
//! The demo forms served by lomake, each with its validator:
//!
//! - [`sample`]: name and age, with a `Server` rule set that consults a
//!   used-name lookup
//! - [`validation_examples`]: every identifier, number and choice rule
//! - [`customer_intake`]: contact details, identifiers and deal size
//! - [`prefill`]: contact details prefilled from an integration
//!
//! [`integrations`] holds stand-in lookups, [`catalog`] the Finnish messages
//! and [`generation`] the stale-response tracker used by live lookups.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use lomake_forms::integrations::StaticUsedNameLookup;
//! use lomake_forms::sample::{SampleForm, sample_validator};
//! use lomake_validator::prelude::*;
//!
//! # async fn run() -> Result<(), EvaluationError> {
//! let validator = sample_validator(Arc::new(StaticUsedNameLookup::default()));
//! let form = SampleForm { name: "Taken".into(), age: 30 };
//! let outcome = validator.validate(&form, None, &CancellationToken::new()).await?;
//! assert_eq!(outcome.codes_by_field["Name"], vec!["name.already_used"]);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::result_large_err)]

pub mod catalog;
pub mod customer_intake;
pub mod generation;
pub mod integrations;
pub mod options;
pub mod prefill;
pub mod sample;
pub mod validation_examples;

pub use catalog::FINNISH;
pub use customer_intake::{CustomerIntakeForm, customer_intake_validator};
pub use generation::{GenerationTracker, Ticket};
pub use options::{ContractType, IndustryType, MultiChoice, SingleChoice};
pub use prefill::{PrefillForm, PrefillOutcome, PrefillSession, prefill_validator};
pub use sample::{SampleForm, sample_validator};
pub use validation_examples::{ValidationExamplesForm, validation_examples_validator};
