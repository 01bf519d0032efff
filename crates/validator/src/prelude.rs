//! Prelude module for convenient imports.
//!
//! Provides a single `use lomake_validator::prelude::*;` import that brings
//! in the rule-building API, the built-in checks and the identifier helpers.
//!
//! # Examples
//!
//! ```rust
//! use lomake_validator::prelude::*;
//!
//! struct Order {
//!     amount: String,
//! }
//!
//! let rules = RuleSet::new("Local").rule(
//!     Rule::field("Amount", |o: &Order| o.amount.as_str())
//!         .must(|text: &str| try_parse_currency_eur(text).is_some())
//!         .with_code("amount.invalid"),
//! );
//! let validator = Validator::new(vec![rules]);
//! assert_eq!(validator.rule_sets().len(), 1);
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: Built-in field checks
// ============================================================================

pub use crate::validators::{
    Email, InRange, MaxLength, NotBlank, email, finnish_ssn, in_range, max_length, min,
    non_empty, not_blank,
};

// ============================================================================
// ENGINE: Rules, evaluation, results
// ============================================================================

pub use crate::aggregate::{FieldErrors, aggregate};
pub use crate::engine::{EvaluationError, evaluate};
pub use crate::localize::Localizer;
pub use crate::lookup::{LookupError, PrefillData, PrefillLookup, UsedNameLookup};
pub use crate::rule::{PredicateError, Rule, RuleSet};
pub use crate::validator::{ValidationOutcome, Validator};
pub use tokio_util::sync::CancellationToken;

// ============================================================================
// IDENTIFIERS AND NUMBERS
// ============================================================================

pub use crate::identifiers::business_id::{
    BusinessId, is_valid_business_id, is_valid_vat_number,
};
pub use crate::identifiers::{FormatError, HetuRecord, Sex, hetu, iban};
pub use crate::numeric::{try_parse_currency_eur, try_parse_decimal, try_parse_percentage};
