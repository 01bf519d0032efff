//! # lomake-validator
//!
//! Validation engine for Finnish form input.
//!
//! ## Quick Start
//!
//! ```rust
//! use lomake_validator::prelude::*;
//!
//! // Reusable checks compose with .and() / .when()
//! let city = not_blank().and(max_length(120));
//! assert!(city.validate("Jyväskylä").is_ok());
//!
//! // Identifier algorithms are plain functions
//! assert!(hetu::is_valid("131052-308T"));
//! assert!(is_valid_business_id("1629284-5"));
//! ```
//!
//! ## Building Validators
//!
//! Bind checks to model fields with [`Rule::field`](rule::Rule::field), group
//! them into named [`RuleSet`](rule::RuleSet)s and hand those to a
//! [`Validator`](validator::Validator). A call selects rule sets by name,
//! evaluates every applicable rule (asynchronous lookups concurrently, under
//! a cancellation token) and returns failures grouped by field.
//!
//! ## Modules
//!
//! - [`identifiers`]: hetu, business ID and VAT number, IBAN
//! - [`numeric`]: Finnish and invariant decimal, euro and percentage parsing
//! - [`validators`]: reusable field checks, built with [`validator!`]
//! - [`rule`], [`engine`], [`aggregate`], [`validator`]: the rule engine
//! - [`lookup`]: asynchronous collaborator contracts
//! - [`localize`]: code to message catalogs

// ValidationError is returned by value from every check; boxing it would add
// an allocation to each failing rule.
#![allow(clippy::result_large_err)]

pub mod aggregate;
pub mod combinators;
pub mod engine;
pub mod foundation;
pub mod identifiers;
pub mod localize;
pub mod lookup;
mod macros;
pub mod numeric;
pub mod prelude;
pub mod rule;
pub mod validator;
pub mod validators;
