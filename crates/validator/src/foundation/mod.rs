//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Reusable checks are generic over their input type; the rule engine binds
//! them to model fields and rewrites their code and message per rule.
//!
//! ```rust
//! use lomake_validator::foundation::{Validate, ValidationError};
//! use lomake_validator::validators::max_length;
//!
//! let error: ValidationError = max_length(3).validate("Vantaa").unwrap_err();
//! assert_eq!(error.code, "max_length");
//! assert_eq!(error.param("max"), Some("3"));
//! ```

pub mod error;
pub mod traits;

pub use error::{RULE_SET_PARAM, ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
