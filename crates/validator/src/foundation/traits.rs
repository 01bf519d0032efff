//! Core traits for reusable field checks.
//!
//! A [`Validate`] implementation checks one field value in isolation. Rules
//! bind such checks to a model field through
//! [`RuleBuilder::must_pass`](crate::rule::RuleBuilder::must_pass).

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every reusable field check implements.
///
/// `Input` may be unsized so one check serves `str`, `String` and `Cow<str>`
/// field accessors alike.
///
/// # Examples
///
/// ```rust
/// use lomake_validator::foundation::{Validate, ValidationError};
///
/// struct Uppercase;
///
/// impl Validate for Uppercase {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().all(|c| !c.is_lowercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("uppercase", "Must be upper case"))
///         }
///     }
/// }
///
/// assert!(Uppercase.validate("FI").is_ok());
/// assert!(Uppercase.validate("fi").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Both checks must pass; the first failure is returned.
    ///
    /// ```rust
    /// use lomake_validator::prelude::*;
    ///
    /// let validator = not_blank().and(max_length(5));
    /// assert!(validator.validate("Oulu").is_ok());
    /// assert!(validator.validate("   ").is_err());
    /// assert!(validator.validate("Helsinki").is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Runs the check only when `condition` holds for the input.
    ///
    /// ```rust
    /// use lomake_validator::prelude::*;
    ///
    /// let validator = email().when(|s: &str| !s.trim().is_empty());
    /// assert!(validator.validate("").is_ok());
    /// assert!(validator.validate("nobody").is_err());
    /// ```
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails(&'static str);

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new(self.0, "fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn test_and_returns_first_failure() {
        let err = AlwaysFails("left")
            .and(AlwaysFails("right"))
            .validate("x")
            .unwrap_err();
        assert_eq!(err.code, "left");
        assert!(AlwaysValid.and(AlwaysValid).validate("x").is_ok());
    }

    #[test]
    fn test_when_skips_on_false_condition() {
        let validator = AlwaysFails("never").when(|s: &str| s.len() > 3);
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("abcd").is_err());
    }
}
