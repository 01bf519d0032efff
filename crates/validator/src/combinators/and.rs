//! AND combinator: both checks must pass.

use crate::foundation::{Validate, ValidationError};

/// Combines two checks with logical AND.
///
/// The left check runs first; its error is returned without running the
/// right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, not_blank};

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(not_blank(), max_length(10));
        assert!(validator.validate("Turku").is_ok());
    }

    #[test]
    fn test_and_left_failure_wins() {
        let validator = And::new(not_blank(), max_length(0));
        let err = validator.validate(" ").unwrap_err();
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_and_right_failure() {
        let validator = And::new(not_blank(), max_length(3));
        let err = validator.validate("Espoo").unwrap_err();
        assert_eq!(err.code, "max_length");
    }
}
