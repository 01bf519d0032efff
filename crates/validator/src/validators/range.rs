//! Range checks for numbers and dates.

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    ///
    /// ```rust
    /// use lomake_validator::foundation::Validate;
    /// use lomake_validator::validators::in_range;
    ///
    /// assert!(in_range(18, 120).validate(&18).is_ok());
    /// assert!(in_range(18, 120).validate(&121).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::out_of_range(self.min, self.max, *input)
    }
    fn in_range(min: T, max: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_min_with_dates() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(min(today).validate(&today).is_ok());
        let err = min(today)
            .validate(&NaiveDate::from_ymd_opt(2026, 2, 28).unwrap())
            .unwrap_err();
        assert_eq!(err.param("min"), Some("2026-03-01"));
    }

    #[test]
    fn test_in_range_bounds_inclusive() {
        let validator = in_range(1, 5000);
        assert!(validator.validate(&1).is_ok());
        assert!(validator.validate(&5000).is_ok());
        assert!(validator.validate(&0).is_err());
    }

    #[test]
    fn test_in_range_decimal() {
        let validator = in_range(Decimal::ZERO, Decimal::ONE_HUNDRED);
        assert!(validator.validate(&Decimal::new(125, 1)).is_ok());
        let err = validator.validate(&Decimal::new(1001, 1)).unwrap_err();
        assert_eq!(err.code, "out_of_range");
        assert_eq!(err.param("actual"), Some("100.1"));
    }
}
