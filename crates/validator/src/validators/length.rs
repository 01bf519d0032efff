//! Presence and length checks for text fields.
//!
//! Length is measured in Unicode scalar values so `Jyväskylä` counts nine.

use crate::foundation::ValidationError;

crate::validator! {
    /// Rejects empty and whitespace-only text.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::required() }
    fn not_blank();
}

crate::validator! {
    /// Validates that text does not exceed a maximum number of characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

crate::validator! {
    /// Requires at least one selected item.
    pub NonEmpty<T> for [T];
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required() }
    fn non_empty();
}
