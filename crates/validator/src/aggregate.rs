//! Grouping of ordered failures by field.

use indexmap::IndexMap;
use serde::Serialize;

use crate::foundation::ValidationErrors;
use crate::localize::Localizer;

/// Failure messages and codes keyed by field name.
///
/// Fields appear in the order of their first failure. For every field,
/// `errors[f][i]` and `codes[f][i]` describe the same violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    /// Messages per field.
    pub errors: IndexMap<String, Vec<String>>,
    /// Codes per field, index-aligned with `errors`.
    pub codes: IndexMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Returns true when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages re-rendered through `localizer`, keeping each original
    /// message as the fallback.
    #[must_use]
    pub fn localized(&self, localizer: &Localizer) -> Self {
        let errors = self
            .errors
            .iter()
            .map(|(field, messages)| {
                let codes = self.codes.get(field).map_or(&[][..], Vec::as_slice);
                let rendered = messages
                    .iter()
                    .enumerate()
                    .map(|(i, message)| match codes.get(i) {
                        Some(code) => localizer.localize(code, Some(message)),
                        None => message.clone(),
                    })
                    .collect();
                (field.clone(), rendered)
            })
            .collect();

        Self {
            errors,
            codes: self.codes.clone(),
        }
    }
}

/// Groups failures by field, keeping evaluation order and duplicates.
///
/// A failure without a field is filed under the empty key.
pub fn aggregate(failures: &ValidationErrors) -> FieldErrors {
    let mut grouped = FieldErrors::default();
    for failure in failures {
        let field = failure.field.as_deref().unwrap_or_default();
        grouped
            .errors
            .entry(field.to_owned())
            .or_default()
            .push(failure.message.to_string());
        grouped
            .codes
            .entry(field.to_owned())
            .or_default()
            .push(failure.code.to_string());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use pretty_assertions::assert_eq;

    fn failure(field: &'static str, code: &'static str, message: &'static str) -> ValidationError {
        ValidationError::new(code, message).with_field(field)
    }

    #[test]
    fn test_first_occurrence_order_and_alignment() {
        let failures: ValidationErrors = [
            failure("Name", "name.required", "Name is required."),
            failure("Age", "age.range", "Age out of range."),
            failure("Name", "name.server_reserved", "Name cannot be 'Server'."),
            failure("Name", "name.server_reserved", "Name cannot be 'Server'."),
        ]
        .into_iter()
        .collect();

        let grouped = aggregate(&failures);
        assert_eq!(grouped.errors.keys().collect::<Vec<_>>(), vec!["Name", "Age"]);
        assert_eq!(
            grouped.codes["Name"],
            vec!["name.required", "name.server_reserved", "name.server_reserved"]
        );
        assert_eq!(grouped.errors["Name"][1], "Name cannot be 'Server'.");
        assert_eq!(grouped.errors["Age"], vec!["Age out of range."]);
    }

    #[test]
    fn test_empty() {
        let grouped = aggregate(&ValidationErrors::new());
        assert!(grouped.is_empty());
        assert!(grouped.codes.is_empty());
    }

    #[test]
    fn test_localized_keeps_fallbacks() {
        let failures: ValidationErrors = [
            failure("Name", "name.required", "Name is required."),
            failure("Name", "name.custom", "Custom rule failed."),
        ]
        .into_iter()
        .collect();
        let fi = Localizer::new().with("name.required", "Nimi on pakollinen.");

        let localized = aggregate(&failures).localized(&fi);
        assert_eq!(
            localized.errors["Name"],
            vec!["Nimi on pakollinen.", "Custom rule failed."]
        );
        assert_eq!(localized.codes["Name"], vec!["name.required", "name.custom"]);
    }
}
