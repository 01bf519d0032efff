//! The sample form: a name checked locally and against the server.

use std::sync::Arc;

use lomake_validator::prelude::*;
use serde::{Deserialize, Serialize};

/// Name and age as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleForm {
    pub name: String,
    pub age: i32,
}

/// Builds the sample form validator.
///
/// `Local` checks presence and age range. `Server` rejects the reserved name
/// and, for a non-blank name, asks `used_names` whether it is taken (case
/// is ignored).
pub fn sample_validator(used_names: Arc<dyn UsedNameLookup>) -> Validator<SampleForm> {
    let local = RuleSet::new("Local")
        .rule(
            Rule::field("Name", |f: &SampleForm| f.name.as_str())
                .must_pass(not_blank())
                .with_code("name.required")
                .with_message("Name is required."),
        )
        .rule(
            Rule::field("Age", |f: &SampleForm| &f.age)
                .must_pass(in_range(18, 120))
                .with_code("age.range"),
        );

    let server = RuleSet::new("Server")
        .rule(
            Rule::field("Name", |f: &SampleForm| f.name.as_str())
                .must(|name: &str| name != "Server")
                .with_code("name.server_reserved")
                .with_message("Name cannot be 'Server'. (SampleFormValidator)"),
        )
        .rule(
            Rule::field("Name", |f: &SampleForm| f.name.as_str())
                .must_async(move |name: String, cancel| {
                    let lookup = Arc::clone(&used_names);
                    async move {
                        let taken = lookup.used_names(cancel).await?;
                        let name = name.to_lowercase();
                        Ok::<_, LookupError>(!taken.iter().any(|used| used.to_lowercase() == name))
                    }
                })
                .with_code("name.already_used")
                .with_message("Name is already used.")
                .when(|f: &SampleForm| !f.name.trim().is_empty()),
        );

    Validator::new(vec![local, server])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::StaticUsedNameLookup;
    use pretty_assertions::assert_eq;

    fn validator() -> Validator<SampleForm> {
        sample_validator(Arc::new(StaticUsedNameLookup::default()))
    }

    fn form(name: &str, age: i32) -> SampleForm {
        SampleForm {
            name: name.to_owned(),
            age,
        }
    }

    #[tokio::test]
    async fn test_local_rules() {
        let cancel = CancellationToken::new();
        let outcome = validator()
            .validate(&form("", 10), Some(&["Local"][..]), &cancel)
            .await
            .unwrap();
        assert_eq!(outcome.codes_by_field["Name"], vec!["name.required"]);
        assert_eq!(outcome.codes_by_field["Age"], vec!["age.range"]);
        assert_eq!(outcome.errors_by_field["Name"], vec!["Name is required."]);
    }

    #[tokio::test]
    async fn test_blank_name_skips_used_name_lookup() {
        let cancel = CancellationToken::new();
        let outcome = validator()
            .validate(&form("  ", 30), Some(&["Server"][..]), &cancel)
            .await
            .unwrap();
        assert!(outcome.valid);
    }
}
