//! The per-model validator.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::aggregate::{FieldErrors, aggregate};
use crate::engine::{EvaluationError, evaluate};
use crate::foundation::ValidationErrors;
use crate::localize::Localizer;
use crate::rule::RuleSet;

/// Rule sets evaluated when the caller does not choose any.
pub const DEFAULT_RULE_SETS: [&str; 2] = ["Local", "Server"];

/// Result of validating one model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// True when no rule failed.
    pub valid: bool,
    /// Failure messages keyed by field.
    pub errors_by_field: IndexMap<String, Vec<String>>,
    /// Failure codes keyed by field, index-aligned with the messages.
    pub codes_by_field: IndexMap<String, Vec<String>>,
}

impl ValidationOutcome {
    /// Builds the outcome from grouped failures.
    pub fn from_field_errors(grouped: FieldErrors) -> Self {
        Self {
            valid: grouped.is_empty(),
            errors_by_field: grouped.errors,
            codes_by_field: grouped.codes,
        }
    }

    /// Same outcome with messages re-rendered through `localizer`.
    #[must_use]
    pub fn localized(self, localizer: &Localizer) -> Self {
        let grouped = FieldErrors {
            errors: self.errors_by_field,
            codes: self.codes_by_field,
        };
        Self::from_field_errors(grouped.localized(localizer))
    }
}

/// Immutable rule tables for one model type.
///
/// Build once and share; `Validator<T>` is `Send + Sync` and holds no
/// call-scoped state.
///
/// ```rust
/// use lomake_validator::prelude::*;
///
/// struct Signup {
///     name: String,
/// }
///
/// let validator = Validator::new(vec![RuleSet::new("Local").rule(
///     Rule::field("Name", |m: &Signup| m.name.as_str())
///         .must_pass(not_blank())
///         .with_code("name.required"),
/// )]);
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let cancel = CancellationToken::new();
/// let outcome = validator
///     .validate(&Signup { name: String::new() }, None, &cancel)
///     .await
///     .unwrap();
/// assert!(!outcome.valid);
/// assert_eq!(outcome.codes_by_field["Name"], vec!["name.required"]);
/// # });
/// ```
pub struct Validator<T> {
    rule_sets: Vec<RuleSet<T>>,
    default_rule_sets: Vec<Cow<'static, str>>,
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rule_sets", &self.rule_sets)
            .field("default_rule_sets", &self.default_rule_sets)
            .finish()
    }
}

impl<T> Validator<T> {
    /// Creates a validator over `rule_sets` with the default selection.
    pub fn new(rule_sets: Vec<RuleSet<T>>) -> Self {
        Self {
            rule_sets,
            default_rule_sets: DEFAULT_RULE_SETS.iter().map(|&name| Cow::Borrowed(name)).collect(),
        }
    }

    /// Replaces the selection used when a call does not choose rule sets.
    #[must_use]
    pub fn with_default_rule_sets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.default_rule_sets = names.into_iter().map(Into::into).collect();
        self
    }

    /// Declared rule sets in order.
    pub fn rule_sets(&self) -> &[RuleSet<T>] {
        &self.rule_sets
    }

    /// Names evaluated by default.
    pub fn default_rule_sets(&self) -> impl Iterator<Item = &str> {
        self.default_rule_sets.iter().map(AsRef::as_ref)
    }

    fn effective<'a>(&'a self, requested: Option<&'a [&'a str]>) -> Vec<&'a str> {
        match requested {
            Some(names) if !names.is_empty() => names.to_vec(),
            _ => self.default_rule_sets().collect(),
        }
    }

    /// Ordered failures of the selected rule sets.
    ///
    /// `None` or an empty selection evaluates the default rule sets.
    ///
    /// # Errors
    ///
    /// See [`evaluate`].
    pub async fn evaluate(
        &self,
        model: &T,
        rule_sets: Option<&[&str]>,
        cancel: &CancellationToken,
    ) -> Result<ValidationErrors, EvaluationError> {
        let selected = self.effective(rule_sets);
        evaluate(&self.rule_sets, model, &selected, cancel).await
    }

    /// Validates `model` and groups the failures by field.
    ///
    /// # Errors
    ///
    /// See [`evaluate`].
    pub async fn validate(
        &self,
        model: &T,
        rule_sets: Option<&[&str]>,
        cancel: &CancellationToken,
    ) -> Result<ValidationOutcome, EvaluationError> {
        let failures = self.evaluate(model, rule_sets, cancel).await?;
        Ok(ValidationOutcome::from_field_errors(aggregate(&failures)))
    }
}
