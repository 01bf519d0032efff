//! Declarative rules over a model type.
//!
//! A [`Rule`] binds one field accessor to one check, plus an optional guard,
//! error code and message. Rules are collected into named [`RuleSet`]s and
//! never change after construction.
//!
//! ```rust
//! use lomake_validator::prelude::*;
//!
//! struct Signup {
//!     name: String,
//!     age: i32,
//! }
//!
//! let local = RuleSet::new("Local")
//!     .rule(
//!         Rule::field("Name", |m: &Signup| m.name.as_str())
//!             .must_pass(not_blank())
//!             .with_code("name.required"),
//!     )
//!     .rule(
//!         Rule::field("Age", |m: &Signup| &m.age)
//!             .must_pass(in_range(18, 120))
//!             .with_code("age.range"),
//!     );
//!
//! assert_eq!(local.len(), 2);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::foundation::{RULE_SET_PARAM, Validate, ValidationError};
use crate::identifiers::FormatError;
use crate::lookup::LookupError;

/// Error raised inside a check instead of a pass/fail verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredicateError {
    /// Input could not be parsed; the engine records an ordinary failure.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A collaborator failed; the engine aborts the evaluation.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Result of running one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Verdict {
    Pass,
    /// Carries the reusable validator's own error when there is one.
    Fail(Option<ValidationError>),
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok { Self::Pass } else { Self::Fail(None) }
    }
}

/// Predicate over the whole model deciding whether a rule applies.
pub type Guard<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

type SyncCheck<T> = Arc<dyn Fn(&T) -> Result<Verdict, PredicateError> + Send + Sync>;

type AsyncCheck<T> = Arc<
    dyn Fn(&T, CancellationToken) -> BoxFuture<'static, Result<Verdict, PredicateError>>
        + Send
        + Sync,
>;

pub(crate) enum Check<T> {
    Sync(SyncCheck<T>),
    Async(AsyncCheck<T>),
}

impl<T> Clone for Check<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Sync(f) => Self::Sync(Arc::clone(f)),
            Self::Async(f) => Self::Async(Arc::clone(f)),
        }
    }
}

fn sync_check<T, F>(f: F) -> Check<T>
where
    F: Fn(&T) -> Result<Verdict, PredicateError> + Send + Sync + 'static,
{
    Check::Sync(Arc::new(f))
}

fn async_check<T, F>(f: F) -> Check<T>
where
    F: Fn(&T, CancellationToken) -> BoxFuture<'static, Result<Verdict, PredicateError>>
        + Send
        + Sync
        + 'static,
{
    Check::Async(Arc::new(f))
}

// ============================================================================
// RULE
// ============================================================================

/// One field check with its code, message and optional guard.
pub struct Rule<T> {
    field: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
    message: Option<Cow<'static, str>>,
    guard: Option<Guard<T>>,
    check: Check<T>,
    rule_set: Option<Cow<'static, str>>,
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            code: self.code.clone(),
            message: self.message.clone(),
            guard: self.guard.clone(),
            check: self.check.clone(),
            rule_set: self.rule_set.clone(),
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("code", &self.code)
            .field("rule_set", &self.rule_set)
            .field("guarded", &self.guard.is_some())
            .field("async", &self.is_async())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Rule<T> {
    /// Starts a rule for the field `name`, read through `accessor`.
    pub fn field<U, A>(name: impl Into<Cow<'static, str>>, accessor: A) -> RuleBuilder<T, U, A>
    where
        U: ?Sized + 'static,
        A: Fn(&T) -> &U + Send + Sync + 'static,
    {
        RuleBuilder {
            field: name.into(),
            accessor,
            _marker: PhantomData,
        }
    }

    fn from_check(field: Cow<'static, str>, check: Check<T>) -> Self {
        Self {
            field,
            code: None,
            message: None,
            guard: None,
            check,
            rule_set: None,
        }
    }

    /// Applies the rule only when `guard` holds for the model.
    ///
    /// Calling `when` twice requires both guards.
    pub fn when<G>(mut self, guard: G) -> Self
    where
        G: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let combined: Guard<T> = match self.guard.take() {
            None => Arc::new(guard),
            Some(previous) => Arc::new(move |model: &T| previous(model) && guard(model)),
        };
        self.guard = Some(combined);
        self
    }
}

impl<T> Rule<T> {
    /// Sets the error code recorded on failure.
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the fallback message recorded on failure.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Registration name of the field.
    pub fn field_name(&self) -> &str {
        &self.field
    }

    /// Explicit error code, if one was set.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Rule set this rule was added to.
    pub fn rule_set(&self) -> Option<&str> {
        self.rule_set.as_deref()
    }

    /// Whether the check suspends.
    pub fn is_async(&self) -> bool {
        matches!(self.check, Check::Async(_))
    }

    /// Whether the rule applies to `model`.
    pub(crate) fn applies(&self, model: &T) -> bool {
        self.guard.as_ref().is_none_or(|guard| guard(model))
    }

    pub(crate) const fn check(&self) -> &Check<T> {
        &self.check
    }

    /// Builds the failure record for this rule.
    ///
    /// Explicit code and message win over the ones a reusable validator
    /// supplied; without either, the code is `<field>.invalid`.
    pub(crate) fn failure(&self, detail: Option<ValidationError>) -> ValidationError {
        let (code, message, params) = match detail {
            Some(detail) => (
                Cow::Owned(format!("{}.{}", snake_case(&self.field), detail.code)),
                detail.message,
                detail.params,
            ),
            None => (
                Cow::Owned(format!("{}.invalid", snake_case(&self.field))),
                Cow::Owned(format!("'{}' is not valid.", self.field)),
                Vec::new(),
            ),
        };

        let mut error = ValidationError::new(
            self.code.clone().unwrap_or(code),
            self.message.clone().unwrap_or(message),
        )
        .with_field(self.field.clone());
        error.params = params;
        if let Some(rule_set) = &self.rule_set {
            error = error.with_param(RULE_SET_PARAM, rule_set.clone());
        }
        error
    }
}

/// `RequiredFinnishSsn` becomes `required_finnish_ssn`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// RULE BUILDER
// ============================================================================

/// A field bound to an accessor, waiting for its check.
pub struct RuleBuilder<T, U: ?Sized, A> {
    field: Cow<'static, str>,
    accessor: A,
    _marker: PhantomData<fn(&T) -> &U>,
}

impl<T, U, A> RuleBuilder<T, U, A>
where
    T: 'static,
    U: ?Sized + 'static,
    A: Fn(&T) -> &U + Send + Sync + 'static,
{
    /// Passes when `predicate` returns true for the field value.
    pub fn must<P>(self, predicate: P) -> Rule<T>
    where
        P: Fn(&U) -> bool + Send + Sync + 'static,
    {
        let Self {
            field, accessor, ..
        } = self;
        Rule::from_check(
            field,
            sync_check(move |model: &T| Ok(Verdict::from(predicate(accessor(model))))),
        )
    }

    /// Like [`must`](Self::must), but a [`FormatError`] becomes an ordinary
    /// failure of this rule.
    pub fn try_must<P>(self, predicate: P) -> Rule<T>
    where
        P: Fn(&U) -> Result<bool, FormatError> + Send + Sync + 'static,
    {
        let Self {
            field, accessor, ..
        } = self;
        Rule::from_check(
            field,
            sync_check(move |model: &T| {
                predicate(accessor(model))
                    .map(Verdict::from)
                    .map_err(PredicateError::from)
            }),
        )
    }

    /// Passes when the reusable `validator` accepts the field value.
    ///
    /// The validator's message becomes the default failure message and its
    /// parameters are carried over.
    pub fn must_pass<V>(self, validator: V) -> Rule<T>
    where
        V: Validate<Input = U> + Send + Sync + 'static,
    {
        let Self {
            field, accessor, ..
        } = self;
        Rule::from_check(
            field,
            sync_check(move |model: &T| {
                Ok(match validator.validate(accessor(model)) {
                    Ok(()) => Verdict::Pass,
                    Err(error) => Verdict::Fail(Some(error)),
                })
            }),
        )
    }

    /// Passes when the asynchronous `check` resolves to true.
    ///
    /// The field value is cloned into an owned value before the check starts,
    /// so the future does not borrow the model. The check receives the
    /// evaluation's cancellation token.
    pub fn must_async<F, Fut>(self, check: F) -> Rule<T>
    where
        U: ToOwned,
        U::Owned: Send + 'static,
        F: Fn(U::Owned, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, LookupError>> + Send + 'static,
    {
        let Self {
            field, accessor, ..
        } = self;
        Rule::from_check(
            field,
            async_check(move |model: &T, cancel: CancellationToken| {
                let value = accessor(model).to_owned();
                check(value, cancel)
                    .map(|result| result.map(Verdict::from).map_err(PredicateError::from))
                    .boxed()
            }),
        )
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// A named, ordered list of rules.
pub struct RuleSet<T> {
    name: Cow<'static, str>,
    rules: Vec<Rule<T>>,
}

impl<T> Clone for RuleSet<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .finish()
    }
}

impl<T> RuleSet<T> {
    /// Creates an empty rule set.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Appends a rule, recording this set as its owner.
    pub fn rule(mut self, mut rule: Rule<T>) -> Self {
        rule.rule_set = Some(self.name.clone());
        self.rules.push(rule);
        self
    }

    /// The set's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, not_blank};
    use pretty_assertions::assert_eq;

    struct Person {
        name: String,
        nickname: Option<String>,
    }

    fn person(name: &str) -> Person {
        Person {
            name: name.to_owned(),
            nickname: None,
        }
    }

    fn run_sync(rule: &Rule<Person>, model: &Person) -> Result<Verdict, PredicateError> {
        match rule.check() {
            Check::Sync(f) => f(model),
            Check::Async(_) => panic!("expected a sync check"),
        }
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("RequiredFinnishSsn"), "required_finnish_ssn");
        assert_eq!(snake_case("Name"), "name");
        assert_eq!(snake_case("city"), "city");
    }

    #[test]
    fn test_must_uses_field_accessor() {
        let rule = Rule::field("Name", |p: &Person| p.name.as_str()).must(|n: &str| n != "Server");
        assert_eq!(run_sync(&rule, &person("Aino")), Ok(Verdict::Pass));
        assert_eq!(run_sync(&rule, &person("Server")), Ok(Verdict::Fail(None)));
    }

    #[test]
    fn test_try_must_surfaces_format_error() {
        let rule = Rule::field("Name", |p: &Person| p.name.as_str()).try_must(|_| {
            Err(FormatError::Malformed {
                kind: "test",
                reason: "always",
            })
        });
        assert!(matches!(
            run_sync(&rule, &person("x")),
            Err(PredicateError::Format(_))
        ));
    }

    #[test]
    fn test_failure_defaults_from_validator() {
        let rule = RuleSet::new("Local")
            .rule(Rule::field("CustomerName", |p: &Person| p.name.as_str()).must_pass(max_length(3)))
            .rules()[0]
            .clone();
        let Ok(Verdict::Fail(detail)) = run_sync(&rule, &person("Aleksis")) else {
            panic!("expected failure");
        };
        let error = rule.failure(detail);
        assert_eq!(error.code, "customer_name.max_length");
        assert_eq!(error.message, "Must be at most 3 characters");
        assert_eq!(error.field.as_deref(), Some("CustomerName"));
        assert_eq!(error.param("max"), Some("3"));
        assert_eq!(error.rule_set(), Some("Local"));
    }

    #[test]
    fn test_explicit_code_and_message_win() {
        let rule = Rule::field("Name", |p: &Person| p.name.as_str())
            .must_pass(not_blank())
            .with_code("name.required")
            .with_message("Name is required.");
        let error = rule.failure(Some(ValidationError::required()));
        assert_eq!(error.code, "name.required");
        assert_eq!(error.message, "Name is required.");
        assert_eq!(error.rule_set(), None);
    }

    #[test]
    fn test_plain_failure_message() {
        let rule = Rule::field("Name", |p: &Person| p.name.as_str()).must(|_| false);
        let error = rule.failure(None);
        assert_eq!(error.code, "name.invalid");
        assert_eq!(error.message, "'Name' is not valid.");
    }

    #[test]
    fn test_guards_combine() {
        let rule = Rule::field("Nickname", |p: &Person| &p.nickname)
            .must(Option::is_some)
            .when(|p: &Person| !p.name.is_empty())
            .when(|p: &Person| p.name != "Anonymous");
        assert!(rule.applies(&person("Aino")));
        assert!(!rule.applies(&person("")));
        assert!(!rule.applies(&person("Anonymous")));
    }

    #[test]
    fn test_must_async_is_async() {
        let rule = Rule::field("Name", |p: &Person| p.name.as_str())
            .must_async(|name: String, _cancel| async move { Ok::<_, LookupError>(!name.is_empty()) });
        assert!(rule.is_async());
        assert!(format!("{rule:?}").contains("async: true"));
    }
}
