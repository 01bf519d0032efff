//! Rule evaluation.
//!
//! [`evaluate`] runs the selected rule sets against one model. Synchronous
//! checks run inline while the call walks the rules; asynchronous checks are
//! polled together and raced against the caller's cancellation token. The
//! failures are merged in declaration order once everything has resolved, so
//! the output never depends on which lookup answered first.

use futures::FutureExt;
use futures::future::{BoxFuture, join_all};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::foundation::ValidationErrors;
use crate::lookup::LookupError;
use crate::rule::{Check, PredicateError, Rule, RuleSet, Verdict};

/// Why an evaluation produced no verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// The cancellation token fired before every check resolved.
    #[error("validation cancelled")]
    Cancelled,

    /// A collaborator failed while checking `field`.
    #[error("lookup for field '{field}' failed")]
    Lookup {
        /// Field whose rule called the collaborator.
        field: String,
        /// The collaborator's error.
        #[source]
        source: LookupError,
    },
}

type Outcome = Result<Verdict, PredicateError>;

/// Evaluates the rule sets named in `selected` against `model`.
///
/// Rule sets are visited in selection order and rules in declaration order.
/// A name selected twice runs once; a name that matches no rule set selects
/// nothing. Every applicable rule runs, so one field may collect several
/// failures.
///
/// # Errors
///
/// [`EvaluationError::Cancelled`] if `cancel` fires before the call starts or
/// while asynchronous checks are pending, or if a check reports
/// [`LookupError::Cancelled`]. [`EvaluationError::Lookup`] if a collaborator
/// fails for any other reason.
pub async fn evaluate<T>(
    rule_sets: &[RuleSet<T>],
    model: &T,
    selected: &[&str],
    cancel: &CancellationToken,
) -> Result<ValidationErrors, EvaluationError> {
    if cancel.is_cancelled() {
        return Err(EvaluationError::Cancelled);
    }

    let mut applied: Vec<&Rule<T>> = Vec::new();
    let mut scheduled: Vec<BoxFuture<'static, Outcome>> = Vec::new();
    let mut skipped = 0usize;

    for rule in select(rule_sets, selected) {
        if !rule.applies(model) {
            skipped += 1;
            continue;
        }
        let outcome = match rule.check() {
            Check::Sync(check) => futures::future::ready(check(model)).boxed(),
            Check::Async(check) => check(model, cancel.clone()),
        };
        applied.push(rule);
        scheduled.push(outcome);
    }

    let outcomes = tokio::select! {
        biased;
        () = cancel.cancelled() => return Err(EvaluationError::Cancelled),
        outcomes = join_all(scheduled) => outcomes,
    };

    let mut errors = ValidationErrors::new();
    for (rule, outcome) in applied.iter().zip(outcomes) {
        match outcome {
            Ok(Verdict::Pass) => {}
            Ok(Verdict::Fail(detail)) => errors.add(rule.failure(detail)),
            Err(PredicateError::Format(error)) => {
                debug!(field = rule.field_name(), %error, "input format error recorded as failure");
                errors.add(rule.failure(None));
            }
            Err(PredicateError::Lookup(LookupError::Cancelled)) => {
                return Err(EvaluationError::Cancelled);
            }
            Err(PredicateError::Lookup(source)) => {
                return Err(EvaluationError::Lookup {
                    field: rule.field_name().to_owned(),
                    source,
                });
            }
        }
    }

    debug!(
        rule_sets = ?selected,
        evaluated = applied.len(),
        skipped,
        failures = errors.len(),
        "evaluation finished"
    );
    Ok(errors)
}

/// Rules of the selected sets, in selection then declaration order.
fn select<'r, T>(rule_sets: &'r [RuleSet<T>], selected: &[&str]) -> Vec<&'r Rule<T>> {
    let mut seen: Vec<&str> = Vec::with_capacity(selected.len());
    let mut rules = Vec::new();

    for &name in selected {
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);

        let mut matched = false;
        for set in rule_sets.iter().filter(|set| set.name() == name) {
            matched = true;
            rules.extend(set.rules());
        }
        if !matched {
            debug!(rule_set = name, "selected rule set is not declared");
        }
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::hetu;
    use crate::validators::not_blank;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct Form {
        name: String,
        ssn: String,
    }

    fn form(name: &str, ssn: &str) -> Form {
        Form {
            name: name.to_owned(),
            ssn: ssn.to_owned(),
        }
    }

    fn rule_sets() -> Vec<RuleSet<Form>> {
        vec![
            RuleSet::new("Local")
                .rule(
                    Rule::field("Name", |f: &Form| f.name.as_str())
                        .must_pass(not_blank())
                        .with_code("name.required"),
                )
                .rule(
                    Rule::field("Ssn", |f: &Form| f.ssn.as_str())
                        .try_must(|ssn: &str| {
                            let reference = chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
                                .unwrap_or_default();
                            hetu::parse(ssn, reference).map(|record| record.valid)
                        })
                        .with_code("ssn.invalid")
                        .when(|f: &Form| !f.ssn.is_empty()),
                ),
            RuleSet::new("Server").rule(
                Rule::field("Name", |f: &Form| f.name.as_str())
                    .must_async(|name: String, _cancel| async move {
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        Ok::<_, LookupError>(name != "Taken")
                    })
                    .with_code("name.already_used"),
            ),
        ]
    }

    #[tokio::test]
    async fn test_selection_order_and_dedup() {
        let sets = rule_sets();
        let cancel = CancellationToken::new();
        let errors = evaluate(&sets, &form("Taken", "bad"), &["Server", "Local", "Server"], &cancel)
            .await
            .unwrap();
        assert_eq!(errors.codes(), vec!["name.already_used", "ssn.invalid"]);
    }

    #[tokio::test]
    async fn test_format_error_becomes_failure() {
        let sets = rule_sets();
        let cancel = CancellationToken::new();
        let errors = evaluate(&sets, &form("Aino", "not-a-hetu"), &["Local"], &cancel)
            .await
            .unwrap();
        assert_eq!(errors.codes(), vec!["ssn.invalid"]);
        assert_eq!(errors.errors()[0].rule_set(), Some("Local"));
    }

    #[tokio::test]
    async fn test_guard_skips_rule() {
        let sets = rule_sets();
        let cancel = CancellationToken::new();
        let errors = evaluate(&sets, &form("Aino", ""), &["Local"], &cancel)
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_rule_set_selects_nothing() {
        let sets = rule_sets();
        let cancel = CancellationToken::new();
        let errors = evaluate(&sets, &form("", ""), &["Remote"], &cancel)
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let sets = rule_sets();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = evaluate(&sets, &form("", ""), &["Local"], &cancel).await;
        assert_eq!(result, Err(EvaluationError::Cancelled));
    }

    #[test]
    fn test_lookup_error_display() {
        let error = EvaluationError::Lookup {
            field: "Name".into(),
            source: LookupError::unavailable("used names", "timeout"),
        };
        assert_eq!(error.to_string(), "lookup for field 'Name' failed");
        assert_eq!(EvaluationError::Cancelled.to_string(), "validation cancelled");
    }
}
