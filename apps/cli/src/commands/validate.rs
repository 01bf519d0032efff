use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use lomake_forms::integrations::StaticUsedNameLookup;
use lomake_forms::{
    FINNISH, customer_intake_validator, prefill_validator, sample_validator,
    validation_examples_validator,
};
use lomake_validator::prelude::{CancellationToken, EvaluationError, Validator};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{EXIT_INTERRUPTED, print_json, status};
use crate::cli::{FormArg, ValidateArgs};
use crate::config::ValidationSettings;

/// Validates one form model read from `--input` or stdin.
pub async fn run_validate(
    args: &ValidateArgs,
    settings: &ValidationSettings,
    cancel: &CancellationToken,
) -> Result<ExitCode> {
    let input = read_input(args.input.as_deref())?;
    let defaults = settings.default_rule_sets.iter().cloned();

    match args.form {
        FormArg::Sample => {
            let lookup = Arc::new(StaticUsedNameLookup::new(settings.used_names.iter().cloned()));
            let validator = sample_validator(lookup).with_default_rule_sets(defaults);
            run_form(&validator, &input, args, cancel).await
        }
        FormArg::Examples => {
            let validator = validation_examples_validator().with_default_rule_sets(defaults);
            run_form(&validator, &input, args, cancel).await
        }
        FormArg::Customer => {
            let today = Local::now().date_naive();
            let validator = customer_intake_validator(today).with_default_rule_sets(defaults);
            run_form(&validator, &input, args, cancel).await
        }
        FormArg::Prefill => {
            let validator = prefill_validator()
                .context("failed to build prefill validator")?
                .with_default_rule_sets(defaults);
            run_form(&validator, &input, args, cancel).await
        }
    }
}

async fn run_form<T: DeserializeOwned>(
    validator: &Validator<T>,
    input: &str,
    args: &ValidateArgs,
    cancel: &CancellationToken,
) -> Result<ExitCode> {
    let model: T = serde_json::from_str(input).context("input is not a valid form model")?;
    let selected: Vec<&str> = args.rule_sets.iter().map(String::as_str).collect();
    debug!(form = ?args.form, rule_sets = ?selected, "validating");

    let outcome = match validator.validate(&model, Some(selected.as_slice()), cancel).await {
        Ok(outcome) => outcome,
        Err(EvaluationError::Cancelled) => {
            eprintln!("validation cancelled");
            return Ok(ExitCode::from(EXIT_INTERRUPTED));
        }
        Err(err) => return Err(err).context("validation failed"),
    };

    let outcome = if args.localize {
        outcome.localized(&FINNISH)
    } else {
        outcome
    };
    info!(valid = outcome.valid, fields = outcome.errors_by_field.len(), "validation finished");

    print_json(&outcome)?;
    Ok(status(outcome.valid))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}
