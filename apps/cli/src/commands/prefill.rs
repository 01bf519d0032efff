use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use lomake_forms::integrations::MockPrefillLookup;
use lomake_forms::prefill::lookup_prefill;
use lomake_validator::prelude::{CancellationToken, LookupError};

use super::{EXIT_INTERRUPTED, print_json, status};
use crate::cli::PrefillArgs;

/// Looks `name` up in the mock integration and prints the response.
pub async fn run_prefill(args: &PrefillArgs, cancel: &CancellationToken) -> Result<ExitCode> {
    let lookup = MockPrefillLookup::default();
    let timeout = Duration::from_millis(args.timeout_ms);

    let answer = tokio::time::timeout(timeout, lookup_prefill(&lookup, &args.name, cancel.clone())).await;
    let response = match answer {
        Ok(Ok(response)) => response,
        Ok(Err(LookupError::Cancelled)) => {
            eprintln!("lookup cancelled");
            return Ok(ExitCode::from(EXIT_INTERRUPTED));
        }
        Ok(Err(err)) => return Err(err).context("prefill lookup failed"),
        Err(_) => {
            cancel.cancel();
            bail!("prefill lookup timed out after {} ms", args.timeout_ms);
        }
    };

    print_json(&response)?;
    Ok(status(response.found))
}
