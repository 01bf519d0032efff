//! Subcommand handlers.
//!
//! Every handler returns the process exit code: `0` success, `1` when the
//! input is invalid or not found, `130` when interrupted. Errors propagate
//! as `anyhow::Error` and exit with `2`.

mod identifiers;
mod prefill;
mod validate;

use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

pub use identifiers::{run_check, run_generate, run_hetu, run_number};
pub use prefill::run_prefill;
pub use validate::run_validate;

/// Exit code for invalid input.
pub const EXIT_INVALID: u8 = 1;
/// Exit code after Ctrl-C.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Token that fires on Ctrl-C.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, cancelling");
            trigger.cancel();
        }
    });
    token
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn status(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}
