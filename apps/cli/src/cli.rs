//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use lomake_log::Format;

#[derive(Debug, Parser)]
#[command(
    name = "lomake",
    version,
    about = "Validate forms and Finnish identifiers",
    long_about = "Validate demo forms by rule set and check Finnish personal identity codes,\n\
                  business IDs, VAT numbers, IBANs and locale-formatted numbers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./lomake.toml when present).
    #[arg(long, value_name = "PATH", global = true, env = "LOMAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `info,lomake_validator=trace`.
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a form read as JSON and print the outcome.
    Validate(ValidateArgs),

    /// Decode a Finnish personal identity code.
    Hetu(HetuArgs),

    /// Check a business ID, VAT number or IBAN.
    Check(CheckArgs),

    /// Generate valid business IDs or VAT numbers.
    Generate(GenerateArgs),

    /// Parse a Finnish or invariant number.
    Number(NumberArgs),

    /// Look up prefill data for a name.
    Prefill(PrefillArgs),
}

#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Form to validate.
    #[arg(long, value_enum)]
    pub form: FormArg,

    /// JSON file with the form model (default: stdin).
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Rule set to run; repeat for several (default: configured sets).
    #[arg(long = "rule-set", value_name = "NAME")]
    pub rule_sets: Vec<String>,

    /// Replace messages with their Finnish translations.
    #[arg(long)]
    pub localize: bool,
}

#[derive(Debug, Parser)]
pub struct HetuArgs {
    /// Personal identity code, e.g. 131052-308T.
    pub code: String,

    /// Date the age is computed at (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Identifier kind.
    #[arg(value_enum)]
    pub kind: CheckKind,

    /// Value to check.
    pub value: String,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Identifier kind.
    #[arg(value_enum)]
    pub kind: GenerateKind,

    /// How many to generate.
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Parser)]
pub struct NumberArgs {
    /// How to read the text.
    #[arg(value_enum)]
    pub kind: NumberKind,

    /// Text to parse, e.g. "1 234,56 €".
    pub text: String,
}

#[derive(Debug, Parser)]
pub struct PrefillArgs {
    /// Name to look up.
    pub name: String,

    /// Give up after this many milliseconds.
    #[arg(long = "timeout-ms", default_value_t = 5_000)]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    Sample,
    Examples,
    Customer,
    Prefill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    BusinessId,
    Vat,
    Iban,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerateKind {
    BusinessId,
    Vat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumberKind {
    Decimal,
    Eur,
    Percent,
}

/// CLI log format choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for Format {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeated_rule_sets() {
        let cli = Cli::parse_from([
            "lomake", "validate", "--form", "sample", "--rule-set", "Local", "--rule-set", "Server",
        ]);
        let Command::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.form, FormArg::Sample);
        assert_eq!(args.rule_sets, vec!["Local", "Server"]);
    }

    #[test]
    fn test_kebab_case_kinds() {
        let cli = Cli::parse_from(["lomake", "check", "business-id", "2617416-4"]);
        assert!(matches!(
            cli.command,
            Command::Check(CheckArgs { kind: CheckKind::BusinessId, .. })
        ));
    }
}
