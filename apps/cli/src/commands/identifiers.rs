use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use lomake_validator::identifiers::business_id::{
    generate_business_id, generate_vat_number, is_valid_business_id, is_valid_vat_number,
};
use lomake_validator::identifiers::{hetu, iban};
use lomake_validator::numeric::{try_parse_currency_eur, try_parse_decimal, try_parse_percentage};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{EXIT_INVALID, print_json, status};
use crate::cli::{CheckArgs, CheckKind, GenerateArgs, GenerateKind, HetuArgs, NumberArgs, NumberKind};

/// Decodes a personal identity code and prints the record.
pub fn run_hetu(args: &HetuArgs) -> Result<ExitCode> {
    let reference = args.reference_date.unwrap_or_else(|| Local::now().date_naive());
    match hetu::parse(args.code.trim(), reference) {
        Ok(record) => {
            print_json(&record)?;
            Ok(status(record.valid))
        }
        Err(err) => {
            eprintln!("{}: {err}", args.code);
            Ok(ExitCode::from(EXIT_INVALID))
        }
    }
}

/// Prints `valid` or `invalid`.
pub fn run_check(args: &CheckArgs) -> ExitCode {
    let valid = match args.kind {
        CheckKind::BusinessId => is_valid_business_id(&args.value),
        CheckKind::Vat => is_valid_vat_number(&args.value),
        CheckKind::Iban => iban::is_valid(&args.value),
    };
    println!("{}", if valid { "valid" } else { "invalid" });
    status(valid)
}

/// Prints `count` generated identifiers, one per line.
pub fn run_generate(args: &GenerateArgs) -> ExitCode {
    let mut rng = args.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    for _ in 0..args.count {
        match args.kind {
            GenerateKind::BusinessId => println!("{}", generate_business_id(&mut rng)),
            GenerateKind::Vat => println!("{}", generate_vat_number(&mut rng)),
        }
    }
    ExitCode::SUCCESS
}

/// Parses a number and prints it in invariant form.
pub fn run_number(args: &NumberArgs) -> ExitCode {
    let parsed = match args.kind {
        NumberKind::Decimal => try_parse_decimal(&args.text),
        NumberKind::Eur => try_parse_currency_eur(&args.text),
        NumberKind::Percent => try_parse_percentage(&args.text),
    };
    match parsed {
        Some(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("not a number: {:?}", args.text);
            ExitCode::from(EXIT_INVALID)
        }
    }
}
