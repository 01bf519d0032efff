//! Finnish personal identity code (henkilötunnus, "hetu").
//!
//! Layout: `DDMMYYCNNNK` where `C` is the century marker, `NNN` the
//! individual number (odd for men, even for women) and `K` the checksum
//! character.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use lomake_validator::identifiers::hetu::{self, Sex};
//!
//! let today = NaiveDate::from_ymd_opt(2015, 2, 2).unwrap();
//! let record = hetu::parse("010199-8148", today).unwrap();
//! assert!(record.valid);
//! assert_eq!(record.sex, Sex::Female);
//! assert_eq!(record.age_in_years, 16);
//! ```

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use super::FormatError;

const KIND: &str = "personal identity code";

static HETU_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^(0[1-9]|[12][0-9]|3[01])(0[1-9]|1[0-2])([5-9][0-9]\+|[0-9][0-9][-U-Y]|[012][0-9][A-F])[0-9]{3}[0-9A-Z]$",
    )
    .expect("hetu grammar is a valid regex")
});

/// Checksum alphabet indexed by `DDMMYYNNN mod 31`.
const CHECKSUM_TABLE: &[u8; 31] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Sex encoded by the parity of the individual number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Odd individual number.
    Male,
    /// Even individual number.
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

/// Decoded personal identity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HetuRecord {
    /// Whether the supplied checksum character matches the computed one.
    pub valid: bool,
    /// Sex derived from the individual number.
    pub sex: Sex,
    /// Birth date after applying the century marker.
    pub date_of_birth: NaiveDate,
    /// Completed years at the reference date.
    pub age_in_years: i32,
}

/// Parses `code` and computes the age relative to `reference`.
///
/// Grammar violations and unknown century markers yield
/// [`FormatError::Malformed`]; a date that does not exist (31 April, 29
/// February of a non-leap year) yields [`FormatError::InvalidDate`]. A wrong
/// checksum is reported as `valid == false`.
pub fn parse(code: &str, reference: NaiveDate) -> Result<HetuRecord, FormatError> {
    if !HETU_REGEX.is_match(code) {
        return Err(FormatError::malformed(KIND, "expected DDMMYYCNNNK"));
    }

    // Every class in the grammar is ASCII-only, so the match is 11 bytes.
    let bytes = code.as_bytes();
    let day = two_digits(&bytes[0..2]);
    let month = two_digits(&bytes[2..4]);
    let short_year = two_digits(&bytes[4..6]) as i32;
    let marker = char::from(bytes[6]);
    let individual = &code[7..10];
    let supplied = bytes[10];

    let century = century_base(marker)
        .ok_or_else(|| FormatError::malformed(KIND, "unknown century marker"))?;
    let year = century + short_year;

    if day > days_in_month(year, month) {
        return Err(FormatError::InvalidDate { year, month, day });
    }
    let date_of_birth =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(FormatError::InvalidDate {
            year,
            month,
            day,
        })?;

    let individual_number: u32 = individual
        .parse()
        .map_err(|_| FormatError::malformed(KIND, "individual number is not numeric"))?;

    let expected = expected_checksum(&code[0..6], individual_number)
        .ok_or_else(|| FormatError::malformed(KIND, "date part is not numeric"))?;

    let sex = if individual_number % 2 == 1 {
        Sex::Male
    } else {
        Sex::Female
    };

    Ok(HetuRecord {
        valid: supplied == expected,
        sex,
        date_of_birth,
        age_in_years: age_in_years(date_of_birth, reference),
    })
}

/// Returns true when `code` parses against today's date and its checksum
/// matches. Any format error counts as invalid.
pub fn is_valid(code: &str) -> bool {
    parse(code, Local::now().date_naive()).is_ok_and(|record| record.valid)
}

/// Gregorian leap year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Checksum character for a `DDMMYY` date part and individual number.
///
/// Returns `None` if `date_part` is not six ASCII digits.
pub fn expected_checksum(date_part: &str, individual_number: u32) -> Option<u8> {
    if date_part.len() != 6 || !date_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date: u64 = date_part.parse().ok()?;
    let index = (date * 1000 + u64::from(individual_number % 1000)) % 31;
    Some(CHECKSUM_TABLE[index as usize])
}

fn century_base(marker: char) -> Option<i32> {
    match marker {
        'A'..='F' => Some(2000),
        'U'..='Y' | '-' => Some(1900),
        '+' => Some(1800),
        _ => None,
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(&days) = DAYS_IN_MONTH.get(month.wrapping_sub(1) as usize) else {
        return 0;
    };
    if month == 2 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

fn age_in_years(date_of_birth: NaiveDate, reference: NaiveDate) -> i32 {
    let age = reference.year() - date_of_birth.year();
    let birthday_passed =
        (reference.month(), reference.day()) >= (date_of_birth.month(), date_of_birth.day());
    if birthday_passed { age } else { age - 1 }
}

fn two_digits(pair: &[u8]) -> u32 {
    pair.iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b.wrapping_sub(b'0')))
}
