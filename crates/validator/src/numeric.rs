//! Locale-aware number parsing for Finnish form input.
//!
//! Users type `1 234,56`, `1 234,56 €` or `12,5 %`; pasted values may use the
//! invariant `1,234.56` form instead. Every parser tries the Finnish
//! convention first and falls back to the invariant one, so `1,234` reads as
//! one point two three four.
//!
//! All functions return `None` instead of failing and never panic.

use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

const NBSP: char = '\u{00A0}';
const MINUS_SIGN: char = '\u{2212}';

static EUR_TOKEN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?i)eur").expect("EUR pattern is a valid regex"));

/// Decimal and group separators of one number convention.
#[derive(Debug, Clone, Copy)]
struct Convention {
    decimal: char,
    groups: &'static [char],
}

const FINNISH: Convention = Convention {
    decimal: ',',
    groups: &[' ', NBSP],
};

const INVARIANT: Convention = Convention {
    decimal: '.',
    groups: &[','],
};

/// Parses a decimal written in Finnish or invariant notation.
///
/// ```rust
/// use lomake_validator::numeric::try_parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(try_parse_decimal("1 234,56"), Some(Decimal::new(123_456, 2)));
/// assert_eq!(try_parse_decimal("1,234.56"), Some(Decimal::new(123_456, 2)));
/// assert_eq!(try_parse_decimal("abc"), None);
/// ```
pub fn try_parse_decimal(text: &str) -> Option<Decimal> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return None;
    }
    parse_with(&normalized, FINNISH).or_else(|| parse_with(&normalized, INVARIANT))
}

/// Parses a euro amount, ignoring `€` and any `EUR` token.
pub fn try_parse_currency_eur(text: &str) -> Option<Decimal> {
    if text.trim().is_empty() {
        return None;
    }
    let without_symbol = text.replace('€', "");
    let without_code = EUR_TOKEN.replace_all(&without_symbol, "");
    try_parse_decimal(&without_code)
}

/// Parses a percentage, ignoring one trailing `%`.
pub fn try_parse_percentage(text: &str) -> Option<Decimal> {
    let normalized = normalize_whitespace(text);
    let number = normalized.strip_suffix('%').unwrap_or(&normalized);
    try_parse_decimal(number)
}

fn normalize_whitespace(text: &str) -> String {
    text.replace(NBSP, " ").trim().to_owned()
}

fn is_sign(c: char) -> bool {
    matches!(c, '-' | '+' | MINUS_SIGN)
}

fn parse_with(text: &str, convention: Convention) -> Option<Decimal> {
    let (negative, body) = split_sign(text)?;

    let mut digits = String::with_capacity(body.len() + 1);
    let mut seen_digit = false;
    let mut in_fraction = false;
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            digits.push(c);
            seen_digit = true;
        } else if c == convention.decimal {
            if in_fraction {
                return None;
            }
            in_fraction = true;
            digits.push('.');
        } else if convention.groups.contains(&c) {
            // Group separators sit between integer digits only.
            let next_is_digit = chars.peek().is_some_and(char::is_ascii_digit);
            if in_fraction || !seen_digit || !next_is_digit {
                return None;
            }
        } else {
            return None;
        }
    }

    if !seen_digit {
        return None;
    }
    if digits.ends_with('.') {
        digits.pop();
    }
    if digits.starts_with('.') {
        digits.insert(0, '0');
    }

    let value = Decimal::from_str(&digits).ok()?;
    Some(if negative { -value } else { value })
}

/// Splits one leading or trailing sign from `text`.
///
/// Returns `None` when signs appear on both ends.
fn split_sign(text: &str) -> Option<(bool, &str)> {
    let mut negative = false;
    let mut body = text;

    if let Some(first) = body.chars().next().filter(|c| is_sign(*c)) {
        negative = first != '+';
        body = &body[first.len_utf8()..];
        if body.chars().next_back().is_some_and(is_sign) {
            return None;
        }
    } else if let Some(last) = body.chars().next_back().filter(|c| is_sign(*c)) {
        negative = last != '+';
        body = &body[..body.len() - last.len_utf8()];
    }

    Some((negative, body.trim()))
}
