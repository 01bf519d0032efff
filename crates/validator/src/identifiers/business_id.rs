//! Finnish business ID (Y-tunnus) and VAT number.
//!
//! A business ID is seven base digits, a hyphen and one check digit. The
//! check digit is derived from a weighted sum modulo 11; a remainder of 1
//! never produces a valid ID. The Finnish VAT number is the same digits
//! prefixed with `FI` and without the hyphen.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;
use serde::Serialize;

use super::FormatError;

const KIND: &str = "business ID";

/// Country prefix of Finnish VAT numbers.
pub const FINNISH_VAT_PREFIX: &str = "FI";

const WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];

static BUSINESS_ID_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[0-9]{7}-[0-9]$").expect("business ID pattern is a valid regex")
});

static VAT_NUMBER_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^FI[0-9]{8}$").expect("VAT number pattern is a valid regex")
});

/// A business ID whose check digit has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct BusinessId {
    base: u32,
    check: u8,
}

impl BusinessId {
    /// Builds an ID from a seven-digit base number, computing the check digit.
    ///
    /// Returns `None` if `base` has more than seven digits or its weighted
    /// sum leaves remainder 1.
    pub fn from_base(base: u32) -> Option<Self> {
        if base > 9_999_999 {
            return None;
        }
        let check = checksum_digits(&base_digits(base))?;
        Some(Self { base, check })
    }

    /// The seven base digits as a number.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// The check digit.
    pub const fn check_digit(&self) -> u8 {
        self.check
    }

    /// VAT number for `country`, e.g. `FI17902350`.
    pub fn vat_number(&self, country: &str) -> String {
        format!("{country}{:07}{}", self.base, self.check)
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:07}-{}", self.base, self.check)
    }
}

impl From<BusinessId> for String {
    fn from(id: BusinessId) -> Self {
        id.to_string()
    }
}

impl FromStr for BusinessId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !BUSINESS_ID_REGEX.is_match(s) {
            return Err(FormatError::malformed(KIND, "expected DDDDDDD-D"));
        }
        let base: u32 = s[..7]
            .parse()
            .map_err(|_| FormatError::malformed(KIND, "base is not numeric"))?;
        let given = s.as_bytes()[8] - b'0';
        match Self::from_base(base) {
            Some(id) if id.check == given => Ok(id),
            Some(_) => Err(FormatError::malformed(KIND, "check digit mismatch")),
            None => Err(FormatError::malformed(KIND, "base leaves remainder 1")),
        }
    }
}

/// Returns true for a well-formed business ID with a matching check digit.
pub fn is_valid_business_id(id: &str) -> bool {
    id.parse::<BusinessId>().is_ok()
}

/// Returns true for `FI` followed by eight digits forming a valid business ID.
pub fn is_valid_vat_number(vat: &str) -> bool {
    if !VAT_NUMBER_REGEX.is_match(vat) {
        return false;
    }
    let as_business_id = format!("{}-{}", &vat[2..9], &vat[9..10]);
    is_valid_business_id(&as_business_id)
}

/// Check digit for seven base digits.
///
/// Returns `None` when the weighted sum leaves remainder 1 (no valid ID
/// exists for that base) or when `base` is not exactly seven ASCII digits.
///
/// ```rust
/// use lomake_validator::identifiers::business_id::checksum;
///
/// assert_eq!(checksum("1629284"), Some(5));
/// assert_eq!(checksum("1375045"), None);
/// ```
pub fn checksum(base: &str) -> Option<u8> {
    let bytes = base.as_bytes();
    if bytes.len() != WEIGHTS.len() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut digits = [0u8; 7];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    checksum_digits(&digits)
}

/// Draws a random valid business ID with a base in `1_000_000..2_000_000`.
pub fn generate_business_id<R: Rng>(rng: &mut R) -> BusinessId {
    loop {
        if let Some(id) = BusinessId::from_base(rng.random_range(1_000_000..2_000_000)) {
            return id;
        }
    }
}

/// Draws a random valid Finnish VAT number.
pub fn generate_vat_number<R: Rng>(rng: &mut R) -> String {
    generate_business_id(rng).vat_number(FINNISH_VAT_PREFIX)
}

fn checksum_digits(digits: &[u8; 7]) -> Option<u8> {
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        0 => Some(0),
        1 => None,
        r => Some((11 - r) as u8),
    }
}

fn base_digits(mut base: u32) -> [u8; 7] {
    let mut digits = [0u8; 7];
    for slot in digits.iter_mut().rev() {
        *slot = (base % 10) as u8;
        base /= 10;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_checksum_known_value() {
        assert_eq!(checksum("1629284"), Some(5));
        assert_eq!(checksum("1790235"), Some(0));
    }

    #[test]
    fn test_checksum_rejects_remainder_one_and_bad_shape() {
        assert_eq!(checksum("1375045"), None);
        assert_eq!(checksum("162928"), None);
        assert_eq!(checksum("16292a4"), None);
    }

    #[test]
    fn test_from_base_pads_leading_zeros() {
        let id = BusinessId::from_base(114_162).unwrap();
        assert_eq!(id.to_string(), "0114162-2");
        assert_eq!(id.vat_number("FI"), "FI01141622");
        assert!(BusinessId::from_base(10_000_000).is_none());
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "2617416-5".parse::<BusinessId>(),
            Err(FormatError::Malformed { reason: "check digit mismatch", .. })
        ));
        assert!(matches!(
            "1375045-1".parse::<BusinessId>(),
            Err(FormatError::Malformed { reason: "base leaves remainder 1", .. })
        ));
        assert!("261741-4".parse::<BusinessId>().is_err());
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        assert!(!is_valid_business_id("162928\u{0664}-5"));
        assert!(!is_valid_business_id("1629284-\u{0665}"));
        assert!(!is_valid_vat_number("FI1629284\u{0665}"));
        assert!(!is_valid_vat_number("FI\u{0661}6292845"));
    }

    #[test]
    fn test_serializes_as_display_string() {
        let id: BusinessId = "1629284-5".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1629284-5\"");
    }

    #[test]
    fn test_generators_are_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(generate_business_id(&mut a), generate_business_id(&mut b));
        assert_eq!(generate_vat_number(&mut a), generate_vat_number(&mut b));
    }
}
