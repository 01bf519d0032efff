//! IBAN validation (ISO 13616 structure, ISO 7064 MOD 97-10 checksum).

/// IBAN lengths per ISO 13616 country code, sorted for binary search.
#[rustfmt::skip]
const COUNTRY_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20),
    ("BE", 16), ("BG", 22), ("BH", 22), ("BR", 29), ("BY", 28), ("CH", 21),
    ("CR", 22), ("CY", 28), ("CZ", 24), ("DE", 22), ("DK", 18), ("DO", 28),
    ("EE", 20), ("ES", 24), ("FI", 18), ("FO", 18), ("FR", 27), ("GB", 22),
    ("GE", 22), ("GI", 23), ("GL", 18), ("GR", 27), ("GT", 28), ("HR", 21),
    ("HU", 28), ("IE", 22), ("IL", 23), ("IS", 26), ("IT", 27), ("JO", 30),
    ("KW", 30), ("KZ", 20), ("LB", 28), ("LI", 21), ("LT", 20), ("LU", 20),
    ("LV", 21), ("MC", 27), ("MD", 24), ("ME", 22), ("MK", 19), ("MR", 27),
    ("MT", 31), ("MU", 30), ("NL", 18), ("NO", 15), ("PK", 24), ("PL", 28),
    ("PS", 29), ("PT", 25), ("QA", 29), ("RO", 24), ("RS", 22), ("SA", 24),
    ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27), ("TN", 24), ("TR", 26),
    ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20),
];

/// Expected IBAN length for a country code, `None` if unknown.
pub fn country_length(country: &str) -> Option<usize> {
    COUNTRY_LENGTHS
        .binary_search_by(|(code, _)| (*code).cmp(country))
        .ok()
        .map(|i| COUNTRY_LENGTHS[i].1)
}

/// Removes all whitespace and upper-cases the remainder.
pub fn normalize(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Returns true for a structurally valid IBAN with a correct checksum.
///
/// Whitespace anywhere is ignored and letters are case-insensitive, so the
/// printed form `NL91 ABNA 0417 1643 00` is accepted.
///
/// ```rust
/// use lomake_validator::identifiers::iban;
///
/// assert!(iban::is_valid("NL91ABNA0417164300"));
/// assert!(iban::is_valid("nl91 abna 0417 1643 00"));
/// assert!(!iban::is_valid("NL91ABNA0417164301"));
/// ```
pub fn is_valid(iban: &str) -> bool {
    let iban = normalize(iban);
    let bytes = iban.as_bytes();
    if bytes.len() < 5 || !bytes.iter().all(u8::is_ascii_alphanumeric) {
        return false;
    }
    if !bytes[..2].iter().all(u8::is_ascii_uppercase) || !bytes[2..4].iter().all(u8::is_ascii_digit)
    {
        return false;
    }
    if country_length(&iban[..2]) != Some(bytes.len()) {
        return false;
    }
    mod97(bytes[4..].iter().chain(&bytes[..4])) == 1
}

/// Streams the rearranged IBAN through MOD 97, expanding letters to 10..=35.
fn mod97<'a>(chars: impl Iterator<Item = &'a u8>) -> u32 {
    chars.fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            (acc * 10 + u32::from(b - b'0')) % 97
        } else {
            let value = u32::from(b - b'A') + 10;
            (acc * 100 + value) % 97
        }
    })
}
