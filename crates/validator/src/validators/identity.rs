//! Identifier and locale-number checks as reusable field validators.
//!
//! These wrap [`crate::identifiers`] and [`crate::numeric`] so rules can bind
//! them with `must_pass` like any other check.

use crate::foundation::ValidationError;
use crate::identifiers::{self, hetu};
use crate::numeric;

crate::validator! {
    /// Finnish personal identity code with a matching checksum.
    pub FinnishSsn for str;
    rule(input) { hetu::is_valid(input) }
    error(input) { ValidationError::invalid_format("hetu") }
    fn finnish_ssn();
}

crate::validator! {
    /// Finnish business ID (`DDDDDDD-D`) with a matching check digit.
    pub BusinessIdFormat for str;
    rule(input) { identifiers::business_id::is_valid_business_id(input) }
    error(input) { ValidationError::invalid_format("business_id") }
    fn business_id();
}

crate::validator! {
    /// Finnish VAT number (`FIDDDDDDDD`).
    pub VatNumber for str;
    rule(input) { identifiers::business_id::is_valid_vat_number(input) }
    error(input) { ValidationError::invalid_format("vat_number") }
    fn vat_number();
}

crate::validator! {
    /// IBAN with a valid MOD 97-10 checksum; whitespace is ignored.
    pub Iban for str;
    rule(input) { identifiers::iban::is_valid(input) }
    error(input) { ValidationError::invalid_format("iban") }
    fn iban();
}

crate::validator! {
    /// Text that parses as a Finnish or invariant decimal.
    pub DecimalText for str;
    rule(input) { numeric::try_parse_decimal(input).is_some() }
    error(input) { ValidationError::invalid_format("decimal") }
    fn decimal_text();
}
