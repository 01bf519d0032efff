//! Built-in field checks
//!
//! # Categories
//!
//! - **Presence and length**: [`NotBlank`], [`MaxLength`], [`NonEmpty`]
//! - **Range**: [`Min`], [`InRange`]
//! - **Content**: [`Email`], [`MatchesRegex`]
//! - **Identifiers and numbers**: [`FinnishSsn`], [`BusinessIdFormat`],
//!   [`VatNumber`], [`Iban`], [`DecimalText`]
//!
//! ```rust
//! use lomake_validator::prelude::*;
//!
//! let city = not_blank().and(max_length(120));
//! assert!(city.validate("Tampere").is_ok());
//! ```

pub mod content;
pub mod identity;
pub mod length;
pub mod range;

pub use content::{Email, MatchesRegex, email, matches_regex};
pub use identity::{
    BusinessIdFormat, DecimalText, FinnishSsn, Iban, VatNumber, business_id, decimal_text,
    finnish_ssn, iban, vat_number,
};
pub use length::{MaxLength, NonEmpty, NotBlank, max_length, non_empty, not_blank};
pub use range::{InRange, Min, in_range, min};
