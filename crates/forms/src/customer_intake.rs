//! Customer intake: contact details, identifiers and deal size.

use chrono::{Local, NaiveDate};
use lomake_validator::identifiers::hetu;
use lomake_validator::prelude::*;
use lomake_validator::validators::{business_id, vat_number};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::options::{ContractType, IndustryType};
use crate::validation_examples::MAX_EUR_AMOUNT;

/// A new customer as entered by sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerIntakeForm {
    pub customer_name: String,
    pub contact_email: String,
    pub social_security_number: String,
    pub business_id: String,
    pub vat_number: String,
    pub seats: i32,
    pub estimated_annual_value: Decimal,
    pub expected_start_date: NaiveDate,
    pub notes: String,
    pub contract_type: ContractType,
    pub industry: IndustryType,
}

impl Default for CustomerIntakeForm {
    /// Empty form starting today.
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            contact_email: String::new(),
            social_security_number: String::new(),
            business_id: String::new(),
            vat_number: String::new(),
            seats: 0,
            estimated_annual_value: Decimal::ZERO,
            expected_start_date: Local::now().date_naive(),
            notes: String::new(),
            contract_type: ContractType::Unknown,
            industry: IndustryType::Unknown,
        }
    }
}

type Form = CustomerIntakeForm;

fn ssn(f: &Form) -> &str {
    &f.social_security_number
}

fn filled(read: fn(&Form) -> &str) -> impl Fn(&Form) -> bool + Send + Sync + 'static {
    move |form: &Form| !read(form).trim().is_empty()
}

/// Builds the customer intake validator.
///
/// `today` anchors the start-date check and the personal identity code's
/// age calculation. Identifier rules only run for non-blank input.
pub fn customer_intake_validator(today: NaiveDate) -> Validator<CustomerIntakeForm> {
    let local = RuleSet::new("Local")
        .rule(
            Rule::field("CustomerName", |f: &Form| f.customer_name.as_str())
                .must_pass(not_blank())
                .with_code("customer_name.required"),
        )
        .rule(
            Rule::field("CustomerName", |f: &Form| f.customer_name.as_str())
                .must_pass(max_length(120))
                .with_code("customer_name.length"),
        )
        .rule(
            Rule::field("ContactEmail", |f: &Form| f.contact_email.as_str())
                .must_pass(not_blank())
                .with_code("contact_email.required"),
        )
        .rule(
            Rule::field("ContactEmail", |f: &Form| f.contact_email.as_str())
                .must_pass(email().when(|text: &str| !text.trim().is_empty()))
                .with_code("contact_email.invalid"),
        )
        .rule(
            Rule::field("SocialSecurityNumber", ssn)
                .try_must(move |code: &str| Ok(hetu::parse(code, today)?.valid))
                .with_code("ssn.invalid")
                .when(filled(ssn)),
        )
        .rule(
            Rule::field("BusinessId", |f: &Form| f.business_id.as_str())
                .must_pass(business_id())
                .with_code("business_id.invalid")
                .when(filled(|f| &f.business_id)),
        )
        .rule(
            Rule::field("VatNumber", |f: &Form| f.vat_number.as_str())
                .must_pass(vat_number())
                .with_code("vat_number.invalid")
                .when(filled(|f| &f.vat_number)),
        )
        .rule(
            Rule::field("Seats", |f: &Form| &f.seats)
                .must_pass(in_range(1, 5000))
                .with_code("seats.range"),
        )
        .rule(
            Rule::field("EstimatedAnnualValue", |f: &Form| &f.estimated_annual_value)
                .must_pass(in_range(Decimal::ZERO, MAX_EUR_AMOUNT))
                .with_code("arr.range"),
        )
        .rule(
            Rule::field("ExpectedStartDate", |f: &Form| &f.expected_start_date)
                .must_pass(min(today))
                .with_code("start_date.future"),
        )
        .rule(
            Rule::field("ContractType", |f: &Form| &f.contract_type)
                .must(|contract: &ContractType| *contract != ContractType::Unknown)
                .with_code("contract_type.required"),
        )
        .rule(
            Rule::field("Industry", |f: &Form| &f.industry)
                .must(|industry: &IndustryType| *industry != IndustryType::Unknown)
                .with_code("industry.required"),
        )
        .rule(
            Rule::field("Notes", |f: &Form| f.notes.as_str())
                .must_pass(max_length(500))
                .with_code("notes.length"),
        );

    Validator::new(vec![local])
}
