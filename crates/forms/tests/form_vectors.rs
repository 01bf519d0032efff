//! Known-good and known-bad inputs for each demo form.

use std::sync::Arc;

use chrono::NaiveDate;
use lomake_forms::catalog::FINNISH;
use lomake_forms::integrations::StaticUsedNameLookup;
use lomake_forms::{
    ContractType, CustomerIntakeForm, IndustryType, MultiChoice, PrefillForm, SampleForm,
    SingleChoice, ValidationExamplesForm, customer_intake_validator, prefill_validator,
    sample_validator, validation_examples_validator,
};
use lomake_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

async fn local<T: Sync>(validator: &Validator<T>, form: &T) -> ValidationOutcome {
    validator
        .validate(form, Some(&["Local"][..]), &CancellationToken::new())
        .await
        .unwrap()
}

fn codes(outcome: &ValidationOutcome, field: &str) -> Vec<String> {
    outcome.codes_by_field.get(field).cloned().unwrap_or_default()
}

// ============================================================================
// SAMPLE
// ============================================================================

fn sample(name: &str, age: i32) -> SampleForm {
    SampleForm {
        name: name.to_owned(),
        age,
    }
}

#[rstest]
#[case("Taken")]
#[case("taken")]
#[case("ALREADYUSED")]
#[tokio::test]
async fn sample_used_names_ignore_case(#[case] name: &str) {
    let validator = sample_validator(Arc::new(StaticUsedNameLookup::default()));
    let outcome = validator
        .validate(&sample(name, 30), None, &CancellationToken::new())
        .await
        .unwrap();
    assert!(!outcome.valid);
    assert_eq!(codes(&outcome, "Name"), vec!["name.already_used"]);
    assert_eq!(outcome.errors_by_field["Name"], vec!["Name is already used."]);
}

#[tokio::test]
async fn sample_server_reserved_name() {
    let validator = sample_validator(Arc::new(StaticUsedNameLookup::default()));
    let outcome = validator
        .validate(&sample("Server", 30), Some(&["Server"][..]), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(codes(&outcome, "Name"), vec!["name.server_reserved"]);
    assert_eq!(
        outcome.errors_by_field["Name"],
        vec!["Name cannot be 'Server'. (SampleFormValidator)"]
    );
}

#[tokio::test]
async fn sample_valid_passes_both_sets() {
    let validator = sample_validator(Arc::new(StaticUsedNameLookup::default()));
    let outcome = validator
        .validate(&sample("Aino", 18), None, &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.valid);
    assert!(outcome.codes_by_field.is_empty());
    assert!(outcome.errors_by_field.is_empty());
}

#[tokio::test]
async fn sample_localized_in_finnish() {
    let validator = sample_validator(Arc::new(StaticUsedNameLookup::default()));
    let outcome = local(&validator, &sample("", 200)).await.localized(&FINNISH);
    assert_eq!(outcome.errors_by_field["Name"], vec!["Nimi on pakollinen."]);
    assert_eq!(outcome.errors_by_field["Age"], vec!["Iän tulee olla välillä 18–120."]);
    assert_eq!(codes(&outcome, "Age"), vec!["age.range"]);
}

// ============================================================================
// VALIDATION EXAMPLES
// ============================================================================

fn valid_examples() -> ValidationExamplesForm {
    ValidationExamplesForm {
        optional_finnish_ssn: "010199-8148".into(),
        required_finnish_ssn: "010199-8148".into(),
        optional_business_id: "2617416-4".into(),
        required_business_id: "2617416-4".into(),
        optional_iban: "NL91 ABNA 0417 1643 00".into(),
        required_iban: "NL91 ABNA 0417 1643 00".into(),
        optional_email: "name@example.com".into(),
        required_email: "name@example.com".into(),
        optional_decimal_fi: "1 234,56".into(),
        required_decimal_fi: "1 234,56".into(),
        optional_eur_amount: "1 234,56 €".into(),
        required_eur_amount: "1 234,56 €".into(),
        optional_percentage: "12,5%".into(),
        required_percentage: "12,5%".into(),
        sentinel_industry: IndustryType::SaaS,
        nullable_industry: Some(IndustryType::Finance),
        optional_single_choice: SingleChoice::Alpha,
        required_single_choice: SingleChoice::Alpha,
        optional_multi_choice: vec![MultiChoice::Alpha],
        required_multi_choice: vec![MultiChoice::Alpha],
        ..ValidationExamplesForm::default()
    }
}

#[tokio::test]
async fn examples_valid_model_passes() {
    let outcome = local(&validation_examples_validator(), &valid_examples()).await;
    assert!(outcome.valid, "{:?}", outcome.codes_by_field);
}

#[tokio::test]
async fn examples_blank_optionals_pass() {
    let form = ValidationExamplesForm {
        optional_finnish_ssn: String::new(),
        optional_business_id: "   ".into(),
        optional_iban: String::new(),
        optional_email: String::new(),
        optional_decimal_fi: String::new(),
        optional_eur_amount: String::new(),
        optional_percentage: String::new(),
        optional_single_choice: SingleChoice::None,
        optional_multi_choice: Vec::new(),
        ..valid_examples()
    };
    let outcome = local(&validation_examples_validator(), &form).await;
    assert!(outcome.valid, "{:?}", outcome.codes_by_field);
}

#[rstest]
#[case::ssn("OptionalFinnishSsn", "150295-1212", "optional_finnish_ssn.invalid")]
#[case::business_id("OptionalBusinessId", "2617416-44", "optional_business_id.invalid")]
#[case::iban("OptionalIban", "NL91ABNA0417164301", "optional_iban.invalid")]
#[case::email("OptionalEmail", "not-an-email", "optional_email.invalid")]
#[case::decimal("OptionalDecimalFi", "not-a-number", "optional_decimal_fi.invalid")]
#[case::eur("OptionalEurAmount", "not-a-number €", "optional_eur.invalid")]
#[case::eur_range("OptionalEurAmount", "10 000 000,01", "optional_eur.range")]
#[case::eur_negative("OptionalEurAmount", "-1 €", "optional_eur.range")]
#[case::percentage("OptionalPercentage", "abc%", "optional_percentage.invalid")]
#[case::percentage_range("OptionalPercentage", "150%", "optional_percentage.range")]
#[tokio::test]
async fn examples_optional_input_rejected(
    #[case] field: &str,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let mut form = valid_examples();
    let slot = match field {
        "OptionalFinnishSsn" => &mut form.optional_finnish_ssn,
        "OptionalBusinessId" => &mut form.optional_business_id,
        "OptionalIban" => &mut form.optional_iban,
        "OptionalEmail" => &mut form.optional_email,
        "OptionalDecimalFi" => &mut form.optional_decimal_fi,
        "OptionalEurAmount" => &mut form.optional_eur_amount,
        "OptionalPercentage" => &mut form.optional_percentage,
        other => panic!("unknown field {other}"),
    };
    *slot = value.to_owned();

    let outcome = local(&validation_examples_validator(), &form).await;
    assert_eq!(codes(&outcome, field), vec![expected]);
    assert_eq!(outcome.codes_by_field.len(), 1);
}

#[tokio::test]
async fn examples_blank_required_inputs() {
    let outcome = local(&validation_examples_validator(), &ValidationExamplesForm::default()).await;
    for (field, code) in [
        ("RequiredFinnishSsn", "required_finnish_ssn.required"),
        ("RequiredBusinessId", "required_business_id.required"),
        ("RequiredIban", "required_iban.required"),
        ("RequiredEmail", "required_email.required"),
        ("RequiredDecimalFi", "required_decimal_fi.required"),
        ("RequiredEurAmount", "required_eur.required"),
        ("RequiredPercentage", "required_percentage.required"),
        ("SentinelIndustry", "sentinel_industry.required"),
        ("NullableIndustry", "nullable_industry.required"),
        ("RequiredSingleChoice", "required_single_choice.required"),
        ("RequiredMultiChoice", "required_multi_choice.required"),
    ] {
        assert_eq!(codes(&outcome, field), vec![code], "{field}");
    }
    assert_eq!(outcome.codes_by_field.len(), 11);
}

#[tokio::test]
async fn examples_required_input_invalid_and_out_of_range() {
    let form = ValidationExamplesForm {
        required_finnish_ssn: "150295-1212".into(),
        required_eur_amount: "20 000 000".into(),
        required_percentage: "101 %".into(),
        ..valid_examples()
    };
    let outcome = local(&validation_examples_validator(), &form).await;
    assert_eq!(codes(&outcome, "RequiredFinnishSsn"), vec!["required_finnish_ssn.invalid"]);
    assert_eq!(codes(&outcome, "RequiredEurAmount"), vec!["required_eur.range"]);
    assert_eq!(codes(&outcome, "RequiredPercentage"), vec!["required_percentage.range"]);
}

#[tokio::test]
async fn examples_other_choice_needs_text() {
    let form = ValidationExamplesForm {
        optional_single_choice: SingleChoice::Other,
        required_single_choice: SingleChoice::Other,
        optional_multi_choice: vec![MultiChoice::Beta, MultiChoice::Other],
        required_multi_choice: vec![MultiChoice::Other],
        ..valid_examples()
    };
    let outcome = local(&validation_examples_validator(), &form).await;
    assert_eq!(
        outcome.codes_by_field.keys().cloned().collect::<Vec<_>>(),
        vec![
            "OptionalSingleChoiceOther",
            "RequiredSingleChoiceOther",
            "OptionalMultiChoiceOther",
            "RequiredMultiChoiceOther",
        ]
    );

    let filled = ValidationExamplesForm {
        optional_single_choice_other: "Delta".into(),
        required_single_choice_other: "Delta".into(),
        optional_multi_choice_other: "Delta".into(),
        required_multi_choice_other: "Delta".into(),
        ..form
    };
    assert!(local(&validation_examples_validator(), &filled).await.valid);
}

// ============================================================================
// CUSTOMER INTAKE
// ============================================================================

fn valid_customer() -> CustomerIntakeForm {
    CustomerIntakeForm {
        customer_name: "Acme Corp".into(),
        contact_email: "name@company.com".into(),
        seats: 25,
        estimated_annual_value: Decimal::from(120_000),
        expected_start_date: today(),
        contract_type: ContractType::New,
        industry: IndustryType::SaaS,
        ..CustomerIntakeForm::default()
    }
}

#[tokio::test]
async fn customer_valid_model_passes() {
    let outcome = local(&customer_intake_validator(today()), &valid_customer()).await;
    assert!(outcome.valid, "{:?}", outcome.codes_by_field);
}

#[tokio::test]
async fn customer_blank_contact_email_is_only_required() {
    let form = CustomerIntakeForm {
        contact_email: "  ".into(),
        ..valid_customer()
    };
    let outcome = local(&customer_intake_validator(today()), &form).await;
    assert_eq!(codes(&outcome, "ContactEmail"), vec!["contact_email.required".to_owned()]);
}

#[rstest]
#[case::ssn_checksum("SocialSecurityNumber", "150295-1212", Some("ssn.invalid"))]
#[case::ssn_malformed("SocialSecurityNumber", "not-a-hetu", Some("ssn.invalid"))]
#[case::ssn_valid("SocialSecurityNumber", "010199-8148", None)]
#[case::business_id("BusinessId", "2617416-44", Some("business_id.invalid"))]
#[case::business_id_valid("BusinessId", "2617416-4", None)]
#[case::vat("VatNumber", "FI26174164A", Some("vat_number.invalid"))]
#[case::vat_valid("VatNumber", "FI26174164", None)]
#[tokio::test]
async fn customer_identifiers(
    #[case] field: &str,
    #[case] value: &str,
    #[case] expected: Option<&str>,
) {
    let mut form = valid_customer();
    match field {
        "SocialSecurityNumber" => form.social_security_number = value.into(),
        "BusinessId" => form.business_id = value.into(),
        "VatNumber" => form.vat_number = value.into(),
        other => panic!("unknown field {other}"),
    }
    let outcome = local(&customer_intake_validator(today()), &form).await;
    let expected: Vec<String> = expected.into_iter().map(str::to_owned).collect();
    assert_eq!(codes(&outcome, field), expected);
}

#[tokio::test]
async fn customer_ranges_lengths_and_dates() {
    let form = CustomerIntakeForm {
        customer_name: "x".repeat(121),
        contact_email: "nope".into(),
        seats: 0,
        estimated_annual_value: Decimal::from(-1),
        expected_start_date: today().pred_opt().unwrap(),
        notes: "y".repeat(501),
        contract_type: ContractType::Unknown,
        industry: IndustryType::Unknown,
        ..CustomerIntakeForm::default()
    };
    let outcome = local(&customer_intake_validator(today()), &form).await;
    assert_eq!(
        outcome.codes_by_field.into_iter().collect::<Vec<_>>(),
        vec![
            ("CustomerName".to_owned(), vec!["customer_name.length".to_owned()]),
            ("ContactEmail".to_owned(), vec!["contact_email.invalid".to_owned()]),
            ("Seats".to_owned(), vec!["seats.range".to_owned()]),
            ("EstimatedAnnualValue".to_owned(), vec!["arr.range".to_owned()]),
            ("ExpectedStartDate".to_owned(), vec!["start_date.future".to_owned()]),
            ("ContractType".to_owned(), vec!["contract_type.required".to_owned()]),
            ("Industry".to_owned(), vec!["industry.required".to_owned()]),
            ("Notes".to_owned(), vec!["notes.length".to_owned()]),
        ]
    );
}

// ============================================================================
// PREFILL
// ============================================================================

fn valid_prefill() -> PrefillForm {
    PrefillForm {
        name: "Ada Lovelace".into(),
        address_line1: "123 Analytical Engine Way".into(),
        address_line2: "Suite 42".into(),
        city: "London".into(),
        postal_code: "SW1A 1AA".into(),
        phone_number: "+44 20 7946 0958".into(),
        email: "ada.lovelace@example.com".into(),
    }
}

#[tokio::test]
async fn prefill_valid_model_passes() {
    let outcome = local(&prefill_validator().unwrap(), &valid_prefill()).await;
    assert!(outcome.valid, "{:?}", outcome.codes_by_field);
}

#[rstest]
#[case::blank_name(PrefillForm { name: String::new(), ..valid_prefill() }, "Name", vec!["name.required"])]
#[case::long_name(PrefillForm { name: "a".repeat(121), ..valid_prefill() }, "Name", vec!["name.length"])]
#[case::long_line2(PrefillForm { address_line2: "b".repeat(201), ..valid_prefill() }, "AddressLine2", vec!["address_line2.length"])]
#[case::blank_postal(PrefillForm { postal_code: " ".into(), ..valid_prefill() }, "PostalCode", vec!["postal_code.required"])]
#[case::bad_phone(PrefillForm { phone_number: "abc".into(), ..valid_prefill() }, "PhoneNumber", vec!["phone.invalid"])]
#[case::blank_phone(PrefillForm { phone_number: String::new(), ..valid_prefill() }, "PhoneNumber", vec!["phone.required", "phone.invalid"])]
#[case::bad_email(PrefillForm { email: "not-an-email".into(), ..valid_prefill() }, "Email", vec!["email.invalid"])]
#[case::blank_email(PrefillForm { email: String::new(), ..valid_prefill() }, "Email", vec!["email.required", "email.invalid"])]
#[tokio::test]
async fn prefill_rejections(
    #[case] form: PrefillForm,
    #[case] field: &str,
    #[case] expected: Vec<&str>,
) {
    let outcome = local(&prefill_validator().unwrap(), &form).await;
    assert_eq!(codes(&outcome, field), expected);
    assert_eq!(outcome.codes_by_field.len(), 1);
}
