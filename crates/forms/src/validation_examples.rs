//! A showcase of every identifier, number and choice rule in one form.
//!
//! Each text input comes in an optional and a required flavour. Optional
//! inputs are only checked when something was typed; required inputs fail
//! with `.required` when blank and with `.invalid` when the text does not
//! parse. Currency and percentage inputs add a `.range` check that only runs
//! once the text parses.

use lomake_validator::numeric;
use lomake_validator::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::options::{IndustryType, MultiChoice, SingleChoice};

/// Upper bound for the currency inputs.
pub const MAX_EUR_AMOUNT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Every input kind the engine supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationExamplesForm {
    pub optional_finnish_ssn: String,
    pub required_finnish_ssn: String,
    pub optional_business_id: String,
    pub required_business_id: String,
    pub optional_iban: String,
    pub required_iban: String,
    pub optional_email: String,
    pub required_email: String,
    pub optional_decimal_fi: String,
    pub required_decimal_fi: String,
    pub optional_eur_amount: String,
    pub required_eur_amount: String,
    pub optional_percentage: String,
    pub required_percentage: String,

    pub sentinel_industry: IndustryType,
    pub nullable_industry: Option<IndustryType>,

    pub optional_single_choice: SingleChoice,
    pub optional_single_choice_other: String,
    pub required_single_choice: SingleChoice,
    pub required_single_choice_other: String,
    pub optional_multi_choice: Vec<MultiChoice>,
    pub optional_multi_choice_other: String,
    pub required_multi_choice: Vec<MultiChoice>,
    pub required_multi_choice_other: String,
}

type Form = ValidationExamplesForm;
type Text = fn(&Form) -> &str;
type Parse = fn(&str) -> Option<Decimal>;

/// A text input with its registration name and error-code prefix.
#[derive(Clone, Copy)]
struct Input {
    field: &'static str,
    prefix: &'static str,
    read: Text,
}

impl Input {
    const fn new(field: &'static str, prefix: &'static str, read: Text) -> Self {
        Self {
            field,
            prefix,
            read,
        }
    }

    fn is_filled(self, form: &Form) -> bool {
        !(self.read)(form).trim().is_empty()
    }

    fn required(self) -> Rule<Form> {
        Rule::field(self.field, self.read)
            .must_pass(not_blank())
            .with_code(format!("{}.required", self.prefix))
    }

    fn format<V>(self, validator: V) -> Rule<Form>
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        Rule::field(self.field, self.read)
            .must_pass(validator)
            .with_code(format!("{}.invalid", self.prefix))
            .when(move |form: &Form| self.is_filled(form))
    }

    fn parses(self, parse: Parse) -> Rule<Form> {
        Rule::field(self.field, self.read)
            .must(move |text: &str| parse(text).is_some())
            .with_code(format!("{}.invalid", self.prefix))
            .when(move |form: &Form| self.is_filled(form))
    }

    fn bounded(self, parse: Parse, max: Decimal) -> Rule<Form> {
        Rule::field(self.field, self.read)
            .must(move |text: &str| {
                parse(text).is_some_and(|value| value >= Decimal::ZERO && value <= max)
            })
            .with_code(format!("{}.range", self.prefix))
            .when(move |form: &Form| self.is_filled(form) && parse((self.read)(form)).is_some())
    }
}

fn other_text(
    field: &'static str,
    code: &'static str,
    read: Text,
    applies: fn(&Form) -> bool,
) -> Rule<Form> {
    Rule::field(field, read)
        .must_pass(not_blank())
        .with_code(code)
        .when(applies)
}

/// Builds the validation examples validator. All rules live in `Local`.
pub fn validation_examples_validator() -> Validator<ValidationExamplesForm> {
    let ssn = (
        Input::new("OptionalFinnishSsn", "optional_finnish_ssn", |f| &f.optional_finnish_ssn),
        Input::new("RequiredFinnishSsn", "required_finnish_ssn", |f| &f.required_finnish_ssn),
    );
    let business_id = (
        Input::new("OptionalBusinessId", "optional_business_id", |f| &f.optional_business_id),
        Input::new("RequiredBusinessId", "required_business_id", |f| &f.required_business_id),
    );
    let iban = (
        Input::new("OptionalIban", "optional_iban", |f| &f.optional_iban),
        Input::new("RequiredIban", "required_iban", |f| &f.required_iban),
    );
    let email = (
        Input::new("OptionalEmail", "optional_email", |f| &f.optional_email),
        Input::new("RequiredEmail", "required_email", |f| &f.required_email),
    );
    let decimal = (
        Input::new("OptionalDecimalFi", "optional_decimal_fi", |f| &f.optional_decimal_fi),
        Input::new("RequiredDecimalFi", "required_decimal_fi", |f| &f.required_decimal_fi),
    );
    let eur = (
        Input::new("OptionalEurAmount", "optional_eur", |f| &f.optional_eur_amount),
        Input::new("RequiredEurAmount", "required_eur", |f| &f.required_eur_amount),
    );
    let percentage = (
        Input::new("OptionalPercentage", "optional_percentage", |f| &f.optional_percentage),
        Input::new("RequiredPercentage", "required_percentage", |f| &f.required_percentage),
    );

    let mut local = RuleSet::new("Local")
        .rule(ssn.0.format(finnish_ssn()))
        .rule(ssn.1.required())
        .rule(ssn.1.format(finnish_ssn()))
        .rule(business_id.0.format(lomake_validator::validators::business_id()))
        .rule(business_id.1.required())
        .rule(business_id.1.format(lomake_validator::validators::business_id()))
        .rule(iban.0.format(lomake_validator::validators::iban()))
        .rule(iban.1.required())
        .rule(iban.1.format(lomake_validator::validators::iban()))
        .rule(email.0.format(lomake_validator::validators::email()))
        .rule(email.1.required())
        .rule(email.1.format(lomake_validator::validators::email()))
        .rule(decimal.0.parses(numeric::try_parse_decimal))
        .rule(decimal.1.required())
        .rule(decimal.1.parses(numeric::try_parse_decimal));

    let hundred = Decimal::ONE_HUNDRED;
    for (input, parse, max, required) in [
        (eur.0, numeric::try_parse_currency_eur as Parse, MAX_EUR_AMOUNT, false),
        (eur.1, numeric::try_parse_currency_eur, MAX_EUR_AMOUNT, true),
        (percentage.0, numeric::try_parse_percentage, hundred, false),
        (percentage.1, numeric::try_parse_percentage, hundred, true),
    ] {
        if required {
            local = local.rule(input.required());
        }
        local = local
            .rule(input.parses(parse))
            .rule(input.bounded(parse, max));
    }

    let local = local
        .rule(
            Rule::field("SentinelIndustry", |f: &Form| &f.sentinel_industry)
                .must(|industry: &IndustryType| *industry != IndustryType::Unknown)
                .with_code("sentinel_industry.required"),
        )
        .rule(
            Rule::field("NullableIndustry", |f: &Form| &f.nullable_industry)
                .must(Option::is_some)
                .with_code("nullable_industry.required"),
        )
        .rule(
            Rule::field("RequiredSingleChoice", |f: &Form| &f.required_single_choice)
                .must(|choice: &SingleChoice| *choice != SingleChoice::None)
                .with_code("required_single_choice.required"),
        )
        .rule(
            Rule::field("RequiredMultiChoice", |f: &Form| f.required_multi_choice.as_slice())
                .must_pass(non_empty())
                .with_code("required_multi_choice.required"),
        )
        .rule(other_text(
            "OptionalSingleChoiceOther",
            "optional_single_choice.other_required",
            |f| &f.optional_single_choice_other,
            |f| f.optional_single_choice == SingleChoice::Other,
        ))
        .rule(other_text(
            "RequiredSingleChoiceOther",
            "required_single_choice.other_required",
            |f| &f.required_single_choice_other,
            |f| f.required_single_choice == SingleChoice::Other,
        ))
        .rule(other_text(
            "OptionalMultiChoiceOther",
            "optional_multi_choice.other_required",
            |f| &f.optional_multi_choice_other,
            |f| f.optional_multi_choice.contains(&MultiChoice::Other),
        ))
        .rule(other_text(
            "RequiredMultiChoiceOther",
            "required_multi_choice.other_required",
            |f| &f.required_multi_choice_other,
            |f| f.required_multi_choice.contains(&MultiChoice::Other),
        ));

    Validator::new(vec![local])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_eur_amount() {
        assert_eq!(MAX_EUR_AMOUNT, Decimal::from(10_000_000));
    }

    #[test]
    fn test_rule_count() {
        let validator = validation_examples_validator();
        let local = &validator.rule_sets()[0];
        assert_eq!(local.name(), "Local");
        // 5 text pairs x 3, 2 bounded pairs x 5, 2 selects, 2 choices, 4 other texts
        assert_eq!(local.len(), 15 + 10 + 2 + 2 + 4);
    }
}
