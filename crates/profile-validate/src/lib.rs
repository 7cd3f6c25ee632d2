//! Form validation for patient profile edits.
//!
//! Rules run in a fixed order and evaluation stops at the first failure, so
//! a submit attempt surfaces exactly one message. Failures are ordinary
//! return values (the soft error channel); only the submission preparer in
//! `profile-form` raises hard errors.

use std::fmt;

use chrono::{Local, NaiveDate};

use profile_core::parse_display_date;
use profile_model::FormValues;

/// Maximum stored length of the free-text about section, in characters.
pub const MAX_ABOUT_LENGTH: usize = 256;

/// The validation rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Birthday parses as a valid display date.
    BirthdayValid,
    /// Diagnosis date parses as a valid display date.
    DiagnosisDateValid,
    /// Birthday is not after the current date.
    BirthdayNotInFuture,
    /// Diagnosis date is not after the current date.
    DiagnosisDateNotInFuture,
    /// Diagnosis date is not before the birthday.
    DiagnosisNotBeforeBirthday,
    /// About text is within [`MAX_ABOUT_LENGTH`].
    AboutWithinLimit,
}

impl ValidationRule {
    /// The user-facing message surfaced when this rule fails.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BirthdayValid => "Date of birth needs to be a valid date",
            Self::DiagnosisDateValid => "Diagnosis date needs to be a valid date",
            Self::BirthdayNotInFuture => "Date of birth cannot be in the future!",
            Self::DiagnosisDateNotInFuture => "Diagnosis date cannot be in the future!",
            Self::DiagnosisNotBeforeBirthday => "Diagnosis cannot be before date of birth!",
            Self::AboutWithinLimit => "Please keep \"about\" text under 256 characters",
        }
    }
}

const RULE_ORDER: [ValidationRule; 6] = [
    ValidationRule::BirthdayValid,
    ValidationRule::DiagnosisDateValid,
    ValidationRule::BirthdayNotInFuture,
    ValidationRule::DiagnosisDateNotInFuture,
    ValidationRule::DiagnosisNotBeforeBirthday,
    ValidationRule::AboutWithinLimit,
];

/// The first rule a set of form values violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationFailure {
    pub rule: ValidationRule,
}

impl ValidationFailure {
    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validates edited form values against the rule set, in order.
///
/// Returns the first failed rule, or `None` when the form may be submitted.
/// `now` is injected so callers and tests are deterministic.
pub fn validate_form_values(values: &FormValues, now: NaiveDate) -> Option<ValidationFailure> {
    RULE_ORDER
        .into_iter()
        .find(|rule| !passes(*rule, values, now))
        .map(|rule| ValidationFailure { rule })
}

/// [`validate_form_values`] against the current local date.
pub fn validate_form_values_today(values: &FormValues) -> Option<ValidationFailure> {
    validate_form_values(values, Local::now().date_naive())
}

fn passes(rule: ValidationRule, values: &FormValues, now: NaiveDate) -> bool {
    let birthday = display_date(values.birthday.as_deref());
    let diagnosis = display_date(values.diagnosis_date.as_deref());
    match rule {
        ValidationRule::BirthdayValid => birthday.is_some(),
        ValidationRule::DiagnosisDateValid => diagnosis.is_some(),
        ValidationRule::BirthdayNotInFuture => birthday.is_none_or(|date| date <= now),
        ValidationRule::DiagnosisDateNotInFuture => diagnosis.is_none_or(|date| date <= now),
        ValidationRule::DiagnosisNotBeforeBirthday => match (birthday, diagnosis) {
            (Some(birthday), Some(diagnosis)) => diagnosis >= birthday,
            _ => true,
        },
        ValidationRule::AboutWithinLimit => values
            .about
            .as_deref()
            .is_none_or(|about| about.chars().count() <= MAX_ABOUT_LENGTH),
    }
}

fn display_date(value: Option<&str>) -> Option<NaiveDate> {
    parse_display_date(value?).ok()
}
