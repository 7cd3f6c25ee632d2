//! Human-readable relative-time strings derived from stored dates.

use chrono::NaiveDate;

use profile_core::{elapsed_years, parse_iso_date};
use profile_model::{PatientProfile, PatientRecord};

const BIRTHDATE_NOT_KNOWN: &str = "Birthdate not known";
const DIAGNOSIS_NOT_KNOWN: &str = "Diagnosis date not known";

/// The patient's age in whole years, as display text.
///
/// Anything under one full year (including a birthday in the future of
/// `now`, or no stored birthday at all) reads as unknown.
pub fn age_text(patient: &PatientRecord, now: NaiveDate) -> String {
    let Some(birthday) = stored_date(clinical(patient).and_then(|c| c.birthday.as_deref())) else {
        return BIRTHDATE_NOT_KNOWN.to_string();
    };
    match elapsed_years(birthday, now) {
        years if years < 1 => BIRTHDATE_NOT_KNOWN.to_string(),
        1 => "1 year old".to_string(),
        years => format!("{years} years old"),
    }
}

/// Years since diagnosis, as display text.
///
/// Unlike [`age_text`], a diagnosis earlier in the current year is valid
/// ("Diagnosed this year"); only a diagnosis date in the future reads as
/// unknown.
pub fn diagnosis_text(patient: &PatientRecord, now: NaiveDate) -> String {
    let Some(diagnosed) =
        stored_date(clinical(patient).and_then(|c| c.diagnosis_date.as_deref()))
    else {
        return DIAGNOSIS_NOT_KNOWN.to_string();
    };
    match elapsed_years(diagnosed, now) {
        years if years < 0 => DIAGNOSIS_NOT_KNOWN.to_string(),
        0 => "Diagnosed this year".to_string(),
        1 => "Diagnosed 1 year ago".to_string(),
        years => format!("Diagnosed {years} years ago"),
    }
}

/// The stored about text, when present.
pub fn about_text(patient: &PatientRecord) -> Option<&str> {
    clinical(patient)?.about.as_deref()
}

fn clinical(patient: &PatientRecord) -> Option<&PatientProfile> {
    patient.profile.as_ref()?.patient.as_ref()
}

fn stored_date(value: Option<&str>) -> Option<NaiveDate> {
    parse_iso_date(value?).ok()
}
