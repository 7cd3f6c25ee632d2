//! Seeds editable form values from a stored patient record.

use profile_core::{format_display, parse_iso_date};
use profile_model::{FormValues, PatientRecord};

/// Extracts the editable fields of a stored record into form values.
///
/// Returns the empty mapping when there is no record or the record has no
/// profile. Otherwise the result contains exactly the fields present in the
/// source: stored ISO dates converted to display form, `about` copied
/// verbatim. A stored date that no longer parses is left out rather than
/// surfaced as a broken form value.
pub fn form_values_from_patient(patient: Option<&PatientRecord>) -> FormValues {
    let mut values = FormValues::default();
    let Some(profile) = patient.and_then(|record| record.profile.as_ref()) else {
        return values;
    };
    values.full_name = profile.full_name.clone();
    if let Some(clinical) = profile.patient.as_ref() {
        values.birthday = clinical.birthday.as_deref().and_then(iso_to_display);
        values.diagnosis_date = clinical.diagnosis_date.as_deref().and_then(iso_to_display);
        values.about = clinical.about.clone();
    }
    values
}

/// Lenient boundary entry for raw store payloads.
///
/// The store historically handed components whatever it had for the patient
/// slot, including non-object values (`0`, `false`, `null`). Anything that
/// does not deserialize as a record yields the empty mapping.
pub fn form_values_from_json(value: &serde_json::Value) -> FormValues {
    match serde_json::from_value::<PatientRecord>(value.clone()) {
        Ok(record) => form_values_from_patient(Some(&record)),
        Err(_) => FormValues::default(),
    }
}

fn iso_to_display(stored: &str) -> Option<String> {
    parse_iso_date(stored).ok().map(format_display)
}
