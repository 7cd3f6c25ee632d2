//! Tests for seeding form values from stored records.

use profile_form::{form_values_from_json, form_values_from_patient};
use profile_model::{PatientProfile, PatientRecord, Profile, UserId};
use serde_json::json;

fn make_patient(
    full_name: Option<&str>,
    birthday: Option<&str>,
    diagnosis_date: Option<&str>,
    about: Option<&str>,
) -> PatientRecord {
    PatientRecord {
        userid: Some(UserId::from(1)),
        profile: Some(Profile {
            full_name: full_name.map(str::to_string),
            patient: Some(PatientProfile {
                birthday: birthday.map(str::to_string),
                diagnosis_date: diagnosis_date.map(str::to_string),
                about: about.map(str::to_string),
            }),
        }),
    }
}

#[test]
fn test_empty_record_yields_empty_values() {
    let record = PatientRecord::default();
    assert!(form_values_from_patient(Some(&record)).is_empty());
    assert!(form_values_from_patient(None).is_empty());
}

#[test]
fn test_non_object_json_yields_empty_values() {
    assert!(form_values_from_json(&json!(0)).is_empty());
    assert!(form_values_from_json(&json!(false)).is_empty());
    assert!(form_values_from_json(&json!(null)).is_empty());
    assert!(form_values_from_json(&json!({})).is_empty());
}

#[test]
fn test_empty_nested_patient_yields_empty_values() {
    let record = make_patient(None, None, None, None);
    let values = form_values_from_patient(Some(&record));
    assert_eq!(values.field_count(), 0);
}

#[test]
fn test_full_name_only() {
    let record = PatientRecord {
        userid: Some(UserId::from(1)),
        profile: Some(Profile {
            full_name: Some("Joe Bloggs".to_string()),
            patient: None,
        }),
    };
    let values = form_values_from_patient(Some(&record));
    assert_eq!(values.field_count(), 1);
    assert_eq!(values.full_name.as_deref(), Some("Joe Bloggs"));
}

#[test]
fn test_birthday_converted_to_display_form() {
    let record = make_patient(None, Some("1995-05-01"), None, None);
    let values = form_values_from_patient(Some(&record));
    assert_eq!(values.field_count(), 1);
    assert_eq!(values.birthday.as_deref(), Some("05/01/1995"));
}

#[test]
fn test_diagnosis_date_converted_to_display_form() {
    let record = make_patient(None, None, Some("2006-06-05"), None);
    let values = form_values_from_patient(Some(&record));
    assert_eq!(values.field_count(), 1);
    assert_eq!(values.diagnosis_date.as_deref(), Some("06/05/2006"));
}

#[test]
fn test_about_copied_verbatim() {
    let record = make_patient(None, None, None, Some("I have a wonderful coffee mug."));
    let values = form_values_from_patient(Some(&record));
    assert_eq!(values.field_count(), 1);
    assert_eq!(
        values.about.as_deref(),
        Some("I have a wonderful coffee mug.")
    );
}

#[test]
fn test_all_fields_present() {
    let values = form_values_from_json(&json!({
        "userid": 1,
        "profile": {
            "fullName": "Joe Bloggs",
            "patient": {
                "birthday": "1995-05-01",
                "diagnosisDate": "2006-06-05",
                "about": "hi"
            }
        }
    }));
    assert_eq!(values.field_count(), 4);
    assert_eq!(values.full_name.as_deref(), Some("Joe Bloggs"));
    assert_eq!(values.birthday.as_deref(), Some("05/01/1995"));
    assert_eq!(values.diagnosis_date.as_deref(), Some("06/05/2006"));
    assert_eq!(values.about.as_deref(), Some("hi"));
}

#[test]
fn test_unparseable_stored_date_is_left_out() {
    let record = make_patient(None, Some("not-a-date"), None, Some("hi"));
    let values = form_values_from_patient(Some(&record));
    assert_eq!(values.field_count(), 1);
    assert!(values.birthday.is_none());
}
