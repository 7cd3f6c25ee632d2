//! Converts validated form values into the store's patch shape.

use tracing::error;

use profile_core::{format_iso, parse_display_date};
use profile_model::{
    FormValues, PatientProfilePatch, ProfileError, ProfilePatch, ProfilePatchBody, Result,
};

/// Prepares validated form values for submission to the profile store.
///
/// Display dates are converted back to canonical ISO form; `fullName` is
/// carried through at the profile level; an empty `about` is dropped
/// entirely rather than stored as an empty string.
///
/// # Errors
///
/// A date that fails to convert means the caller skipped validation;
/// this returns [`ProfileError::InvalidDate`] and the submission must be
/// aborted, not retried.
pub fn prepare_for_submit(values: &FormValues) -> Result<ProfilePatch> {
    let birthday = convert_date("birthday", values.birthday.as_deref())?;
    let diagnosis_date = convert_date("diagnosisDate", values.diagnosis_date.as_deref())?;
    let about = values
        .about
        .as_deref()
        .filter(|about| !about.is_empty())
        .map(str::to_string);
    Ok(ProfilePatch {
        profile: ProfilePatchBody {
            full_name: values.full_name.clone(),
            patient: PatientProfilePatch {
                birthday,
                diagnosis_date,
                about,
            },
        },
    })
}

fn convert_date(field: &'static str, value: Option<&str>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    match parse_display_date(value) {
        Ok(date) => Ok(Some(format_iso(date))),
        Err(err) => {
            error!(field, value, %err, "unvalidated date reached submission");
            Err(ProfileError::InvalidDate {
                field,
                value: value.to_string(),
            })
        }
    }
}
