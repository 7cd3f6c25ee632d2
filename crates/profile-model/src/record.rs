use serde::{Deserialize, Serialize};

use crate::UserId;

/// A stored patient record as held by the remote profile store.
///
/// Every field below the identifier is optional: records are created empty
/// and filled in as the patient completes their profile. Dates are stored in
/// canonical ISO form (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// The profile object nested in a [`PatientRecord`].
///
/// `fullName` lives at this level; the clinical fields live one level down
/// in the nested `patient` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientProfile>,
}

/// Clinical profile fields nested under `profile.patient`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Date of birth, ISO `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// Diagnosis date, ISO `YYYY-MM-DD`. Never earlier than the birthday
    /// when both are stored.
    #[serde(rename = "diagnosisDate", skip_serializing_if = "Option::is_none")]
    pub diagnosis_date: Option<String>,
    /// Free-text about section, at most 256 characters when stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

impl PatientRecord {
    /// The patient's display name, when the profile carries one.
    pub fn display_name(&self) -> Option<&str> {
        self.profile.as_ref()?.full_name.as_deref()
    }

    /// Whether this record and `other` identify the same person.
    ///
    /// False when either record has no identifier.
    pub fn is_same_person(&self, other: &PatientRecord) -> bool {
        match (&self.userid, &other.userid) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
