use serde::{Deserialize, Serialize};

/// The update payload sent to the profile store after a successful edit.
///
/// Mirrors the stored record's nesting: `{ profile: { patient: { .. } } }`,
/// with `fullName` at the profile level. Dates are back in canonical ISO
/// form. Absent fields are left off the wire rather than sent as nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub profile: ProfilePatchBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatchBody {
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub patient: PatientProfilePatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(rename = "diagnosisDate", skip_serializing_if = "Option::is_none")]
    pub diagnosis_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}
