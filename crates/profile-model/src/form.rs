use serde::{Deserialize, Serialize};

/// The flat set of editable profile fields as held by a form while editing.
///
/// Dates here are in display form (`MM/DD/YYYY`), unlike the stored record.
/// A field that was absent in the source record stays `None`; readers never
/// emit placeholder values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(rename = "diagnosisDate", skip_serializing_if = "Option::is_none")]
    pub diagnosis_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

impl FormValues {
    /// Number of fields actually present.
    pub fn field_count(&self) -> usize {
        [
            self.full_name.is_some(),
            self.birthday.is_some(),
            self.diagnosis_date.is_some(),
            self.about.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }
}
