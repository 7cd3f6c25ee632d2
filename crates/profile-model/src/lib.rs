pub mod error;
pub mod form;
pub mod ids;
pub mod patch;
pub mod record;

pub use error::{ProfileError, Result};
pub use form::FormValues;
pub use ids::UserId;
pub use patch::{PatientProfilePatch, ProfilePatch, ProfilePatchBody};
pub use record::{PatientProfile, PatientRecord, Profile};
