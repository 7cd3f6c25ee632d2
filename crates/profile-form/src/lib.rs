//! Patient profile form pipeline.
//!
//! This crate glues the pieces of a profile edit together:
//!
//! - **reader**: seeds form values from a stored record
//! - **text**: relative-time display strings (age, years since diagnosis)
//! - **submit**: converts validated form values into the store patch shape
//! - **session**: host-side edit state, notifications, and collaborator
//!   configuration checks
//!
//! Validation itself lives in `profile-validate`; persistence of the
//! produced patch is the host's concern.

pub mod reader;
pub mod session;
pub mod submit;
pub mod text;

pub use reader::{form_values_from_json, form_values_from_patient};
pub use session::{EditState, FormSession, MetricsSink, SessionConfig};
pub use submit::prepare_for_submit;
pub use text::{about_text, age_text, diagnosis_text};
