use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// A display date reached the submission preparer without passing
    /// validation first. Callers must treat this as a contract violation
    /// and abort the submission.
    #[error("invalid {field} date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
