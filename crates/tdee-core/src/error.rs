//! Error types for TDEE Core

use thiserror::Error;

/// A single rejected input field.
///
/// The `Display` output is the exact message returned to API clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Weight must be between 1-1000 kg")]
    Weight,

    #[error("Height must be between 1-300 cm")]
    Height,

    #[error("Age must be between 1-150 years")]
    Age,

    #[error("Gender must be 'male' or 'female'")]
    Gender,
}

impl ValidationError {
    /// Name of the request field this error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Weight => "weight",
            ValidationError::Height => "height",
            ValidationError::Age => "age",
            ValidationError::Gender => "gender",
        }
    }
}
