//! Field validation error types

/// Why a single field failed validation.
///
/// These are user-input errors: they are rendered next to the field and
/// reported through boolean verdicts, never returned as `Err` from the form
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A required field is empty or whitespace-only.
    #[error("This field is required")]
    Required,

    /// An email field does not look like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidFormat,

    /// The name is non-empty but shorter than the minimum.
    #[error("Name must be at least {min} characters long")]
    TooShort {
        /// Minimum number of characters.
        min: usize,
    },
}

impl FieldError {
    /// Human-readable message shown under the field.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// One or more fields failed a full-form validation pass.
///
/// Only ever shown as the form-level banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please correct the errors above")]
pub struct FormInvalid {
    /// Names of the fields that failed, in form order.
    pub fields: Vec<String>,
}
