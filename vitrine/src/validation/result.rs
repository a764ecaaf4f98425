use crate::error::FieldError;

/// Verdict of one field validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// No rule failed.
    #[default]
    Valid,
    /// The first failing rule.
    Invalid(FieldError),
}

impl ValidationResult {
    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The failing rule, if any.
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Message to show next to the field, if any.
    pub fn message(&self) -> Option<String> {
        self.error().map(FieldError::message)
    }
}

impl From<Result<(), FieldError>> for ValidationResult {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(error) => Self::Invalid(error),
        }
    }
}
