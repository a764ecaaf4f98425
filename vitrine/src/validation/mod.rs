//! Contact form validation.
//!
//! A [`Field`] wraps a form control element; the [`FormValidator`] checks its
//! trimmed value and renders an inline error next to it. A failing field
//! reports a single [`FieldError`](crate::error::FieldError).

mod field;
mod result;
mod validator;

pub use field::{Field, FieldKind};
pub use result::ValidationResult;
pub use validator::{FIELD_ERROR_CLASS, FormValidator, is_valid_email};
