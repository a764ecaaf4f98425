//! Field and form validation with inline error rendering.

use std::sync::LazyLock;

use regex::Regex;
use vitrine_dom::Element;

use super::field::{Field, FieldKind};
use super::result::ValidationResult;
use crate::error::{FieldError, FormInvalid};

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

/// Class of the inline error element placed next to a field.
pub const FIELD_ERROR_CLASS: &str = "field-error";

const ERROR_COLOR: &str = "#ff6b6b";
const ERROR_RING: &str = "0 0 0 4px rgba(255, 107, 107, 0.1)";

/// Validates form fields and renders their inline errors.
///
/// Rules run in a fixed order and the first failing one wins:
/// required, then email format, then minimum name length. A field reports at
/// most one message.
///
/// # Example
///
/// ```
/// use vitrine::validation::{Field, FieldKind, FormValidator};
/// use vitrine::error::FieldError;
///
/// let validator = FormValidator::default();
/// let email = Field::new("email", FieldKind::Email).required();
///
/// email.set_value("a@b");
/// assert_eq!(validator.validate_field(&email).error(), Some(&FieldError::InvalidFormat));
///
/// email.set_value("a@b.co");
/// assert!(validator.validate_field(&email).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator {
    name_min_length: usize,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(2)
    }
}

impl FormValidator {
    pub fn new(name_min_length: usize) -> Self {
        Self { name_min_length }
    }

    pub fn name_min_length(&self) -> usize {
        self.name_min_length
    }

    /// Run the rules against a field without touching the page.
    ///
    /// The name length is counted in Unicode scalar values after trimming,
    /// so a name made of one emoji is one character long.
    pub fn check(&self, field: &Field) -> Result<(), FieldError> {
        let value = field.value();
        let value = value.trim();

        if field.is_required() && value.is_empty() {
            return Err(FieldError::Required);
        }

        if *field.kind() == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
            return Err(FieldError::InvalidFormat);
        }

        if field.name() == "name"
            && !value.is_empty()
            && value.chars().count() < self.name_min_length
        {
            return Err(FieldError::TooShort {
                min: self.name_min_length,
            });
        }

        Ok(())
    }

    /// Validate one field and update its inline error.
    ///
    /// Any previous error is cleared first, so a field that has been fixed
    /// never keeps a stale message.
    pub fn validate_field(&self, field: &Field) -> ValidationResult {
        self.clear_field_error(field);

        let result = ValidationResult::from(self.check(field));
        if let ValidationResult::Invalid(error) = &result {
            log::debug!("Field '{}' invalid: {}", field.name(), error);
            show_field_error(field, error);
        }
        result
    }

    /// Remove the displayed error state of a field. Idempotent.
    pub fn clear_field_error(&self, field: &Field) {
        let input = field.input();
        input.clear_style("border-color");
        input.clear_style("box-shadow");
        input.remove_attr("aria-invalid");

        if let Some(container) = field.container() {
            container.remove_children_where(|child| child.has_class(FIELD_ERROR_CLASS));
        }
        field.set_error(None);
    }

    /// Validate every required field, rendering all errors at once.
    ///
    /// Returns the names of the failing fields in form order.
    pub fn check_form(&self, fields: &[Field]) -> Result<(), FormInvalid> {
        let failed: Vec<String> = fields
            .iter()
            .filter(|field| field.is_required())
            .filter(|field| self.validate_field(field).is_invalid())
            .map(|field| field.name().to_string())
            .collect();

        if failed.is_empty() {
            Ok(())
        } else {
            Err(FormInvalid { fields: failed })
        }
    }

    /// Validate every required field. True only if all of them pass.
    ///
    /// Evaluation is not short-circuited: every invalid field gets its error
    /// displayed.
    pub fn validate_form(&self, fields: &[Field]) -> bool {
        self.check_form(fields).is_ok()
    }
}

/// Whether `value` matches `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn show_field_error(field: &Field, error: &FieldError) {
    let input = field.input();
    input.set_style("border-color", ERROR_COLOR);
    input.set_style("box-shadow", ERROR_RING);
    input.set_attr("aria-invalid", "true");
    field.set_error(Some(error.clone()));

    let Some(container) = field.container() else {
        log::debug!("No error container for field '{}'", field.name());
        return;
    };

    let message = error.message();
    let error_el = Element::div()
        .with_class(FIELD_ERROR_CLASS)
        .with_attr("role", "alert")
        .with_style("color", ERROR_COLOR)
        .with_child(
            Element::new("i")
                .with_class("fas")
                .with_class("fa-exclamation-circle"),
        )
        .with_child(Element::span().with_text(message));
    container.append_child(error_el);
}
