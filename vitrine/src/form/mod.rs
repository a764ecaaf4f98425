//! The contact form: its fields, submit button and message extras.

mod snapshot;

pub use snapshot::FormSnapshot;

use vitrine_dom::element::{find_all, find_first, find_parent};
use vitrine_dom::{Document, Element};

use crate::config::FormConfig;
use crate::validation::{Field, FormValidator, ValidationResult};

const COUNTER_LIMIT_COLOR: &str = "#ff6b6b";
const COUNTER_WARN_COLOR: &str = "#ffa500";

/// Handles to the contact form and its controls.
///
/// Every element is optional: a page without a counter, a submit button or
/// even a form still gets a working `ContactForm` whose operations on the
/// missing parts do nothing.
#[derive(Debug, Clone)]
pub struct ContactForm {
    form: Option<Element>,
    fields: Vec<Field>,
    submit_button: Option<Element>,
    message: Option<Element>,
    counter: Option<Element>,
    validator: FormValidator,
    config: FormConfig,
}

impl ContactForm {
    /// Collect the form's controls from the page.
    pub fn from_document(document: &Document, config: &FormConfig) -> Self {
        let form = document.get_element_by_id(&config.form_id);
        let (fields, submit_button) = match &form {
            Some(form) => (collect_fields(form), find_submit_button(form)),
            None => {
                log::debug!("No #{} on the page", config.form_id);
                (Vec::new(), None)
            }
        };

        let form = Self {
            form,
            fields,
            submit_button,
            message: document.get_element_by_id(&config.message_id),
            counter: document.get_element_by_id(&config.counter_id),
            validator: FormValidator::new(config.name_min_length),
            config: config.clone(),
        };
        form.update_char_count();
        form
    }

    pub fn form(&self) -> Option<&Element> {
        self.form.as_ref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// The field whose control has the given element id.
    pub fn field_for(&self, target: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.input().has_id(target))
    }

    pub fn submit_button(&self) -> Option<&Element> {
        self.submit_button.as_ref()
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// Set a field's value by name. Returns false for unknown names.
    pub fn fill(&self, name: &str, value: impl Into<String>) -> bool {
        match self.field(name) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Blur handler: validate the field that lost focus.
    pub fn on_blur(&self, target: &str) -> Option<ValidationResult> {
        let field = self.field_for(target)?;
        Some(self.validator.validate_field(field))
    }

    /// Input handler: drop the field's error while the user types, and keep
    /// the message extras in sync.
    pub fn on_input(&self, target: &str) {
        if let Some(field) = self.field_for(target) {
            self.validator.clear_field_error(field);
        }
        if self.message.as_ref().is_some_and(|m| m.has_id(target)) {
            self.update_char_count();
            self.auto_resize_textarea();
        }
    }

    /// Show the message length in the counter, colored near the limit.
    pub fn update_char_count(&self) {
        let (Some(message), Some(counter)) = (&self.message, &self.counter) else {
            return;
        };

        let length = message.value().chars().count();
        counter.set_text(length.to_string());

        let color = if length > self.config.counter_limit {
            COUNTER_LIMIT_COLOR
        } else if length > self.config.counter_warn {
            COUNTER_WARN_COLOR
        } else {
            ""
        };
        counter.set_style("color", color);
    }

    /// Grow the textarea to fit its content.
    pub fn auto_resize_textarea(&self) {
        if let Some(message) = &self.message {
            let height = message.layout().scroll_height;
            message.set_style("height", format!("{height}px"));
        }
    }

    /// Capture the current values.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::capture(&self.fields)
    }

    /// Empty every field and clear all validation state.
    pub fn reset(&self) {
        for field in &self.fields {
            field.set_value("");
            self.validator.clear_field_error(field);
        }
        self.update_char_count();
        if let Some(message) = &self.message {
            message.set_style("height", "auto");
        }
    }

    /// The first field that failed its last validation.
    pub fn first_invalid(&self) -> Option<&Field> {
        self.fields.iter().find(|field| !field.is_valid())
    }
}

fn is_control(el: &Element) -> bool {
    if el.is_tag("select") || el.is_tag("textarea") {
        return true;
    }
    el.is_tag("input")
        && !matches!(
            el.attr("type").as_deref(),
            Some("submit" | "button" | "reset" | "hidden")
        )
}

fn collect_fields(form: &Element) -> Vec<Field> {
    find_all(form, is_control)
        .into_iter()
        .map(|input| {
            let container = find_parent(form, &input);
            Field::from_element(input, container)
        })
        .collect()
}

fn find_submit_button(form: &Element) -> Option<Element> {
    find_first(form, |el| {
        el.is_tag("button") && el.attr("type").as_deref() == Some("submit")
    })
}
