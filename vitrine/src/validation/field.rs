use std::sync::{Arc, RwLock};

use vitrine_dom::Element;

use crate::error::FieldError;

/// Type tag of a form control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Textarea,
    Select,
    Other(String),
}

impl FieldKind {
    /// Kind of a control from its tag and `type` attribute.
    pub fn of(element: &Element) -> Self {
        if element.is_tag("textarea") {
            return Self::Textarea;
        }
        if element.is_tag("select") {
            return Self::Select;
        }
        match element.attr("type").as_deref() {
            None | Some("text") => Self::Text,
            Some("email") => Self::Email,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    fn input_type(&self) -> Option<&str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Other(other) => Some(other),
            Self::Textarea | Self::Select => None,
        }
    }
}

/// A named control of a form.
///
/// The value lives on the control element; the field adds the validation
/// metadata and the current validity. Clones share the validity state.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: FieldKind,
    required: bool,
    input: Element,
    container: Option<Element>,
    error: Arc<RwLock<Option<FieldError>>>,
}

impl Field {
    /// Create a field together with a fresh control element.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let input = match &kind {
            FieldKind::Textarea => Element::textarea(name.clone()),
            FieldKind::Select => Element::new("select").with_attr("name", name.clone()),
            other => Element::input(name.clone(), other.input_type().unwrap_or("text")),
        };
        Self::from_element(input, None)
    }

    /// Wrap an existing control. `container` is where inline errors go,
    /// usually the control's parent form group.
    pub fn from_element(input: Element, container: Option<Element>) -> Self {
        Self {
            name: input.attr("name").unwrap_or_default(),
            kind: FieldKind::of(&input),
            required: input.has_attr("required"),
            input,
            container,
            error: Arc::new(RwLock::new(None)),
        }
    }

    /// Mark the field as required.
    pub fn required(self) -> Self {
        self.input.set_attr("required", "");
        Self {
            required: true,
            ..self
        }
    }

    /// Set the error container.
    pub fn with_container(mut self, container: Element) -> Self {
        self.container = Some(container);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn input(&self) -> &Element {
        &self.input
    }

    pub fn container(&self) -> Option<&Element> {
        self.container.as_ref()
    }

    pub fn value(&self) -> String {
        self.input.value()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.input.set_value(value);
    }

    /// The error from the last validation pass, if it failed.
    pub fn error(&self) -> Option<FieldError> {
        self.error
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.error().is_none()
    }

    pub(crate) fn set_error(&self, error: Option<FieldError>) {
        if let Ok(mut guard) = self.error.write() {
            *guard = error;
        }
    }
}
