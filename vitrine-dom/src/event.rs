/// Page events, targeted by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click on the innermost element under the pointer
    Click { target: String },
    /// Key press, targeted at the focused element if any
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Value of a form control changed
    Input { target: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Form submit request
    Submit { target: String },
    /// Window scrolled to a vertical position
    Scroll { y: i32 },
    /// Pointer entered an element
    MouseEnter { target: String },
    /// Pointer left an element
    MouseLeave { target: String },
    /// Element entered the viewport
    Intersect { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    /// Key press without modifiers.
    pub fn key(target: Option<&str>, key: Key) -> Self {
        Self::Key {
            target: target.map(str::to_string),
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn input(target: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
        }
    }

    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }

    /// The id of the element this event targets, if it targets one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target }
            | Event::Input { target }
            | Event::Focus { target }
            | Event::Blur { target }
            | Event::Submit { target }
            | Event::MouseEnter { target }
            | Event::MouseLeave { target }
            | Event::Intersect { target } => Some(target),
            Event::Key { target, .. } => target.as_deref(),
            Event::Scroll { .. } => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
}

impl Key {
    /// Keys that activate a focused control (Enter and Space).
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}
