use std::sync::{Arc, RwLock};

use crate::element::{self, Element};

#[derive(Debug, Default)]
struct WindowState {
    focused: Option<Element>,
    scroll_y: i32,
}

/// The page: a `head`, a `body`, focus tracking and the window scroll
/// position.
///
/// Cloning a `Document` shares the same page.
#[derive(Debug, Clone)]
pub struct Document {
    head: Element,
    body: Element,
    window: Arc<RwLock<WindowState>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::new("body"))
    }
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self {
            head: Element::new("head"),
            body,
            window: Arc::new(RwLock::new(WindowState::default())),
        }
    }

    pub fn head(&self) -> &Element {
        &self.head
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        element::find_element(&self.body, id)
    }

    /// First element in the body carrying `class`.
    pub fn query_class(&self, class: &str) -> Option<Element> {
        element::find_first(&self.body, |el| el.has_class(class))
    }

    /// Every element in the body carrying `class`, in document order.
    pub fn query_all_class(&self, class: &str) -> Vec<Element> {
        element::find_all(&self.body, |el| el.has_class(class))
    }

    pub fn query_all_tag(&self, tag: &str) -> Vec<Element> {
        element::find_all(&self.body, |el| el.is_tag(tag))
    }

    pub fn query_first(&self, pred: impl Fn(&Element) -> bool) -> Option<Element> {
        element::find_first(&self.body, pred)
    }

    pub fn query_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<Element> {
        element::find_all(&self.body, pred)
    }

    /// Elements from the body down to the element with `id`.
    pub fn path_to(&self, id: &str) -> Option<Vec<Element>> {
        element::path_to(&self.body, id)
    }

    /// Nearest element on the path from `id` up to the body that matches
    /// `pred`, the target itself included.
    pub fn closest(&self, id: &str, pred: impl Fn(&Element) -> bool) -> Option<Element> {
        self.path_to(id)?.into_iter().rev().find(|el| pred(el))
    }

    pub fn parent_of(&self, target: &Element) -> Option<Element> {
        element::find_parent(&self.body, target)
    }

    /// Whether the element is attached to the body.
    pub fn is_connected(&self, target: &Element) -> bool {
        element::contains(&self.body, target)
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn active_element(&self) -> Option<Element> {
        self.window
            .read()
            .map(|w| w.focused.clone())
            .unwrap_or_default()
    }

    pub fn is_focused(&self, target: &Element) -> bool {
        self.active_element().as_ref() == Some(target)
    }

    /// Focus an element. Returns true if focus changed.
    pub fn focus(&self, target: &Element) -> bool {
        let Ok(mut window) = self.window.write() else {
            return false;
        };
        if window.focused.as_ref() == Some(target) {
            return false;
        }
        log::trace!("focus -> {}", target.id());
        window.focused = Some(target.clone());
        true
    }

    /// Clear focus. Returns true if something was focused.
    pub fn blur(&self) -> bool {
        self.window
            .write()
            .map(|mut w| w.focused.take().is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_y(&self) -> i32 {
        self.window.read().map(|w| w.scroll_y).unwrap_or(0)
    }

    /// Scroll the window. Negative positions clamp to the top.
    pub fn scroll_to(&self, y: i32) {
        if let Ok(mut window) = self.window.write() {
            window.scroll_y = y.max(0);
        }
    }
}
