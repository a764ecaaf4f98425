//! Skip link, modal focus trap, ARIA labelling and the global Escape key.

use vitrine_dom::element::find_first;
use vitrine_dom::{Document, Element, Key, Modifiers};

use crate::modal::VideoModal;
use crate::navigation::Navigation;
use crate::portfolio::ITEM_CLASS;

pub const SKIP_LINK_ID: &str = "skip-link";

const SKIP_LINK_STYLE: [(&str, &str); 11] = [
    ("position", "absolute"),
    ("top", SKIP_LINK_HIDDEN_TOP),
    ("left", "6px"),
    ("background", "var(--accent)"),
    ("color", "var(--bg-primary)"),
    ("padding", "8px 16px"),
    ("text-decoration", "none"),
    ("border-radius", "4px"),
    ("z-index", "10000"),
    ("transition", "top 0.2s"),
    ("font-weight", "500"),
];
const SKIP_LINK_HIDDEN_TOP: &str = "-40px";
const SKIP_LINK_SHOWN_TOP: &str = "6px";

#[derive(Debug, Clone)]
pub struct AccessibilityEnhancer {
    document: Document,
    skip_link: Element,
}

impl AccessibilityEnhancer {
    /// Insert the skip link and label the page's landmarks.
    pub fn new(document: &Document) -> Self {
        let skip_link = SKIP_LINK_STYLE.iter().fold(
            Element::link("#main-content")
                .with_id(SKIP_LINK_ID)
                .with_class("skip-link")
                .with_text("Skip to main content"),
            |link, (property, value)| link.with_style(*property, *value),
        );
        document.body().prepend_child(skip_link.clone());

        let enhancer = Self {
            document: document.clone(),
            skip_link,
        };
        enhancer.enhance_aria();
        enhancer
    }

    pub fn skip_link(&self) -> &Element {
        &self.skip_link
    }

    pub fn is_skip_link(&self, target: &str) -> bool {
        self.skip_link.has_id(target)
    }

    /// Bring the skip link on screen while it has focus.
    pub fn on_focus(&self, target: &str) {
        if self.is_skip_link(target) {
            self.skip_link.set_style("top", SKIP_LINK_SHOWN_TOP);
        }
    }

    pub fn on_blur(&self, target: &str) {
        if self.is_skip_link(target) {
            self.skip_link.set_style("top", SKIP_LINK_HIDDEN_TOP);
        }
    }

    fn enhance_aria(&self) {
        for (index, item) in self.document.query_all_class(ITEM_CLASS).iter().enumerate() {
            let title = find_first(item, |el| el.has_class("portfolio__title"))
                .map(|el| el.text_content())
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| format!("Portfolio item {}", index + 1));
            item.set_attr("aria-label", format!("View {title} video"));
        }

        if let Some(form) = self.document.get_element_by_id("contact-form") {
            form.set_attr("aria-label", "Contact form");
        }

        if let Some(menu) = self.document.query_class("nav__menu") {
            menu.set_attr("role", "navigation");
            menu.set_attr("aria-label", "Main navigation");
        }
    }

    /// Keep Tab cycling inside the open video modal. Returns true when focus
    /// was wrapped.
    pub fn trap_focus(&self, modal: &VideoModal, key: Key, modifiers: Modifiers) -> bool {
        if key != Key::Tab || !modal.is_open() {
            return false;
        }
        let focusable = modal.focusable_elements();
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return false;
        };

        let active = self.document.active_element();
        if modifiers.shift {
            if active.as_ref() == Some(first) {
                self.document.focus(last);
                return true;
            }
        } else if active.as_ref() == Some(last) {
            self.document.focus(first);
            return true;
        }
        false
    }

    /// Escape closes whatever overlay is open.
    pub fn handle_escape(&self, modal: &VideoModal, navigation: &Navigation) {
        if modal.is_open() {
            modal.close();
        }
        if navigation.is_menu_open() {
            navigation.close_mobile_menu();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::ScrollConfig;
    use crate::modal::{CLOSE_CLASS, CONTENT_CLASS, MODAL_ID, PLAYER_ID};

    fn page() -> Document {
        let item = |title: Option<&str>| {
            let item = Element::div().with_class(ITEM_CLASS);
            match title {
                Some(title) => item.with_child(
                    Element::new("h3").with_class("portfolio__title").with_text(title),
                ),
                None => item,
            }
        };
        let modal = Element::div().with_id(MODAL_ID).with_class("hidden").with_child(
            Element::div()
                .with_class(CONTENT_CLASS)
                .with_child(Element::button().with_class(CLOSE_CLASS))
                .with_child(Element::div().with_id(PLAYER_ID)),
        );
        Document::new(
            Element::new("body")
                .with_child(
                    Element::new("nav").with_class("nav").with_child(
                        Element::new("ul").with_id("nav-menu").with_class("nav__menu"),
                    ),
                )
                .with_child(Element::button().with_id("nav-toggle"))
                .with_child(item(Some("Wedding Reel")))
                .with_child(item(None))
                .with_child(Element::new("form").with_id("contact-form"))
                .with_child(modal),
        )
    }

    #[test]
    fn test_skip_link_is_first_and_moves_on_focus() {
        let doc = page();
        let a11y = AccessibilityEnhancer::new(&doc);
        assert_eq!(doc.body().first_child().as_ref(), Some(a11y.skip_link()));
        assert_eq!(a11y.skip_link().attr("href").as_deref(), Some("#main-content"));
        assert_eq!(a11y.skip_link().style("top").as_deref(), Some("-40px"));

        a11y.on_focus(SKIP_LINK_ID);
        assert_eq!(a11y.skip_link().style("top").as_deref(), Some("6px"));
        a11y.on_blur("something-else");
        assert_eq!(a11y.skip_link().style("top").as_deref(), Some("6px"));
        a11y.on_blur(SKIP_LINK_ID);
        assert_eq!(a11y.skip_link().style("top").as_deref(), Some("-40px"));
    }

    #[test]
    fn test_aria_labels() {
        let doc = page();
        AccessibilityEnhancer::new(&doc);
        let items = doc.query_all_class(ITEM_CLASS);
        assert_eq!(
            items[0].attr("aria-label").as_deref(),
            Some("View Wedding Reel video")
        );
        assert_eq!(
            items[1].attr("aria-label").as_deref(),
            Some("View Portfolio item 2 video")
        );
        let form = doc.get_element_by_id("contact-form").unwrap();
        assert_eq!(form.attr("aria-label").as_deref(), Some("Contact form"));
        let menu = doc.get_element_by_id("nav-menu").unwrap();
        assert_eq!(menu.attr("role").as_deref(), Some("navigation"));
    }

    #[test]
    fn test_focus_trap_wraps() {
        let doc = page();
        let a11y = AccessibilityEnhancer::new(&doc);
        let modal = VideoModal::new(&doc, Duration::ZERO);

        assert!(!a11y.trap_focus(&modal, Key::Tab, Modifiers::new()));

        modal.open("abc", None);
        let focusable = modal.focusable_elements();
        let (first, last) = (focusable[0].clone(), focusable[1].clone());

        doc.focus(&last);
        assert!(a11y.trap_focus(&modal, Key::Tab, Modifiers::new()));
        assert!(doc.is_focused(&first));

        assert!(a11y.trap_focus(&modal, Key::Tab, Modifiers::shift()));
        assert!(doc.is_focused(&last));

        assert!(!a11y.trap_focus(&modal, Key::Tab, Modifiers::shift()));
        assert!(!a11y.trap_focus(&modal, Key::Enter, Modifiers::new()));
    }

    #[test]
    fn test_escape_closes_overlays() {
        let doc = page();
        let a11y = AccessibilityEnhancer::new(&doc);
        let modal = VideoModal::new(&doc, Duration::ZERO);
        let nav = Navigation::new(&doc, ScrollConfig::default());

        modal.open("abc", None);
        nav.toggle_mobile_menu();
        assert!(nav.is_menu_open());

        a11y.handle_escape(&modal, &nav);
        assert!(!modal.is_open());
        assert!(!nav.is_menu_open());
    }
}
