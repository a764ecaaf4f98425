//! Header styling, active link tracking, in-page scrolling and the mobile
//! menu.

use vitrine_dom::{Document, Element};

use crate::config::ScrollConfig;
use crate::theme::Theme;

pub const NAV_LINK_CLASS: &str = "nav__link";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const ACTIVE_CLASS: &str = "active";

const SCROLLED_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";

#[derive(Debug, Clone)]
pub struct Navigation {
    document: Document,
    links: Vec<Element>,
    sections: Vec<Element>,
    header: Option<Element>,
    nav: Option<Element>,
    toggle: Option<Element>,
    menu: Option<Element>,
    config: ScrollConfig,
}

impl Navigation {
    pub fn new(document: &Document, config: ScrollConfig) -> Self {
        Self {
            document: document.clone(),
            links: document.query_all_class(NAV_LINK_CLASS),
            sections: document.query_all_tag("section"),
            header: document.query_class("header"),
            nav: document.query_class("nav"),
            toggle: document.get_element_by_id(NAV_TOGGLE_ID),
            menu: document.get_element_by_id(NAV_MENU_ID),
            config,
        }
    }

    pub fn links(&self) -> &[Element] {
        &self.links
    }

    pub fn is_link(&self, el: &Element) -> bool {
        self.links.contains(el)
    }

    pub fn toggle(&self) -> Option<&Element> {
        self.toggle.as_ref()
    }

    pub fn nav(&self) -> Option<&Element> {
        self.nav.as_ref()
    }

    /// Restyle the header for the current scroll position.
    pub fn handle_scroll(&self) {
        let Some(header) = &self.header else {
            return;
        };
        let scrolled = self.document.scroll_y() > self.config.header_threshold;
        let theme = Theme::of(self.document.body());
        header.set_style("background", theme.header_background(scrolled));
        header.set_style("box-shadow", if scrolled { SCROLLED_SHADOW } else { "none" });
    }

    /// Mark the link of the section under the scroll position as active.
    ///
    /// When no section contains the position the previous link stays active.
    /// Returns the id of the section now active, if any.
    pub fn update_active_nav(&self) -> Option<String> {
        let position = self.document.scroll_y().saturating_add(self.config.active_offset);
        let section = self
            .sections
            .iter()
            .rev()
            .find(|section| section.layout().contains_y(position))?;
        let id = section.id();

        for link in &self.links {
            link.remove_class(ACTIVE_CLASS);
        }
        let href = format!("#{id}");
        if let Some(link) = self
            .links
            .iter()
            .find(|link| link.attr("href").as_deref() == Some(href.as_str()))
        {
            link.add_class(ACTIVE_CLASS);
        }
        Some(id)
    }

    /// Scroll so the section sits just below the fixed header. Returns false
    /// if there is no such section.
    pub fn scroll_to_section(&self, section_id: &str) -> bool {
        let Some(section) = self.document.get_element_by_id(section_id) else {
            log::debug!("No section #{section_id} to scroll to");
            return false;
        };
        self.document
            .scroll_to(section.layout().offset_top.saturating_sub(self.config.section_offset));
        true
    }

    /// Follow an in-page nav link and close the mobile menu.
    pub fn handle_nav_click(&self, link: &Element) {
        if let Some(target) = link.attr("href").as_deref().and_then(|h| h.strip_prefix('#')) {
            self.scroll_to_section(target);
        }
        self.close_mobile_menu();
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|menu| menu.has_class(ACTIVE_CLASS))
    }

    pub fn toggle_mobile_menu(&self) {
        let (Some(menu), Some(toggle)) = (&self.menu, &self.toggle) else {
            return;
        };
        let open = menu.toggle_class(ACTIVE_CLASS);
        if open {
            toggle.add_class(ACTIVE_CLASS);
        } else {
            toggle.remove_class(ACTIVE_CLASS);
        }
        toggle.set_attr("aria-expanded", open.to_string());
        self.document
            .body()
            .set_style("overflow", if open { "hidden" } else { "" });
    }

    pub fn close_mobile_menu(&self) {
        let (Some(menu), Some(toggle)) = (&self.menu, &self.toggle) else {
            return;
        };
        menu.remove_class(ACTIVE_CLASS);
        toggle.remove_class(ACTIVE_CLASS);
        toggle.set_attr("aria-expanded", "false");
        self.document.body().clear_style("overflow");
    }

    /// Close the open menu when a click lands outside the nav.
    pub fn handle_document_click(&self, target: &str) {
        if !self.is_menu_open() {
            return;
        }
        let inside = self
            .document
            .closest(target, |el| el.has_class("nav"))
            .is_some();
        if !inside {
            self.close_mobile_menu();
        }
    }
}
