//! Light/dark theme switching.
//!
//! The theme is a `data-theme` attribute on the body; stylesheets key off it.
//! The header background is set inline because its opacity also depends on
//! the scroll position (see [`Navigation`](crate::navigation::Navigation)).

mod store;

pub use store::{FileThemeStore, MemoryThemeStore, NoThemeStore, ThemeStore};

use std::sync::{Arc, RwLock};
use std::time::Duration;

use vitrine_dom::{Document, Element};

use crate::timer;

/// Id of the theme toggle button.
pub const TOGGLE_BUTTON_ID: &str = "theme-toggle-btn";

const TRANSITION_STYLE: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Header background for this theme; more opaque once scrolled.
    pub fn header_background(&self, scrolled: bool) -> &'static str {
        match (self, scrolled) {
            (Self::Light, false) => "rgba(255, 255, 255, 0.95)",
            (Self::Light, true) => "rgba(255, 255, 255, 0.98)",
            (Self::Dark, false) => "rgba(0, 0, 0, 0.95)",
            (Self::Dark, true) => "rgba(0, 0, 0, 0.98)",
        }
    }

    /// Theme named by the body's `data-theme`, dark when absent.
    pub fn of(body: &Element) -> Self {
        body.attr("data-theme")
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Applies, toggles and remembers the page theme.
pub struct ThemeManager {
    body: Element,
    header: Option<Element>,
    toggle_button: Option<Element>,
    store: Arc<dyn ThemeStore>,
    current: RwLock<Theme>,
    transition: Duration,
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

impl ThemeManager {
    /// Apply the stored theme (dark if none) to the page.
    pub fn new(document: &Document, store: Arc<dyn ThemeStore>, transition: Duration) -> Self {
        let theme = match store.load() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                log::warn!("Could not load theme preference: {e}");
                Theme::default()
            }
        };

        let body = document.body().clone();
        body.set_attr("data-theme", theme.as_str());

        Self {
            body,
            header: document.query_class("header"),
            toggle_button: document.get_element_by_id(TOGGLE_BUTTON_ID),
            store,
            current: RwLock::new(theme),
            transition,
        }
    }

    pub fn current(&self) -> Theme {
        self.current.read().map(|guard| *guard).unwrap_or_default()
    }

    pub fn toggle_button(&self) -> Option<&Element> {
        self.toggle_button.as_ref()
    }

    /// Switch between dark and light. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let theme = self.current().toggled();
        if let Ok(mut current) = self.current.write() {
            *current = theme;
        }
        self.body.set_attr("data-theme", theme.as_str());

        if let Err(e) = self.store.save(theme) {
            log::warn!("Could not save theme preference: {e}");
        }

        self.body.set_style("transition", TRANSITION_STYLE);
        let body = self.body.clone();
        timer::schedule(self.transition, move || body.clear_style("transition"));

        self.update_header_background();
        log::debug!("Theme switched to {}", theme.as_str());
        theme
    }

    /// Repaint the header in the current theme's unscrolled color.
    pub fn update_header_background(&self) {
        if let Some(header) = &self.header {
            header.set_style("background", self.current().header_background(false));
        }
    }
}
