//! The assembled site: every component built once, events routed to them.

use std::sync::Arc;
use std::time::Duration;

use vitrine_dom::{Document, Element, Event, Key, Modifiers};

use crate::accessibility::AccessibilityEnhancer;
use crate::animation::ScrollAnimations;
use crate::config::SiteConfig;
use crate::form::ContactForm;
use crate::modal::VideoModal;
use crate::navigation::Navigation;
use crate::performance::{self, LazyImages, ScrollThrottle};
use crate::portfolio::{PortfolioItem, PortfolioManager};
use crate::submission::{SubmissionController, SubmissionOutcome, SubmitAttempt, Transport};
use crate::theme::{ThemeManager, ThemeStore};
use crate::timer;

const HERO_ANIMATION_DELAY: Duration = Duration::from_millis(100);
const HERO_ANIMATION: &str = "fadeInUp 1s ease-out";

/// Owns the page and its components.
///
/// Components hold no references to each other; anything that needs two of
/// them (Escape closing the modal and the menu, a play button opening the
/// modal) is wired here.
///
/// # Example
///
/// ```ignore
/// let site = Site::new(standard_page(), SiteConfig::default(), transport, store);
/// site.dispatch(&Event::input("message"));
/// site.dispatch(&Event::submit("contact-form"));
/// ```
pub struct Site {
    document: Document,
    config: SiteConfig,
    theme: ThemeManager,
    navigation: Navigation,
    modal: VideoModal,
    submission: SubmissionController,
    animations: ScrollAnimations,
    portfolio: PortfolioManager,
    images: LazyImages,
    scroll: ScrollThrottle,
    accessibility: AccessibilityEnhancer,
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("theme", &self.theme)
            .field("submission", &self.submission)
            .finish_non_exhaustive()
    }
}

impl Site {
    pub fn new(
        document: Document,
        config: SiteConfig,
        transport: Arc<dyn Transport>,
        theme_store: Arc<dyn ThemeStore>,
    ) -> Self {
        let timing = &config.timing;

        let theme = ThemeManager::new(&document, theme_store, timing.theme_transition());
        let navigation = Navigation::new(&document, config.scroll.clone());
        let modal = VideoModal::new(&document, timing.modal_focus_delay());
        let form = ContactForm::from_document(&document, &config.form);
        let submission =
            SubmissionController::new(document.clone(), form, transport, timing.clone());
        let animations = ScrollAnimations::new(&document);
        let portfolio = PortfolioManager::new(&document, timing.reveal_stagger());
        let images = LazyImages::new(&document);
        performance::preload_resources(&document);
        // labels set here override the portfolio's own
        let accessibility = AccessibilityEnhancer::new(&document);

        document.body().add_class("loaded");
        if let Some(hero) = document.query_class("hero__title") {
            timer::schedule(HERO_ANIMATION_DELAY, move || {
                hero.set_style("animation", HERO_ANIMATION);
            });
        }

        log::info!(
            "Site initialized: {} field(s), {} portfolio item(s), {} animated element(s)",
            submission.form().fields().len(),
            portfolio.items().len(),
            animations.observed_count()
        );

        Self {
            document,
            config,
            theme,
            navigation,
            modal,
            submission,
            animations,
            portfolio,
            images,
            scroll: ScrollThrottle::new(),
            accessibility,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn modal(&self) -> &VideoModal {
        &self.modal
    }

    pub fn form(&self) -> &ContactForm {
        self.submission.form()
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    pub fn animations(&self) -> &ScrollAnimations {
        &self.animations
    }

    pub fn portfolio(&self) -> &PortfolioManager {
        &self.portfolio
    }

    pub fn images(&self) -> &LazyImages {
        &self.images
    }

    pub fn accessibility(&self) -> &AccessibilityEnhancer {
        &self.accessibility
    }

    /// Submit the form and wait for the outcome. `None` when it did not start.
    pub async fn submit(&self) -> Option<SubmissionOutcome> {
        self.submission.submit().await
    }

    /// Route an event to the components that handle it.
    pub fn dispatch(&self, event: &Event) {
        log::trace!("dispatch {event:?}");
        match event {
            Event::Click { target } => self.on_click(target),
            Event::Key {
                target,
                key,
                modifiers,
            } => self.on_key(target.as_deref(), *key, *modifiers),
            Event::Input { target } => self.form().on_input(target),
            Event::Focus { target } => {
                if let Some(el) = self.document.get_element_by_id(target) {
                    self.document.focus(&el);
                }
                self.accessibility.on_focus(target);
            }
            Event::Blur { target } => {
                if self.document.active_element().is_some_and(|el| el.has_id(target)) {
                    self.document.blur();
                }
                self.form().on_blur(target);
                self.accessibility.on_blur(target);
            }
            Event::Submit { .. } => {
                self.on_submit();
            }
            Event::Scroll { y } => self.on_scroll(*y),
            Event::MouseEnter { target } => {
                if let Some(item) = self.portfolio_item(target) {
                    self.portfolio.animate_enter(item);
                }
            }
            Event::MouseLeave { target } => {
                if let Some(item) = self.portfolio_item(target) {
                    self.portfolio.animate_leave(item);
                }
            }
            Event::Intersect { target } => {
                if let Some(el) = self.document.get_element_by_id(target) {
                    self.animations.on_intersect(&el);
                    self.images.on_intersect(&el);
                }
            }
        }
    }

    fn on_click(&self, target: &str) {
        let Some(path) = self.document.path_to(target) else {
            log::debug!("Click on detached element {target}");
            return;
        };
        let on = |el: Option<&Element>| el.is_some_and(|el| path.contains(el));

        if on(self.theme.toggle_button()) {
            self.theme.toggle();
        }

        if on(self.navigation.toggle()) {
            self.navigation.toggle_mobile_menu();
        } else if let Some(link) = path.iter().rev().find(|el| self.navigation.is_link(el)) {
            self.navigation.handle_nav_click(link);
        } else {
            self.navigation.handle_document_click(target);
        }

        if self.modal.handle_click(&path) {
            return;
        }

        if let Some(item) = self.portfolio.play_in(&path) {
            self.open_video(item);
            return;
        }

        if on(self.form().submit_button()) {
            self.on_submit();
        }
    }

    fn on_key(&self, target: Option<&str>, key: Key, modifiers: Modifiers) {
        match key {
            Key::Escape => self.accessibility.handle_escape(&self.modal, &self.navigation),
            Key::Tab => {
                self.accessibility.trap_focus(&self.modal, key, modifiers);
            }
            _ => {
                let Some(path) = target.and_then(|t| self.document.path_to(t)) else {
                    return;
                };
                let activated = self
                    .portfolio
                    .item_in(&path)
                    .and_then(|item| self.portfolio.handle_key(item, key));
                if let Some(item) = activated {
                    self.open_video(&item);
                }
            }
        }
    }

    fn on_submit(&self) -> SubmitAttempt {
        let attempt = self.submission.spawn_submit();
        log::debug!("Submit request: {attempt:?}");
        attempt
    }

    fn on_scroll(&self, y: i32) {
        self.document.scroll_to(y);
        let navigation = self.navigation.clone();
        self.scroll.schedule(self.config.timing.frame(), move || {
            navigation.handle_scroll();
            navigation.update_active_nav();
        });
    }

    fn open_video(&self, item: &PortfolioItem) {
        let Some(video_id) = item.video_id() else {
            log::debug!("Portfolio item {} has no video", item.element.id());
            return;
        };
        self.modal.open(&video_id, item.play.clone());
    }

    fn portfolio_item(&self, target: &str) -> Option<&PortfolioItem> {
        self.portfolio
            .items()
            .iter()
            .find(|item| item.element.has_id(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::standard_page;
    use crate::submission::SimulatedTransport;
    use crate::theme::{MemoryThemeStore, Theme};

    fn site() -> Site {
        Site::new(
            standard_page(),
            SiteConfig::default(),
            Arc::new(SimulatedTransport::new(Duration::from_millis(10))),
            Arc::new(MemoryThemeStore::new()),
        )
    }

    #[test]
    fn test_new_marks_page_loaded() {
        let site = site();
        assert!(site.document().body().has_class("loaded"));
        assert_eq!(site.form().fields().len(), 4);
        assert_eq!(site.portfolio().items().len(), 3);
        assert_eq!(site.images().pending_count(), 3);
        assert_eq!(site.document().head().children().len(), 1);
    }

    #[test]
    fn test_click_theme_toggle() {
        let site = site();
        site.dispatch(&Event::click(crate::theme::TOGGLE_BUTTON_ID));
        assert_eq!(site.theme().current(), Theme::Light);
    }

    #[test]
    fn test_click_play_opens_modal_and_escape_closes() {
        let site = site();
        site.dispatch(&Event::click("play-2"));
        assert!(site.modal().is_open());

        site.dispatch(&Event::key(None, Key::Escape));
        assert!(!site.modal().is_open());
        let play = site.document().get_element_by_id("play-2").unwrap();
        assert!(site.document().is_focused(&play));
    }

    #[test]
    fn test_enter_on_item_opens_modal() {
        let site = site();
        site.dispatch(&Event::key(Some("item-1"), Key::Char('x')));
        assert!(!site.modal().is_open());
        site.dispatch(&Event::key(Some("item-1"), Key::Enter));
        assert!(site.modal().is_open());
    }

    #[test]
    fn test_scroll_without_runtime_updates_now() {
        let site = site();
        site.dispatch(&Event::Scroll { y: 1000 });
        let about = site.document().get_element_by_id("nav-about").unwrap();
        assert!(about.has_class("active"));
    }
}
