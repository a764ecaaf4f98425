//! Transient banners shown at the top of the contact form.

use std::time::Duration;

use uuid::Uuid;
use vitrine_dom::Element;

use crate::timer;

/// Default duration for success banners.
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(8);

/// Default duration for error banners.
pub const ERROR_BANNER_DURATION: Duration = Duration::from_secs(6);

/// Default fade-out before a banner is removed.
pub const BANNER_FADE_DURATION: Duration = Duration::from_millis(300);

/// Class added while a banner fades out.
pub const FADE_OUT_CLASS: &str = "fade-out";

/// Banner category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// Class of the banner element.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "success-message",
            Self::Error => "form-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
        }
    }
}

/// A banner message.
///
/// # Example
///
/// ```ignore
/// host.show(Banner::success("Message sent successfully!", "Thanks!"));
/// host.show(Banner::error("Validation Error", "Please correct the errors above"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub title: String,
    pub body: String,
    /// How long the banner stays before fading out.
    pub duration: Duration,
}

impl Banner {
    /// Create a success banner.
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            title: title.into(),
            body: body.into(),
            duration: SUCCESS_BANNER_DURATION,
        }
    }

    /// Create an error banner.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            title: title.into(),
            body: body.into(),
            duration: ERROR_BANNER_DURATION,
        }
    }

    /// Set a custom duration for this banner.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Build the banner's element.
    pub fn element(&self, id: Uuid) -> Element {
        Element::div()
            .with_class(self.kind.class())
            .with_attr("data-banner-id", id.to_string())
            .with_attr("role", if self.kind == BannerKind::Error { "alert" } else { "status" })
            .with_child(Element::new("i").with_class("fas").with_class(self.kind.icon()))
            .with_child(
                Element::div()
                    .with_child(Element::new("h4").with_text(self.title.clone()))
                    .with_child(Element::new("p").with_text(self.body.clone())),
            )
    }
}

/// Inserts banners at the top of a host element and dismisses them after
/// their duration.
///
/// At most one banner is shown at a time: showing a banner removes any
/// banner already present. A dismissal timer only ever removes its own
/// banner.
#[derive(Debug, Clone)]
pub struct BannerHost {
    host: Option<Element>,
    fade: Duration,
}

impl BannerHost {
    pub fn new(host: Option<Element>) -> Self {
        Self {
            host,
            fade: BANNER_FADE_DURATION,
        }
    }

    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// Show a banner, replacing any other. Returns its id, or `None` when
    /// there is no host element.
    pub fn show(&self, banner: Banner) -> Option<Uuid> {
        let Some(host) = &self.host else {
            log::debug!("No banner host, dropping '{}'", banner.title);
            return None;
        };

        self.clear();

        let id = Uuid::new_v4();
        let element = banner.element(id);
        host.prepend_child(element.clone());
        log::debug!("Banner {:?} '{}' shown for {:?}", banner.kind, banner.title, banner.duration);

        let host = host.clone();
        let fade = self.fade;
        timer::schedule(banner.duration, move || {
            if !host.contains_child(&element) {
                return;
            }
            element.add_class(FADE_OUT_CLASS);
            timer::schedule(fade, move || {
                host.remove_child(&element);
            });
        });

        Some(id)
    }

    /// Remove every banner from the host.
    pub fn clear(&self) {
        if let Some(host) = &self.host {
            host.remove_children_where(|child| {
                child.has_class(BannerKind::Success.class()) || child.has_class(BannerKind::Error.class())
            });
        }
    }

    /// The banner currently shown, if any.
    pub fn current(&self) -> Option<Element> {
        self.host.as_ref()?.children().into_iter().find(|child| {
            child.has_class(BannerKind::Success.class()) || child.has_class(BannerKind::Error.class())
        })
    }

    /// The banner currently shown, if it is of `kind`.
    pub fn current_of(&self, kind: BannerKind) -> Option<Element> {
        self.current().filter(|el| el.has_class(kind.class()))
    }

    /// Whether the banner with `id` is still shown.
    pub fn is_showing(&self, id: Uuid) -> bool {
        let id = id.to_string();
        self.current()
            .is_some_and(|el| el.attr("data-banner-id").as_deref() == Some(id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> (Element, BannerHost) {
        let form = Element::new("form").with_child(Element::input("name", "text"));
        let host = BannerHost::new(Some(form.clone()));
        (form, host)
    }

    #[test]
    fn test_banner_element_structure() {
        let banner = Banner::error("Validation Error", "Please correct the errors above");
        let el = banner.element(Uuid::nil());
        assert!(el.has_class("form-error"));
        assert_eq!(el.attr("role").as_deref(), Some("alert"));
        assert_eq!(el.text_content(), "Validation Error Please correct the errors above");
    }

    #[test]
    fn test_default_durations() {
        assert_eq!(Banner::success("a", "b").duration, Duration::from_secs(8));
        assert_eq!(Banner::error("a", "b").duration, Duration::from_secs(6));
        assert_eq!(
            Banner::error("a", "b").with_duration(Duration::from_secs(1)).duration,
            Duration::from_secs(1)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_is_inserted_first() {
        let (form, host) = host();
        host.show(Banner::success("Sent", "Thanks"));
        let first = form.first_child().unwrap();
        assert!(first.has_class("success-message"));
        assert_eq!(form.children().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_banners_never_stack() {
        let (form, host) = host();
        host.show(Banner::error("Validation Error", "first"));
        host.show(Banner::error("Validation Error", "second"));
        host.show(Banner::success("Sent", "third"));

        let banners: Vec<_> = form
            .children()
            .into_iter()
            .filter(|el| el.has_class("form-error") || el.has_class("success-message"))
            .collect();
        assert_eq!(banners.len(), 1);
        assert!(host.current_of(BannerKind::Success).is_some());
        assert!(host.current_of(BannerKind::Error).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_fades_then_disappears() {
        let (_form, host) = host();
        let id = host.show(Banner::error("Validation Error", "x")).unwrap();

        tokio::time::sleep(Duration::from_millis(5_999)).await;
        assert!(host.is_showing(id));

        tokio::time::sleep(Duration::from_millis(2)).await;
        let current = host.current().unwrap();
        assert!(current.has_class(FADE_OUT_CLASS));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!host.is_showing(id));
        assert!(host.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_leaves_replacement_alone() {
        let (_form, host) = host();
        host.show(Banner::error("Validation Error", "old"));
        tokio::time::sleep(Duration::from_secs(5)).await;

        let newer = host.show(Banner::success("Sent", "new")).unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(host.is_showing(newer));
        assert!(!host.current().unwrap().has_class(FADE_OUT_CLASS));
    }

    #[test]
    fn test_missing_host_is_noop() {
        let host = BannerHost::new(None);
        assert_eq!(host.show(Banner::success("a", "b")), None);
        host.clear();
        assert!(host.current().is_none());
    }
}
