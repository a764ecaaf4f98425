//! Video lightbox.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use vitrine_dom::{Document, Element};

use crate::timer;

pub const MODAL_ID: &str = "video-modal";
pub const PLAYER_ID: &str = "video-player";
pub const CLOSE_CLASS: &str = "video-modal__close";
pub const OVERLAY_CLASS: &str = "video-modal__overlay";
pub const CONTENT_CLASS: &str = "video-modal__content";

/// YouTube embed URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1&rel=0&modestbranding=1&showinfo=0")
}

#[derive(Debug, Default)]
struct ModalState {
    open: bool,
    /// Element that opened the modal; focus returns here on close.
    trigger: Option<Element>,
}

/// Plays a video in an overlay.
///
/// Opening needs the modal, the player and a video id; if any is missing
/// `open` does nothing.
#[derive(Debug, Clone)]
pub struct VideoModal {
    document: Document,
    modal: Option<Element>,
    player: Option<Element>,
    close_button: Option<Element>,
    overlay: Option<Element>,
    content: Option<Element>,
    focus_delay: Duration,
    state: Arc<RwLock<ModalState>>,
}

impl VideoModal {
    pub fn new(document: &Document, focus_delay: Duration) -> Self {
        Self {
            document: document.clone(),
            modal: document.get_element_by_id(MODAL_ID),
            player: document.get_element_by_id(PLAYER_ID),
            close_button: document.query_class(CLOSE_CLASS),
            overlay: document.query_class(OVERLAY_CLASS),
            content: document.query_class(CONTENT_CLASS),
            focus_delay,
            state: Arc::new(RwLock::new(ModalState::default())),
        }
    }

    pub fn modal(&self) -> Option<&Element> {
        self.modal.as_ref()
    }

    pub fn close_button(&self) -> Option<&Element> {
        self.close_button.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state.read().map(|s| s.open).unwrap_or(false)
    }

    /// Open the modal on a video. `trigger` gets focus back on close.
    /// Returns false when nothing was opened.
    pub fn open(&self, video_id: &str, trigger: Option<Element>) -> bool {
        let (Some(modal), Some(player)) = (&self.modal, &self.player) else {
            log::debug!("Video modal markup missing, not opening");
            return false;
        };
        if video_id.is_empty() {
            return false;
        }

        let iframe = Element::new("iframe")
            .with_attr("src", embed_url(video_id))
            .with_attr("frameborder", "0")
            .with_attr("allowfullscreen", "")
            .with_attr("allow", "autoplay; encrypted-media")
            .with_style("width", "100%")
            .with_style("height", "100%");
        player.clear_children();
        player.append_child(iframe);

        modal.remove_class("hidden");
        modal.add_class("active");
        modal.set_attr("aria-hidden", "false");
        self.document.body().set_style("overflow", "hidden");

        if let Ok(mut state) = self.state.write() {
            state.open = true;
            state.trigger = trigger;
        }

        if let Some(close) = self.close_button.clone() {
            let document = self.document.clone();
            let state = Arc::clone(&self.state);
            timer::schedule(self.focus_delay, move || {
                if state.read().map(|s| s.open).unwrap_or(false) {
                    document.focus(&close);
                }
            });
        }

        log::debug!("Video modal opened on {video_id}");
        true
    }

    /// Close the modal and stop the video.
    pub fn close(&self) {
        let Some(modal) = &self.modal else {
            return;
        };

        modal.remove_class("active");
        modal.add_class("hidden");
        modal.set_attr("aria-hidden", "true");
        if let Some(player) = &self.player {
            player.clear_children();
        }
        self.document.body().clear_style("overflow");

        let trigger = self.state.write().ok().and_then(|mut state| {
            state.open = false;
            state.trigger.take()
        });
        if let Some(trigger) = trigger {
            self.document.focus(&trigger);
        }
    }

    /// Route a click inside the modal. Returns true if the click was consumed.
    ///
    /// The close button and the overlay close the modal; clicks on the
    /// content are swallowed so they never reach the overlay.
    pub fn handle_click(&self, path: &[Element]) -> bool {
        let on = |el: &Option<Element>| el.as_ref().is_some_and(|el| path.contains(el));

        if on(&self.close_button) {
            self.close();
            return true;
        }
        if on(&self.content) {
            return true;
        }
        if on(&self.overlay) {
            self.close();
            return true;
        }
        false
    }

    /// Focusable elements inside the modal, in document order.
    pub fn focusable_elements(&self) -> Vec<Element> {
        let Some(modal) = &self.modal else {
            return Vec::new();
        };
        vitrine_dom::element::find_all(modal, |el| {
            el.is_tag("button")
                || el.is_tag("iframe")
                || el.attr("tabindex").is_some_and(|t| t != "-1")
        })
    }
}
