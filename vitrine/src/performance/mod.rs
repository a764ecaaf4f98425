//! Lazy images, scroll throttling and resource hints.

mod debounce;

pub use debounce::Debouncer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use vitrine_dom::{Document, Element};

use crate::timer;

const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=Playfair+Display:wght@400;500;600;700&display=swap";

/// `img[loading=lazy]` elements waiting to be loaded.
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    pending: Arc<RwLock<Vec<Element>>>,
}

impl LazyImages {
    pub fn new(document: &Document) -> Self {
        let images =
            document.query_all(|el| el.is_tag("img") && el.attr("loading").as_deref() == Some("lazy"));
        Self {
            pending: Arc::new(RwLock::new(images)),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.read().map(|p| p.len()).unwrap_or(0)
    }

    /// Load an image entering the viewport. Returns false if it was not
    /// waiting.
    pub fn on_intersect(&self, el: &Element) -> bool {
        let Ok(mut pending) = self.pending.write() else {
            return false;
        };
        let Some(index) = pending.iter().position(|img| img == el) else {
            return false;
        };
        let img = pending.remove(index);
        drop(pending);

        load(&img);
        img.remove_class("lazy");
        true
    }

    /// Load every waiting image at once, for hosts that never report
    /// intersections.
    pub fn load_all_now(&self) {
        let images = self
            .pending
            .write()
            .map(|mut p| std::mem::take(&mut *p))
            .unwrap_or_default();
        for img in &images {
            load(img);
        }
    }
}

fn load(img: &Element) {
    if let Some(src) = img.remove_attr("data-src") {
        img.set_attr("src", src);
    }
}

/// Lets at most one scroll update run per frame.
#[derive(Debug, Clone, Default)]
pub struct ScrollThrottle {
    ticking: Arc<AtomicBool>,
}

impl ScrollThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next frame. False if an update is already queued.
    pub fn request(&self) -> bool {
        self.ticking
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the frame claimed by [`request`](Self::request).
    pub fn frame(&self) {
        self.ticking.store(false, Ordering::Release);
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking.load(Ordering::Acquire)
    }

    /// Run `update` on the next frame unless one is already queued.
    ///
    /// Outside a runtime the update runs right away.
    pub fn schedule<F>(&self, frame: Duration, update: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.request() {
            return false;
        }
        if tokio::runtime::Handle::try_current().is_err() {
            update();
            self.frame();
            return true;
        }
        let throttle = self.clone();
        timer::schedule(frame, move || {
            update();
            throttle.frame();
        });
        true
    }
}

/// Hint the browser to fetch the site fonts early.
pub fn preload_resources(document: &Document) -> Element {
    let link = Element::new("link")
        .with_attr("rel", "preload")
        .with_attr("href", FONT_STYLESHEET)
        .with_attr("as", "style");
    document.head().append_child(link.clone());
    link
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    fn lazy(src: &str) -> Element {
        Element::new("img")
            .with_class("lazy")
            .with_attr("loading", "lazy")
            .with_attr("data-src", src)
    }

    #[test]
    fn test_lazy_image_loads_on_intersect() {
        let img = lazy("/reel.jpg");
        let eager = Element::new("img").with_attr("src", "/logo.png");
        let doc = Document::new(
            Element::new("body")
                .with_child(img.clone())
                .with_child(eager.clone()),
        );
        let images = LazyImages::new(&doc);
        assert_eq!(images.pending_count(), 1);

        assert!(!images.on_intersect(&eager));
        assert!(images.on_intersect(&img));
        assert_eq!(img.attr("src").as_deref(), Some("/reel.jpg"));
        assert!(!img.has_attr("data-src"));
        assert!(!img.has_class("lazy"));
        assert!(!images.on_intersect(&img));
    }

    #[test]
    fn test_load_all_now() {
        let first = lazy("/a.jpg");
        let second = Element::new("img").with_attr("loading", "lazy");
        let doc = Document::new(
            Element::new("body")
                .with_child(first.clone())
                .with_child(second.clone()),
        );
        let images = LazyImages::new(&doc);
        images.load_all_now();
        assert_eq!(first.attr("src").as_deref(), Some("/a.jpg"));
        assert!(!second.has_attr("src"));
        assert_eq!(images.pending_count(), 0);
    }

    #[test]
    fn test_throttle_claims_one_frame() {
        let throttle = ScrollThrottle::new();
        assert!(throttle.request());
        assert!(!throttle.request());
        throttle.frame();
        assert!(throttle.request());
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttled_updates_coalesce() {
        let throttle = ScrollThrottle::new();
        let runs = Arc::new(AtomicUsize::new(0));
        for _ in 0..10 {
            let runs = Arc::clone(&runs);
            throttle.schedule(Duration::from_millis(16), move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert!(throttle.is_ticking());
        tokio::time::sleep(Duration::from_millis(17)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(!throttle.is_ticking());
    }

    #[test]
    fn test_preload_font() {
        let doc = Document::default();
        let link = preload_resources(&doc);
        assert_eq!(link.attr("rel").as_deref(), Some("preload"));
        assert_eq!(link.attr("as").as_deref(), Some("style"));
        assert!(doc.head().contains_child(&link));
    }
}
