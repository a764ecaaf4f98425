//! One-shot entrance animations for elements scrolled into view.

use std::sync::{Arc, RwLock};

use vitrine_dom::{Document, Element};

/// Classes whose elements animate on first intersection.
pub const ANIMATED_CLASSES: [&str; 6] = [
    "service-card",
    "portfolio__item",
    "stat",
    "about__title",
    "section-title",
    "hero__title",
];

/// Entrance animation class for an element.
pub fn animation_class(el: &Element) -> &'static str {
    if el.has_class("service-card") || el.has_class("portfolio__item") {
        "fade-in-up"
    } else if el.has_class("stat") {
        "slide-in-right"
    } else if el.has_class("about__title") || el.has_class("section-title") {
        "slide-in-left"
    } else {
        "fade-in-up"
    }
}

/// Tracks which elements still wait for their entrance animation.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimations {
    observed: Arc<RwLock<Vec<Element>>>,
}

impl ScrollAnimations {
    pub fn new(document: &Document) -> Self {
        let observed =
            document.query_all(|el| ANIMATED_CLASSES.iter().any(|class| el.has_class(class)));
        log::debug!("Observing {} element(s) for entrance animations", observed.len());
        Self {
            observed: Arc::new(RwLock::new(observed)),
        }
    }

    pub fn is_observing(&self, el: &Element) -> bool {
        self.observed
            .read()
            .map(|observed| observed.contains(el))
            .unwrap_or(false)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.read().map(|observed| observed.len()).unwrap_or(0)
    }

    /// Animate an element entering the viewport and stop observing it.
    /// Returns the class applied, or `None` if the element is not observed.
    pub fn on_intersect(&self, el: &Element) -> Option<&'static str> {
        let mut observed = self.observed.write().ok()?;
        let index = observed.iter().position(|candidate| candidate == el)?;
        observed.remove(index);

        let class = animation_class(el);
        el.add_class(class);
        Some(class)
    }
}
