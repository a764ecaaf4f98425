//! Portfolio grid: keyboard access and hover reveal.

use std::time::Duration;

use vitrine_dom::element::{find_all, find_first};
use vitrine_dom::{Document, Element, Key};

use crate::timer;

pub const ITEM_CLASS: &str = "portfolio__item";
pub const PLAY_CLASS: &str = "portfolio__play";

const INFO_CLASS: &str = "portfolio__info";
const TITLE_CLASS: &str = "portfolio__title";
const REVEALED_CLASSES: [&str; 4] = [
    "portfolio__type",
    TITLE_CLASS,
    "portfolio__description",
    "portfolio__duration",
];
const REVEAL_TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

/// One tile of the grid.
#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub element: Element,
    pub info: Option<Element>,
    pub play: Option<Element>,
    pub title: Option<String>,
}

impl PortfolioItem {
    fn new(element: Element) -> Self {
        let title = find_first(&element, |el| el.has_class(TITLE_CLASS))
            .map(|el| el.text_content())
            .filter(|text| !text.is_empty());
        Self {
            info: find_first(&element, |el| el.has_class(INFO_CLASS)),
            play: find_first(&element, |el| el.has_class(PLAY_CLASS)),
            title,
            element,
        }
    }

    /// Video to play, from the play button or else the tile.
    pub fn video_id(&self) -> Option<String> {
        self.play
            .as_ref()
            .and_then(|play| play.data("video-id"))
            .or_else(|| self.element.data("video-id"))
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioManager {
    items: Vec<PortfolioItem>,
    stagger: Duration,
}

impl PortfolioManager {
    /// Make every tile focusable and labelled.
    pub fn new(document: &Document, stagger: Duration) -> Self {
        let items: Vec<PortfolioItem> = document
            .query_all_class(ITEM_CLASS)
            .into_iter()
            .map(PortfolioItem::new)
            .collect();

        for item in &items {
            let title = item.title.as_deref().unwrap_or("Portfolio video");
            item.element.set_attr("tabindex", "0");
            item.element.set_attr("role", "button");
            item.element.set_attr("aria-label", format!("Play video: {title}"));
        }

        Self { items, stagger }
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// The tile on the path of an event target, innermost first.
    pub fn item_in(&self, path: &[Element]) -> Option<&PortfolioItem> {
        path.iter()
            .rev()
            .find_map(|el| self.items.iter().find(|item| &item.element == el))
    }

    /// Whether `path` runs through a tile's play button.
    pub fn play_in(&self, path: &[Element]) -> Option<&PortfolioItem> {
        self.items.iter().find(|item| {
            item.play.as_ref().is_some_and(|play| path.contains(play))
        })
    }

    /// Enter or Space on a tile activates its play button. Returns the tile
    /// when the key was handled.
    pub fn handle_key(&self, item: &PortfolioItem, key: Key) -> Option<PortfolioItem> {
        if !key.is_activation() || item.play.is_none() {
            return None;
        }
        Some(item.clone())
    }

    /// Reveal the tile's info lines one after another.
    pub fn animate_enter(&self, item: &PortfolioItem) {
        let Some(info) = &item.info else {
            return;
        };
        let lines = find_all(info, |el| REVEALED_CLASSES.iter().any(|c| el.has_class(c)));
        for (index, line) in lines.into_iter().enumerate() {
            line.set_style("transform", "translateY(20px)");
            line.set_style("opacity", "0");

            let delay = self.stagger * u32::try_from(index).unwrap_or(u32::MAX);
            timer::schedule(delay, move || {
                line.set_style("transition", REVEAL_TRANSITION);
                line.set_style("transform", "translateY(0)");
                line.set_style("opacity", "1");
            });
        }
    }

    /// Drop every inline style the reveal left on the tile's info.
    pub fn animate_leave(&self, item: &PortfolioItem) {
        let Some(info) = &item.info else {
            return;
        };
        for el in find_all(info, |el| el != info) {
            el.clear_style("transition");
            el.clear_style("transform");
            el.clear_style("opacity");
        }
    }
}
