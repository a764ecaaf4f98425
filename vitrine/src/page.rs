//! The portfolio page markup the components are written against.

use vitrine_dom::{Document, Element, LayoutBox};

use crate::modal::{CLOSE_CLASS, CONTENT_CLASS, MODAL_ID, OVERLAY_CLASS, PLAYER_ID};
use crate::navigation::{NAV_LINK_CLASS, NAV_MENU_ID, NAV_TOGGLE_ID};
use crate::portfolio::{ITEM_CLASS, PLAY_CLASS};
use crate::theme::TOGGLE_BUTTON_ID;

/// Sections in page order with their top offset and height.
const SECTIONS: [(&str, i32, i32); 5] = [
    ("home", 0, 900),
    ("about", 900, 700),
    ("services", 1600, 800),
    ("portfolio", 2400, 1000),
    ("contact", 3400, 900),
];

const PORTFOLIO: [(&str, &str, &str, &str); 3] = [
    ("Brand Story", "Commercial", "dQw4w9WgXcQ", "2:30"),
    ("Summer Wedding", "Wedding", "ScMzIvxBSi4", "4:12"),
    ("Mountain Run", "Documentary", "aqz-KE-bpKQ", "6:05"),
];

/// Build the full page: header and navigation, the content sections, the
/// contact form and the video modal.
///
/// Element ids match what the components look up, so a [`Site`](crate::site::Site)
/// built on this page has every feature wired. Ids used by event targets:
/// `name`, `email`, `subject`, `message`, `submit-btn`, `play-{n}` and
/// `item-{n}` (1-based), plus the component ids such as
/// [`TOGGLE_BUTTON_ID`].
pub fn standard_page() -> Document {
    let body = Element::new("body")
        .with_child(header())
        .with_child(
            Element::new("main")
                .with_id("main-content")
                .with_child(hero())
                .with_child(about())
                .with_child(services())
                .with_child(portfolio())
                .with_child(contact()),
        )
        .with_child(video_modal());
    Document::new(body)
}

fn section(id: &str) -> Element {
    let (top, height) = SECTIONS
        .iter()
        .find(|(name, ..)| *name == id)
        .map(|&(_, top, height)| (top, height))
        .unwrap_or_default();
    Element::section(id).with_layout(LayoutBox::new(top, height))
}

fn header() -> Element {
    let links = SECTIONS.map(|(id, ..)| {
        let mut label = id.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        Element::new("li").with_child(
            Element::link(format!("#{id}"))
                .with_id(format!("nav-{id}"))
                .with_class(NAV_LINK_CLASS)
                .with_text(label),
        )
    });

    Element::new("header").with_class("header").with_child(
        Element::new("nav")
            .with_class("nav")
            .with_child(Element::link("#home").with_class("nav__logo").with_text("VideoCraft"))
            .with_child(
                Element::new("ul")
                    .with_id(NAV_MENU_ID)
                    .with_class("nav__menu")
                    .with_children(links),
            )
            .with_child(
                Element::button()
                    .with_id(TOGGLE_BUTTON_ID)
                    .with_attr("aria-label", "Toggle theme"),
            )
            .with_child(
                Element::button()
                    .with_id(NAV_TOGGLE_ID)
                    .with_class("nav__toggle")
                    .with_attr("aria-expanded", "false"),
            ),
    )
}

fn hero() -> Element {
    section("home").with_child(
        Element::new("h1")
            .with_class("hero__title")
            .with_text("Stories told in motion"),
    )
}

fn about() -> Element {
    let stats = [("150+", "Projects"), ("8", "Years"), ("40", "Clients")].map(|(n, label)| {
        Element::div()
            .with_class("stat")
            .with_child(Element::span().with_class("stat__number").with_text(n))
            .with_child(Element::span().with_class("stat__label").with_text(label))
    });
    section("about")
        .with_child(Element::new("h2").with_class("about__title").with_text("About"))
        .with_children(stats)
}

fn services() -> Element {
    let cards = ["Commercials", "Weddings", "Documentaries"].map(|name| {
        Element::div()
            .with_class("service-card")
            .with_child(Element::new("h3").with_text(name))
    });
    section("services")
        .with_child(Element::new("h2").with_class("section-title").with_text("Services"))
        .with_children(cards)
}

fn portfolio() -> Element {
    let items = PORTFOLIO
        .iter()
        .enumerate()
        .map(|(index, (title, kind, video, duration))| {
            let n = index + 1;
            Element::div()
                .with_id(format!("item-{n}"))
                .with_class(ITEM_CLASS)
                .with_attr("data-video-id", *video)
                .with_child(
                    Element::new("img")
                        .with_class("lazy")
                        .with_attr("loading", "lazy")
                        .with_attr("data-src", format!("/img/portfolio-{n}.jpg"))
                        .with_attr("alt", *title),
                )
                .with_child(
                    Element::div()
                        .with_class("portfolio__overlay")
                        .with_child(
                            Element::button()
                                .with_id(format!("play-{n}"))
                                .with_class(PLAY_CLASS)
                                .with_attr("data-video-id", *video),
                        ),
                )
                .with_child(
                    Element::div()
                        .with_class("portfolio__info")
                        .with_child(Element::span().with_class("portfolio__type").with_text(*kind))
                        .with_child(Element::new("h3").with_class("portfolio__title").with_text(*title))
                        .with_child(
                            Element::new("p")
                                .with_class("portfolio__description")
                                .with_text(format!("{kind} film")),
                        )
                        .with_child(
                            Element::span()
                                .with_class("portfolio__duration")
                                .with_text(*duration),
                        ),
                )
        });
    section("portfolio")
        .with_child(Element::new("h2").with_class("section-title").with_text("Portfolio"))
        .with_children(items)
}

fn form_group(control: Element) -> Element {
    Element::div().with_class("form-group").with_child(control)
}

fn contact() -> Element {
    let form = Element::new("form")
        .with_id("contact-form")
        .with_child(form_group(
            Element::input("name", "text").with_id("name").with_attr("required", ""),
        ))
        .with_child(form_group(
            Element::input("email", "email").with_id("email").with_attr("required", ""),
        ))
        .with_child(form_group(Element::input("subject", "text").with_id("subject")))
        .with_child(form_group(
            Element::textarea("message")
                .with_id("message")
                .with_attr("required", "")
                .with_layout(LayoutBox::new(0, 120).with_scroll_height(120)),
        ))
        .with_child(Element::span().with_id("char-count").with_text("0"))
        .with_child(
            Element::button()
                .with_id("submit-btn")
                .with_attr("type", "submit")
                .with_text("Send Message"),
        );
    section("contact")
        .with_child(Element::new("h2").with_class("section-title").with_text("Contact"))
        .with_child(form)
}

fn video_modal() -> Element {
    Element::div()
        .with_id(MODAL_ID)
        .with_class("video-modal")
        .with_class("hidden")
        .with_attr("aria-hidden", "true")
        .with_child(Element::div().with_class(OVERLAY_CLASS))
        .with_child(
            Element::div()
                .with_class(CONTENT_CLASS)
                .with_child(
                    Element::button()
                        .with_id("video-close")
                        .with_class(CLOSE_CLASS)
                        .with_attr("aria-label", "Close video"),
                )
                .with_child(Element::div().with_id(PLAYER_ID)),
        )
}
