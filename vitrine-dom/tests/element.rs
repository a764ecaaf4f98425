use vitrine_dom::element::{find_all, find_element, find_parent, path_to};
use vitrine_dom::{Element, LayoutBox};

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id(), b.id());
    assert!(a.id().starts_with("div-"));
}

#[test]
fn test_clones_share_the_node() {
    let a = Element::div();
    let b = a.clone();
    b.add_class("active");
    assert!(a.has_class("active"));
    assert_eq!(a, b);
    assert_ne!(a, Element::div());
}

#[test]
fn test_class_operations() {
    let el = Element::div().with_class("nav__link");
    el.add_class("active");
    el.add_class("active");
    assert_eq!(el.classes(), vec!["nav__link", "active"]);

    assert!(el.remove_class("active"));
    assert!(!el.remove_class("active"));

    assert!(el.toggle_class("open"));
    assert!(el.has_class("open"));
    assert!(!el.toggle_class("open"));
    assert!(!el.has_class("open"));
}

#[test]
fn test_empty_style_clears_property() {
    let el = Element::div().with_style("overflow", "hidden");
    assert_eq!(el.style("overflow").as_deref(), Some("hidden"));
    el.set_style("overflow", "");
    assert_eq!(el.style("overflow"), None);
}

#[test]
fn test_data_attributes() {
    let el = Element::button().with_attr("data-video-id", "abc123");
    assert_eq!(el.data("video-id").as_deref(), Some("abc123"));
    assert_eq!(el.data("missing"), None);
}

#[test]
fn test_children_management() {
    let parent = Element::div();
    let first = Element::span();
    let second = Element::span();
    parent.append_child(first.clone());
    parent.prepend_child(second.clone());
    assert_eq!(parent.first_child(), Some(second.clone()));

    assert!(parent.remove_child(&second));
    assert!(!parent.remove_child(&second));
    assert_eq!(parent.children(), vec![first]);

    parent.append_child(Element::div().with_class("field-error"));
    parent.append_child(Element::div().with_class("field-error"));
    assert_eq!(parent.remove_children_where(|c| c.has_class("field-error")), 2);
    assert_eq!(parent.children().len(), 1);
}

#[test]
fn test_text_content_joins_descendants() {
    let el = Element::div()
        .with_child(Element::new("h4").with_text("Title"))
        .with_child(Element::new("p").with_text("Body"));
    assert_eq!(el.text_content(), "Title Body");
}

#[test]
fn test_queries() {
    let target = Element::span().with_id("target").with_class("x");
    let middle = Element::div().with_child(target.clone());
    let root = Element::div()
        .with_child(middle.clone())
        .with_child(Element::span().with_class("x"));

    assert_eq!(find_element(&root, "target"), Some(target.clone()));
    assert_eq!(find_element(&root, "nope"), None);
    assert_eq!(find_all(&root, |el| el.has_class("x")).len(), 2);
    assert_eq!(find_parent(&root, &target), Some(middle.clone()));
    assert_eq!(path_to(&root, "target"), Some(vec![root.clone(), middle, target]));
}

#[test]
fn test_layout_box_contains() {
    let layout = LayoutBox::new(100, 50);
    assert!(layout.contains_y(100));
    assert!(layout.contains_y(149));
    assert!(!layout.contains_y(150));
    assert!(!layout.contains_y(99));

    let far = LayoutBox::new(i32::MAX - 10, 50);
    assert!(far.contains_y(i32::MAX - 1));
    assert!(!far.contains_y(i32::MAX - 11));
    assert_eq!(layout.with_scroll_height(80).scroll_height, 80);
}
