use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Layout box of an element, in page pixels.
///
/// The document does no layout of its own; whoever builds the page supplies
/// these values (a browser binding copies them from the real layout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutBox {
    /// Distance from the top of the page.
    pub offset_top: i32,
    /// Rendered height.
    pub offset_height: i32,
    /// Height of the content, including overflow.
    pub scroll_height: i32,
}

impl LayoutBox {
    pub fn new(offset_top: i32, offset_height: i32) -> Self {
        Self {
            offset_top,
            offset_height,
            scroll_height: offset_height,
        }
    }

    pub fn with_scroll_height(mut self, scroll_height: i32) -> Self {
        self.scroll_height = scroll_height;
        self
    }

    /// Whether a page position falls inside this box (top inclusive).
    pub fn contains_y(&self, y: i32) -> bool {
        y >= self.offset_top && y < self.offset_top.saturating_add(self.offset_height)
    }
}

#[derive(Debug, Default)]
struct ElementInner {
    tag: String,
    id: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    layout: LayoutBox,
    children: Vec<Element>,
}

/// A node of the page document.
///
/// `Element` is a shared handle: clones refer to the same node, so a
/// component can keep the handles it was given and mutate them later from
/// event handlers or timers. Equality is node identity.
#[derive(Debug, Clone)]
pub struct Element {
    inner: Arc<RwLock<ElementInner>>,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Element {}

impl Element {
    /// Create an element with the given tag and a generated id.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let id = generate_id(&tag);
        Self {
            inner: Arc::new(RwLock::new(ElementInner {
                tag,
                id,
                ..Default::default()
            })),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    /// An `<a>` element pointing at `href`.
    pub fn link(href: impl Into<String>) -> Self {
        Self::new("a").with_attr("href", href)
    }

    /// An `<input>` with a `name` and a `type`.
    pub fn input(name: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self::new("input")
            .with_attr("name", name)
            .with_attr("type", input_type)
    }

    /// A `<textarea>` with a `name`.
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new("textarea").with_attr("name", name)
    }

    /// A `<section>` with the given id.
    pub fn section(id: impl Into<String>) -> Self {
        Self::new("section").with_id(id)
    }

    fn read(&self) -> RwLockReadGuard<'_, ElementInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ElementInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.write().id = id.into();
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_style(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn with_layout(self, layout: LayoutBox) -> Self {
        self.set_layout(layout);
        self
    }

    pub fn with_child(self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn with_children(self, children: impl IntoIterator<Item = Element>) -> Self {
        self.write().children.extend(children);
        self
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    pub fn tag(&self) -> String {
        self.read().tag.clone()
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.read().tag.eq_ignore_ascii_case(tag)
    }

    pub fn id(&self) -> String {
        self.read().id.clone()
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.read().id == id
    }

    // -------------------------------------------------------------------------
    // Classes
    // -------------------------------------------------------------------------

    pub fn classes(&self) -> Vec<String> {
        self.read().classes.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.read().classes.iter().any(|c| c == class)
    }

    /// Add a class. Adding a class twice keeps a single copy.
    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        let mut inner = self.write();
        if !inner.classes.contains(&class) {
            inner.classes.push(class);
        }
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&self, class: &str) -> bool {
        let mut inner = self.write();
        let before = inner.classes.len();
        inner.classes.retain(|c| c != class);
        inner.classes.len() != before
    }

    /// Toggle a class. Returns true if the class is present afterwards.
    pub fn toggle_class(&self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.add_class(class);
            true
        }
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn attr(&self, name: &str) -> Option<String> {
        self.read().attributes.get(name).cloned()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.read().attributes.contains_key(name)
    }

    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<String>) {
        self.write().attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&self, name: &str) -> Option<String> {
        self.write().attributes.remove(name)
    }

    /// Read a `data-*` attribute by its short name.
    pub fn data(&self, key: &str) -> Option<String> {
        self.attr(&format!("data-{key}"))
    }

    // -------------------------------------------------------------------------
    // Inline styles
    // -------------------------------------------------------------------------

    /// Get an inline style property. Unset and empty properties are `None`.
    pub fn style(&self, property: &str) -> Option<String> {
        self.read().styles.get(property).cloned()
    }

    /// Set an inline style property. Setting an empty value clears it, as
    /// assigning `""` does in a browser.
    pub fn set_style(&self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        let mut inner = self.write();
        if value.is_empty() {
            inner.styles.remove(&property);
        } else {
            inner.styles.insert(property, value);
        }
    }

    pub fn clear_style(&self, property: &str) {
        self.write().styles.remove(property);
    }

    // -------------------------------------------------------------------------
    // Content and form state
    // -------------------------------------------------------------------------

    pub fn text(&self) -> String {
        self.read().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.write().text = text.into();
    }

    /// Text of this element followed by the text of its descendants.
    pub fn text_content(&self) -> String {
        let (text, children) = {
            let inner = self.read();
            (inner.text.clone(), inner.children.clone())
        };
        let mut parts = Vec::new();
        if !text.is_empty() {
            parts.push(text);
        }
        for child in children {
            let child_text = child.text_content();
            if !child_text.is_empty() {
                parts.push(child_text);
            }
        }
        parts.join(" ")
    }

    pub fn value(&self) -> String {
        self.read().value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.write().value = value.into();
    }

    pub fn is_disabled(&self) -> bool {
        self.read().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.write().disabled = disabled;
    }

    pub fn layout(&self) -> LayoutBox {
        self.read().layout
    }

    pub fn set_layout(&self, layout: LayoutBox) {
        self.write().layout = layout;
    }

    // -------------------------------------------------------------------------
    // Children
    // -------------------------------------------------------------------------

    pub fn children(&self) -> Vec<Element> {
        self.read().children.clone()
    }

    pub fn first_child(&self) -> Option<Element> {
        self.read().children.first().cloned()
    }

    pub fn append_child(&self, child: Element) {
        self.write().children.push(child);
    }

    /// Insert a child before the current first child.
    pub fn prepend_child(&self, child: Element) {
        self.write().children.insert(0, child);
    }

    /// Remove a direct child. Returns false if it was not a child.
    pub fn remove_child(&self, child: &Element) -> bool {
        let mut inner = self.write();
        let before = inner.children.len();
        inner.children.retain(|c| c != child);
        inner.children.len() != before
    }

    /// Remove every direct child matching `pred`. Returns how many were removed.
    pub fn remove_children_where(&self, pred: impl Fn(&Element) -> bool) -> usize {
        let mut inner = self.write();
        let before = inner.children.len();
        inner.children.retain(|c| !pred(c));
        before - inner.children.len()
    }

    pub fn clear_children(&self) {
        self.write().children.clear();
    }

    pub fn contains_child(&self, child: &Element) -> bool {
        self.read().children.iter().any(|c| c == child)
    }
}
