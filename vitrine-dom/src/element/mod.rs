mod node;

pub use node::{Element, LayoutBox};

/// Find an element by ID, searching `root` and its descendants depth-first.
pub fn find_element(root: &Element, id: &str) -> Option<Element> {
    find_first(root, |el| el.has_id(id))
}

/// First element in document order (root included) matching `pred`.
pub fn find_first(root: &Element, pred: impl Fn(&Element) -> bool) -> Option<Element> {
    fn walk(el: &Element, pred: &dyn Fn(&Element) -> bool) -> Option<Element> {
        if pred(el) {
            return Some(el.clone());
        }
        el.children().iter().find_map(|child| walk(child, pred))
    }
    walk(root, &pred)
}

/// All elements in document order (root included) matching `pred`.
pub fn find_all(root: &Element, pred: impl Fn(&Element) -> bool) -> Vec<Element> {
    fn walk(el: &Element, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<Element>) {
        if pred(el) {
            out.push(el.clone());
        }
        for child in el.children() {
            walk(&child, pred, out);
        }
    }
    let mut out = Vec::new();
    walk(root, &pred, &mut out);
    out
}

/// Path from `root` down to the element with `id`, both ends included.
///
/// Returns `None` when the element is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<Element>> {
    if root.has_id(id) {
        return Some(vec![root.clone()]);
    }
    for child in root.children() {
        if let Some(mut path) = path_to(&child, id) {
            path.insert(0, root.clone());
            return Some(path);
        }
    }
    None
}

/// The direct parent of `target` within `root`.
pub fn find_parent(root: &Element, target: &Element) -> Option<Element> {
    if root.contains_child(target) {
        return Some(root.clone());
    }
    root.children()
        .iter()
        .find_map(|child| find_parent(child, target))
}

/// Whether `target` is `root` or one of its descendants.
pub fn contains(root: &Element, target: &Element) -> bool {
    root == target || root.children().iter().any(|child| contains(child, target))
}
