//! In-memory page document for the vitrine interaction layer.
//!
//! Components never own the page; they hold [`Element`] handles into a
//! [`Document`] and mutate classes, attributes and inline styles the way a
//! script mutates a browser DOM.

pub mod document;
pub mod element;
pub mod event;

pub use document::Document;
pub use element::{Element, LayoutBox};
pub use event::{Event, Key, Modifiers};
