//! Minimal in-memory document: ordered elements with class lists, click
//! listeners and a ready hook.

mod document;
mod element;
mod selector;

pub use document::{Document, ReadyState};
pub use element::{Element, Event, EventKind, Listener};
pub use selector::{Selector, SelectorError, class_of};
