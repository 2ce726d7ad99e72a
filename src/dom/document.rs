use std::cell::{Cell, RefCell};

use super::element::Element;
use super::selector::{Selector, SelectorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,  // Structure still being built, ready callbacks are queued
    Complete, // Ready callbacks have run
}

type ReadyCallback = Box<dyn FnOnce(&Document)>;

/// Flat, ordered element store. Insertion order is document order.
pub struct Document {
    elements: RefCell<Vec<Element>>,
    state: Cell<ReadyState>,
    ready_callbacks: RefCell<Vec<ReadyCallback>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
            state: Cell::new(ReadyState::Loading),
            ready_callbacks: RefCell::new(Vec::new()),
        }
    }

    pub fn append(&self, tag: &str) -> Element {
        self.append_with(tag, None, &[])
    }

    pub fn append_with(&self, tag: &str, id: Option<&str>, classes: &[&str]) -> Element {
        let element = Element::new(tag, id, classes);
        self.elements.borrow_mut().push(element.clone());
        element
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .elements
            .borrow()
            .iter()
            .filter(|element| selector.matches(element))
            .cloned()
            .collect())
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, SelectorError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    pub fn ready_state(&self) -> ReadyState {
        self.state.get()
    }

    /// Runs `callback` once the structure is complete, or right away if it already is.
    pub fn on_ready(&self, callback: impl FnOnce(&Document) + 'static) {
        match self.state.get() {
            ReadyState::Complete => callback(self),
            ReadyState::Loading => self.ready_callbacks.borrow_mut().push(Box::new(callback)),
        }
    }

    /// Marks the document complete and fires the queued ready callbacks once.
    pub fn finish_loading(&self) {
        if self.state.get() == ReadyState::Complete {
            return;
        }
        self.state.set(ReadyState::Complete);

        let callbacks = std::mem::take(&mut *self.ready_callbacks.borrow_mut());
        for callback in callbacks {
            callback(self);
        }
    }
}
