use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, info};

use crate::direction::Direction;
use crate::dom::{Document, Element, EventKind};
use crate::manager::SlideManager;

/// One previous/next button, looked up once by selector and position.
pub struct NavigationControl {
    selector: String,
    index: usize,
    direction: Direction,
    element: Option<Element>,
}

impl NavigationControl {
    pub fn resolve(
        document: &Document,
        selector: &str,
        index: usize,
        direction: Direction,
    ) -> Self {
        let element = match document.query_selector_all(selector) {
            Ok(matches) => matches.into_iter().nth(index),
            Err(e) => {
                error!("Invalid control selector '{}': {}", selector, e);
                None
            }
        };

        if element.is_none() {
            error!("Element with selector '{}' and index {} not found", selector, index);
        }

        Self {
            selector: selector.to_string(),
            index,
            direction,
            element,
        }
    }

    /// Registers the click listener. Returns false for an unresolved control.
    pub fn attach(&self, manager: &Rc<RefCell<SlideManager>>) -> bool {
        let Some(element) = &self.element else {
            return false;
        };

        let label = self.label();
        let direction = self.direction;
        let manager = Rc::downgrade(manager);
        element.add_event_listener(EventKind::Click, move |_| {
            info!("Click on control {}", label);
            if let Some(manager) = manager.upgrade() {
                manager.borrow_mut().navigate(direction);
            }
        });
        debug!("Listener attached to {}", self.label());
        true
    }

    pub fn label(&self) -> String {
        format!("{}[{}]", self.selector, self.index)
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.element.is_some()
    }
}
