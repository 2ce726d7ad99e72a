use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::InitialIndex;
use crate::direction::Direction;
use crate::dom::{Document, Element, EventKind};
use crate::state::SlideState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlideError {
    #[error("no slides to show")]
    Inert,
    #[error("slide index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
}

/// Owns the slide elements and the index of the one carrying the active class.
pub struct SlideManager {
    slides: Vec<Element>,
    state: SlideState,
    active_class: String,
}

impl SlideManager {
    pub fn new(active_class: impl Into<String>) -> Self {
        Self {
            slides: Vec::new(),
            state: SlideState::Inert,
            active_class: active_class.into(),
        }
    }

    /// Captures every element matching `selector` and activates the initial slide.
    ///
    /// Stays inert when nothing matches. Active classes already present in the
    /// markup are cleared so that only the chosen slide carries one.
    pub fn initialize(&mut self, document: &Document, selector: &str, initial: InitialIndex) {
        if let Some(index) = self.state.current() {
            self.slides[index].remove_class(&self.active_class);
        }
        self.state = SlideState::Inert;

        self.slides = match document.query_selector_all(selector) {
            Ok(slides) => slides,
            Err(e) => {
                error!("Invalid slide selector '{}': {}", selector, e);
                Vec::new()
            }
        };

        if self.slides.is_empty() {
            error!("No slides found for selector '{}'", selector);
            return;
        }

        for slide in &self.slides {
            slide.remove_class(&self.active_class);
        }

        let Some(index) = initial.resolve(self.slides.len()) else {
            error!("No initial slide for {:?} among {} slides", initial, self.slides.len());
            return;
        };
        if let Err(e) = self.set_current(index) {
            error!("Cannot show initial slide {}: {}", index, e);
            return;
        }
        info!("Found {} slides, showing slide {}", self.slides.len(), index);
    }

    /// Moves the active class to `index`. Nothing changes on error.
    pub fn set_current(&mut self, index: usize) -> Result<(), SlideError> {
        if self.slides.is_empty() {
            return Err(SlideError::Inert);
        }
        let Some(next) = self.slides.get(index) else {
            return Err(SlideError::OutOfRange { index, len: self.slides.len() });
        };

        if let Some(previous) = self.state.current() {
            self.slides[previous].remove_class(&self.active_class);
        }
        next.add_class(&self.active_class);
        self.state = SlideState::Showing(index);
        Ok(())
    }

    /// Bounds-checked transition; rejected requests are logged and dropped.
    pub fn go_to(&mut self, index: usize) -> bool {
        match self.set_current(index) {
            Ok(()) => {
                info!("Showing slide {}", index);
                true
            }
            Err(e) => {
                warn!("Cannot go to slide {}: {}", index, e);
                false
            }
        }
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(current) = self.state.current() else {
            return false;
        };
        match direction.step(current, self.slides.len()) {
            Some(target) => self.go_to(target),
            None => false,
        }
    }

    pub fn on_slide_clicked(&mut self, index: usize) -> bool {
        debug!("Slide {} clicked", index);
        self.go_to(index)
    }

    /// Makes every slide clickable; each listener keeps the slide's position
    /// from registration time.
    pub fn attach_slide_click_handlers(manager: &Rc<RefCell<SlideManager>>) {
        let this = manager.borrow();
        for (index, slide) in this.slides.iter().enumerate() {
            let weak: Weak<RefCell<SlideManager>> = Rc::downgrade(manager);
            slide.add_event_listener(EventKind::Click, move |_| {
                if let Some(manager) = weak.upgrade() {
                    manager.borrow_mut().on_slide_clicked(index);
                }
            });
        }
        debug!("Click handlers attached to {} slides", this.slides.len());
    }

    pub fn current(&self) -> Option<usize> {
        self.state.current()
    }

    pub fn state(&self) -> SlideState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_inert(&self) -> bool {
        self.state == SlideState::Inert
    }

    pub fn slides(&self) -> &[Element] {
        &self.slides
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }
}
