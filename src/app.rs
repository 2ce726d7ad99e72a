use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use tracing::info;

use crate::config::SliderConfig;
use crate::control::NavigationControl;
use crate::direction::Direction;
use crate::dom::Document;
use crate::manager::SlideManager;

/// The wired-up slider: one manager and its two navigation controls.
pub struct App {
    manager: Rc<RefCell<SlideManager>>,
    prev: NavigationControl,
    next: NavigationControl,
}

impl App {
    /// Builds the slider from an already parsed document.
    pub fn init(document: &Document, config: &SliderConfig) -> Self {
        info!("--- Initializing slider ---");

        let mut manager = SlideManager::new(config.active_class.clone());
        manager.initialize(document, &config.slide_selector, config.initial);
        let manager = Rc::new(RefCell::new(manager));

        let index = config.control_index;
        let prev =
            NavigationControl::resolve(document, &config.prev_selector, index, Direction::Previous);
        let next =
            NavigationControl::resolve(document, &config.next_selector, index, Direction::Next);
        prev.attach(&manager);
        next.attach(&manager);

        if config.slide_clicks {
            SlideManager::attach_slide_click_handlers(&manager);
        }

        info!("--- Slider ready ---");
        Self { manager, prev, next }
    }

    /// Defers `init` until the document reports ready.
    pub fn mount(document: &Document, config: SliderConfig) -> Mount {
        let slot = Rc::new(OnceCell::new());
        let target = Rc::clone(&slot);
        document.on_ready(move |document| {
            let _ = target.set(App::init(document, &config));
        });
        Mount { slot }
    }

    pub fn manager(&self) -> &Rc<RefCell<SlideManager>> {
        &self.manager
    }

    pub fn current(&self) -> Option<usize> {
        self.manager.borrow().current()
    }

    pub fn control(&self, direction: Direction) -> &NavigationControl {
        match direction {
            Direction::Previous => &self.prev,
            Direction::Next => &self.next,
        }
    }
}

/// Handle returned by [`App::mount`]; empty until the document is ready.
pub struct Mount {
    slot: Rc<OnceCell<App>>,
}

impl Mount {
    pub fn app(&self) -> Option<&App> {
        self.slot.get()
    }

    pub fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InitialIndex;
    use crate::page::PageBuilder;

    #[test]
    fn mount_waits_for_ready() {
        let doc = PageBuilder::new(3).build();
        let mount = App::mount(&doc, SliderConfig::default());
        assert!(!mount.is_ready());
        assert!(doc.query_selector_all(".active").unwrap().is_empty());

        doc.finish_loading();
        let app = mount.app().unwrap();
        assert_eq!(app.current(), Some(0));
        assert!(app.control(Direction::Previous).is_resolved());
        assert!(app.control(Direction::Next).is_resolved());
    }

    #[test]
    fn missing_controls_do_not_stop_initialization() {
        let doc = PageBuilder::new(3).without_prev().without_next().build();
        doc.finish_loading();
        let app = App::init(&doc, &SliderConfig::default());

        assert!(!app.control(Direction::Previous).is_resolved());
        assert!(!app.control(Direction::Next).is_resolved());
        assert_eq!(app.current(), Some(0));

        doc.query_selector_all(".fade").unwrap()[2].click();
        assert_eq!(app.current(), Some(2));
    }

    #[test]
    fn slide_clicks_can_be_disabled() {
        let doc = PageBuilder::new(3).build();
        let config = SliderConfig {
            slide_clicks: false,
            initial: InitialIndex::Fixed(1),
            ..SliderConfig::default()
        };
        let app = App::init(&doc, &config);

        doc.query_selector_all(".fade").unwrap()[2].click();
        assert_eq!(app.current(), Some(1));

        doc.query_selector(".next").unwrap().unwrap().click();
        assert_eq!(app.current(), Some(2));
    }
}
