use crate::config::SliderConfig;
use crate::constants::ACTIVE_CLASS;
use crate::dom::{Document, SelectorError, class_of};

/// Builds a document shaped like the slider page: `.fade` slides wrapped by a
/// `.prev` and a `.next` button.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    slides: usize,
    prev: bool,
    next: bool,
    preactive: Option<usize>,
    slide_class: String,
    prev_class: String,
    next_class: String,
    active_class: String,
}

impl PageBuilder {
    pub fn new(slides: usize) -> Self {
        Self {
            slides,
            prev: true,
            next: true,
            preactive: None,
            slide_class: "fade".to_string(),
            prev_class: "prev".to_string(),
            next_class: "next".to_string(),
            active_class: ACTIVE_CLASS.to_string(),
        }
    }

    /// Page whose elements match the configured selectors. Each selector has to
    /// be a single class, since the class is all a built element carries.
    pub fn for_config(slides: usize, config: &SliderConfig) -> Result<Self, SelectorError> {
        Ok(Self {
            slide_class: class_of(&config.slide_selector)?,
            prev_class: class_of(&config.prev_selector)?,
            next_class: class_of(&config.next_selector)?,
            active_class: config.active_class.clone(),
            ..Self::new(slides)
        })
    }

    pub fn without_prev(mut self) -> Self {
        self.prev = false;
        self
    }

    pub fn without_next(mut self) -> Self {
        self.next = false;
        self
    }

    /// Marks slide `index` active in the markup, like a hand-written page would.
    pub fn preactive(mut self, index: usize) -> Self {
        self.preactive = Some(index);
        self
    }

    pub fn build(&self) -> Document {
        let document = Document::new();
        document.append_with("div", Some("slideshow"), &["slideshow-container"]);

        for n in 0..self.slides {
            let id = format!("slide-{}", n + 1);
            let classes = [self.slide_class.as_str()];
            let slide = document.append_with("div", Some(id.as_str()), &classes);
            if self.preactive == Some(n) {
                slide.add_class(&self.active_class);
            }
        }

        if self.prev {
            document.append_with("a", None, &[self.prev_class.as_str()]);
        }
        if self.next {
            document.append_with("a", None, &[self.next_class.as_str()]);
        }
        document
    }
}
