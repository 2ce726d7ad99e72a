use crate::constants::*;
use crate::random::draw_initial_slide;

/// How the manager picks the slide shown right after initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialIndex {
    /// Always slide 0.
    First,
    /// Any integer, wrapped into range (negative values count from the end).
    Fixed(i64),
    /// Random draw of 1, 2 or 3, shifted to zero-based and wrapped into range.
    Random,
}

impl Default for InitialIndex {
    fn default() -> Self {
        InitialIndex::Fixed(0)
    }
}

impl InitialIndex {
    /// Index in `0..len`, or `None` when there is nothing to show.
    pub fn resolve(self, len: usize) -> Option<usize> {
        match self {
            InitialIndex::First if len > 0 => Some(0),
            InitialIndex::First => None,
            InitialIndex::Fixed(index) => normalize(index, len),
            InitialIndex::Random => normalize(i64::from(draw_initial_slide()) - 1, len),
        }
    }
}

/// `((index % len) + len) % len`, `None` for an empty range.
pub fn normalize(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok().filter(|&len| len > 0)?;
    usize::try_from(index.rem_euclid(len)).ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderConfig {
    pub slide_selector: String,
    pub active_class: String,
    pub prev_selector: String,
    pub next_selector: String,
    pub control_index: usize,
    pub initial: InitialIndex,
    pub slide_clicks: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slide_selector: SLIDE_SELECTOR.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            prev_selector: PREV_SELECTOR.to_string(),
            next_selector: NEXT_SELECTOR.to_string(),
            control_index: CONTROL_INDEX,
            initial: InitialIndex::default(),
            slide_clicks: true,
        }
    }
}
