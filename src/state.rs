#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SlideState {
    Inert,          // No slides resolved, every request is ignored
    Showing(usize), // Index of the slide carrying the active class
}

impl SlideState {
    pub fn current(self) -> Option<usize> {
        match self {
            SlideState::Inert => None,
            SlideState::Showing(index) => Some(index),
        }
    }
}
