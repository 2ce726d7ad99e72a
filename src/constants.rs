pub const SLIDE_SELECTOR: &str = ".fade";      // Marker shared by every slide element
pub const ACTIVE_CLASS: &str = "active";       // Class carried by the displayed slide
pub const PREV_SELECTOR: &str = ".prev";       // Previous button
pub const NEXT_SELECTOR: &str = ".next";       // Next button
pub const CONTROL_INDEX: usize = 0;            // Position among the selector matches

pub const RANDOM_DRAW_MIN: u32 = 1;            // Lower bound of the random first slide draw
pub const RANDOM_DRAW_MAX: u32 = 3;            // Upper bound (inclusive)
