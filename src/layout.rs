//! Screen geometry of the window front-end: where the controls and the slide
//! are drawn, and which of them a click lands on.

pub const BUTTON_WIDTH: f32 = 64.0;
pub const MARGIN: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Largest rectangle with the aspect ratio of `width` x `height` centered in `self`.
    pub fn fit(&self, width: f32, height: f32) -> Rect {
        if width <= 0.0 || height <= 0.0 {
            return Rect::new(self.x + self.width / 2.0, self.y + self.height / 2.0, 0.0, 0.0);
        }
        let scale = (self.width / width).min(self.height / height);
        let (w, h) = (width * scale, height * scale);
        Rect::new(self.x + (self.width - w) / 2.0, self.y + (self.height - h) / 2.0, w, h)
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Prev,
    Next,
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub prev: Rect,
    pub next: Rect,
    pub slide: Rect,
}

impl Layout {
    pub fn compute(width: f32, height: f32) -> Self {
        let button_height = height * 0.25;
        let button_y = (height - button_height) / 2.0;
        let slide_x = BUTTON_WIDTH + 2.0 * MARGIN;
        let slide_width = (width - 2.0 * slide_x).max(1.0);
        let slide_height = (height - 2.0 * MARGIN).max(1.0);
        Self {
            prev: Rect::new(MARGIN, button_y, BUTTON_WIDTH, button_height),
            next: Rect::new(width - MARGIN - BUTTON_WIDTH, button_y, BUTTON_WIDTH, button_height),
            slide: Rect::new(slide_x, MARGIN, slide_width, slide_height),
        }
    }

    /// Buttons win over the slide; the slide only counts where its image is drawn.
    /// `visible` is the pixel size of the shown slide, if any.
    pub fn hit(&self, px: f32, py: f32, visible: Option<(f32, f32)>) -> Option<Hit> {
        if self.prev.contains(px, py) {
            return Some(Hit::Prev);
        }
        if self.next.contains(px, py) {
            return Some(Hit::Next);
        }
        let (width, height) = visible?;
        self.slide.fit(width, height).contains(px, py).then_some(Hit::Slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_sit_at_the_edges_around_the_slide() {
        let layout = Layout::compute(1280.0, 720.0);
        assert_eq!(layout.prev, Rect::new(16.0, 270.0, 64.0, 180.0));
        assert_eq!(layout.next, Rect::new(1200.0, 270.0, 64.0, 180.0));
        assert_eq!(layout.slide, Rect::new(96.0, 16.0, 1088.0, 688.0));
    }

    #[test]
    fn tiny_window_keeps_a_non_empty_slide_area() {
        let layout = Layout::compute(100.0, 20.0);
        assert_eq!(layout.slide.width, 1.0);
        assert_eq!(layout.slide.height, 1.0);
    }

    #[test]
    fn fit_keeps_aspect_ratio_and_centers() {
        let area = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(area.fit(100.0, 100.0), Rect::new(50.0, 0.0, 100.0, 100.0));
        assert_eq!(area.fit(400.0, 100.0), Rect::new(0.0, 25.0, 200.0, 50.0));
        assert_eq!(area.fit(0.0, 10.0).width, 0.0);
    }

    #[test]
    fn hit_order_is_prev_next_then_slide() {
        let layout = Layout::compute(1280.0, 720.0);

        assert_eq!(layout.hit(20.0, 300.0, Some((800.0, 600.0))), Some(Hit::Prev));
        assert_eq!(layout.hit(1210.0, 300.0, Some((800.0, 600.0))), Some(Hit::Next));
        assert_eq!(layout.hit(640.0, 360.0, Some((800.0, 600.0))), Some(Hit::Slide));
        assert_eq!(layout.hit(640.0, 360.0, None), None);
        // Letterboxed: a square image leaves the far sides of the slide area empty
        assert_eq!(layout.hit(120.0, 360.0, Some((100.0, 100.0))), None);
        assert_eq!(layout.hit(20.0, 20.0, Some((800.0, 600.0))), None);
    }

    #[test]
    fn overlapping_slide_area_still_prefers_buttons() {
        let layout = Layout {
            prev: Rect::new(0.0, 0.0, 50.0, 50.0),
            next: Rect::new(50.0, 0.0, 50.0, 50.0),
            slide: Rect::new(0.0, 0.0, 100.0, 100.0),
        };
        assert_eq!(layout.hit(10.0, 10.0, Some((1.0, 1.0))), Some(Hit::Prev));
        assert_eq!(layout.hit(60.0, 10.0, Some((1.0, 1.0))), Some(Hit::Next));
        assert_eq!(layout.hit(10.0, 90.0, Some((1.0, 1.0))), Some(Hit::Slide));
    }
}
