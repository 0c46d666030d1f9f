//! Home carousel state
//!
//! Index arithmetic wraps in both directions. Manual navigation never touches
//! the auto-advance timer, which is owned by the view.

/// Which half of the viewport the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSide {
    Left,
    Right,
}

impl PointerSide {
    /// Side of `x` within a viewport `width` pixels wide
    pub fn of(x: f64, width: f64) -> Self {
        if x < width / 2.0 {
            PointerSide::Left
        } else {
            PointerSide::Right
        }
    }
}

/// Full-screen slideshow over every displayable artwork
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeCarousel {
    len: usize,
    index: usize,
    pointer: Option<PointerSide>,
}

impl HomeCarousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            pointer: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slide, `None` when there is nothing to show
    pub fn index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    /// The auto-advance timer only runs when there is something to advance
    pub fn should_auto_advance(&self) -> bool {
        !self.is_empty()
    }

    /// Timer tick
    pub fn advance(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Click anywhere on the viewport: left half goes back, right half forward
    pub fn click(&mut self, x: f64, width: f64) {
        match PointerSide::of(x, width) {
            PointerSide::Left => self.previous(),
            PointerSide::Right => self.next(),
        }
    }

    pub fn pointer_moved(&mut self, x: f64, width: f64) {
        self.pointer = Some(PointerSide::of(x, width));
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Only the current slide is opaque; the rest are stacked underneath at zero
    pub fn slide_opacity(&self, index: usize) -> f64 {
        if self.index() == Some(index) {
            1.0
        } else {
            0.0
        }
    }

    /// Whether the navigation affordance on `side` is revealed
    pub fn shows_affordance(&self, side: PointerSide) -> bool {
        !self.is_empty() && self.pointer == Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timing;

    #[test]
    fn test_auto_advance_wraps_after_full_cycle() {
        let timing = Timing::default();
        let mut carousel = HomeCarousel::new(3);
        let start = carousel.index();

        let elapsed_ms = 15_000;
        let ticks = elapsed_ms / timing.home_advance_ms;
        assert_eq!(ticks, 3);

        let mut seen = Vec::new();
        for _ in 0..ticks {
            carousel.advance();
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![Some(1), Some(2), Some(0)]);
        assert_eq!(carousel.index(), start);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut carousel = HomeCarousel::new(3);
        carousel.previous();
        assert_eq!(carousel.index(), Some(2));
    }

    #[test]
    fn test_click_halves() {
        let mut carousel = HomeCarousel::new(4);
        carousel.click(900.0, 1000.0);
        assert_eq!(carousel.index(), Some(1));
        carousel.click(100.0, 1000.0);
        carousel.click(499.0, 1000.0);
        assert_eq!(carousel.index(), Some(3));
        carousel.click(500.0, 1000.0);
        assert_eq!(carousel.index(), Some(0));
    }

    #[test]
    fn test_only_current_slide_is_opaque() {
        let mut carousel = HomeCarousel::new(3);
        let opaque = |c: &HomeCarousel| (0..3).filter(|&i| c.slide_opacity(i) > 0.0).count();
        assert_eq!(opaque(&carousel), 1);
        assert_eq!(carousel.slide_opacity(0), 1.0);

        carousel.advance();
        assert_eq!(opaque(&carousel), 1);
        assert_eq!(carousel.slide_opacity(0), 0.0);
        assert_eq!(carousel.slide_opacity(1), 1.0);

        assert_eq!(HomeCarousel::new(0).slide_opacity(0), 0.0);
    }

    #[test]
    fn test_pointer_reveals_one_side() {
        let mut carousel = HomeCarousel::new(2);
        assert!(!carousel.shows_affordance(PointerSide::Left));
        assert!(!carousel.shows_affordance(PointerSide::Right));

        carousel.pointer_moved(10.0, 1000.0);
        assert!(carousel.shows_affordance(PointerSide::Left));
        assert!(!carousel.shows_affordance(PointerSide::Right));

        carousel.pointer_moved(800.0, 1000.0);
        assert!(carousel.shows_affordance(PointerSide::Right));

        carousel.pointer_left();
        assert!(!carousel.shows_affordance(PointerSide::Right));
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = HomeCarousel::new(0);
        assert!(!carousel.should_auto_advance());
        carousel.advance();
        carousel.previous();
        carousel.click(10.0, 100.0);
        carousel.pointer_moved(10.0, 100.0);
        assert_eq!(carousel.index(), None);
        assert!(!carousel.shows_affordance(PointerSide::Left));
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut carousel = HomeCarousel::new(1);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), Some(0));
    }
}
