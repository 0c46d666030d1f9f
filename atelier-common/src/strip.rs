//! Horizontal gallery strip state
//!
//! Prev/next controls and the scroll wheel all go through `scroll_to`. Items
//! are revealed one by one after every reset, and items the viewer has moved
//! past stay dimmed. The strip remembers which gallery it shows and starts
//! over only when that gallery changes.

use crate::selection::GalleryKey;

/// Opacity of an item the viewer has scrolled past
pub const DIMMED_OPACITY: f64 = 0.3;

/// Result of feeding one wheel event to the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Moved to this index
    Stepped(usize),
    /// Too soon after the previous wheel step
    Throttled,
    /// No movement: zero delta or already at the end in that direction
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StripCarousel {
    key: Option<GalleryKey>,
    len: usize,
    position: usize,
    revealed: usize,
    throttle_ms: f64,
    last_wheel_step_ms: Option<f64>,
}

impl StripCarousel {
    pub fn new(len: usize, throttle_ms: u64) -> Self {
        Self {
            key: None,
            len,
            position: 0,
            revealed: 0,
            throttle_ms: throttle_ms as f64,
            last_wheel_step_ms: None,
        }
    }

    /// Start over for a new selection: back to the first item, nothing revealed
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.position = 0;
        self.revealed = 0;
        self.last_wheel_step_ms = None;
    }

    /// Follow the selection shown by the view. A different `key` resets the
    /// strip and returns true, meaning the reveal has to start over. The same
    /// key keeps the position.
    pub fn sync(&mut self, key: &GalleryKey, len: usize) -> bool {
        if self.key.as_ref() == Some(key) {
            self.len = len;
            self.position = self.position.min(len.saturating_sub(1));
            self.revealed = self.revealed.min(len);
            return false;
        }
        self.key = Some(key.clone());
        self.reset(len);
        true
    }

    pub fn key(&self) -> Option<&GalleryKey> {
        self.key.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn can_previous(&self) -> bool {
        self.position > 0
    }

    pub fn can_next(&self) -> bool {
        self.position + 1 < self.len
    }

    /// Move to `index`. Returns the index when it is in range.
    pub fn scroll_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.position = index;
        Some(index)
    }

    pub fn next(&mut self) -> Option<usize> {
        if !self.can_next() {
            return None;
        }
        self.scroll_to(self.position + 1)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if !self.can_previous() {
            return None;
        }
        self.scroll_to(self.position - 1)
    }

    /// One wheel event. Positive `delta` pages forward.
    pub fn wheel(&mut self, delta: f64, now_ms: f64) -> WheelOutcome {
        if delta == 0.0 || delta.is_nan() {
            return WheelOutcome::Ignored;
        }
        if let Some(last) = self.last_wheel_step_ms {
            if now_ms - last < self.throttle_ms {
                return WheelOutcome::Throttled;
            }
        }

        let moved = if delta > 0.0 {
            self.next()
        } else {
            self.previous()
        };

        match moved {
            Some(index) => {
                self.last_wheel_step_ms = Some(now_ms);
                WheelOutcome::Stepped(index)
            }
            None => WheelOutcome::Ignored,
        }
    }

    /// Reveal one more item. Returns false once everything is visible.
    pub fn reveal_next(&mut self) -> bool {
        if self.revealed >= self.len {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.revealed
    }

    /// Items before the current position stay dimmed
    pub fn is_dimmed(&self, index: usize) -> bool {
        index < self.position
    }

    /// Opacity the view draws item `index` with
    pub fn item_opacity(&self, index: usize) -> f64 {
        if !self.is_revealed(index) {
            0.0
        } else if self.is_dimmed(index) {
            DIMMED_OPACITY
        } else {
            1.0
        }
    }
}
