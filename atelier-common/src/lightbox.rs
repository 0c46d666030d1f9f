//! Lightbox state machine
//!
//! The lightbox separates the *target* (derived from the URL) from the
//! *displayed* image so the old image can fade out before the swap. Each swap
//! issues a new load token; load completions carry the token their image was
//! rendered with and are ignored once a newer swap has started.
//!
//! ```text
//!   Closed --retarget--> Loading --reveal--> Visible
//!                           ^                   |
//!                           |              retarget(other)
//!                      finish_fade              v
//!                           +-------------- FadingOut
//! ```

/// Observable lightbox states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxPhase {
    /// Not rendered
    #[default]
    Closed,
    /// Image selected but not confirmed loaded; fully transparent
    Loading,
    /// Image loaded and shown
    Visible,
    /// Current image fading out ahead of a swap
    FadingOut,
}

/// Identifies the image a load completion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What the view has to do after a retarget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retarget {
    /// Nothing changed
    Unchanged,
    /// First image: render it right away and wait for its load signal
    ShowNow,
    /// Fade the current image out, then call `finish_fade`. Any fade already
    /// pending must be cancelled first.
    FadeOut,
    /// The target went back to the displayed image mid-fade; cancel the
    /// pending fade, the image is visible again
    Resume,
}

/// Direction for prev/next navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lightbox {
    len: usize,
    target: Option<usize>,
    display: Option<usize>,
    phase: LightboxPhase,
    token: u64,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LightboxPhase {
        self.phase
    }

    /// Whether the displayed image should be at full opacity
    pub fn is_visible(&self) -> bool {
        self.phase == LightboxPhase::Visible
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Index of the image currently rendered
    pub fn displayed(&self) -> Option<usize> {
        self.display
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Point the lightbox at `index` within a selection of `len` images.
    pub fn retarget(&mut self, index: usize, len: usize) -> Retarget {
        if index >= len {
            return Retarget::Unchanged;
        }
        self.len = len;
        self.target = Some(index);

        match self.display {
            None => {
                self.display = Some(index);
                self.token += 1;
                self.phase = LightboxPhase::Loading;
                Retarget::ShowNow
            }
            Some(shown) if shown == index => {
                if self.phase == LightboxPhase::FadingOut {
                    self.phase = LightboxPhase::Visible;
                    Retarget::Resume
                } else {
                    Retarget::Unchanged
                }
            }
            Some(_) => {
                self.phase = LightboxPhase::FadingOut;
                Retarget::FadeOut
            }
        }
    }

    /// Fade-out elapsed: swap to the target image and wait for it to load.
    /// Returns false when there is no fade in progress.
    pub fn finish_fade(&mut self) -> bool {
        if self.phase != LightboxPhase::FadingOut {
            return false;
        }
        let Some(target) = self.target else {
            return false;
        };
        self.display = Some(target);
        self.token += 1;
        self.phase = LightboxPhase::Loading;
        true
    }

    /// Ticket for the image rendered right now. Capture it when rendering the
    /// image and hand it back from its load handler.
    pub fn ticket(&self) -> Option<LoadTicket> {
        self.display.map(|_| LoadTicket(self.token))
    }

    /// Whether a load completion carrying `ticket` is still current
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.display.is_some() && ticket.0 == self.token
    }

    /// Make the loaded image visible. Stale tickets and repeated calls are
    /// no-ops, so both the animation-frame path and the fallback timer may call
    /// this. Returns true if the image became visible.
    pub fn reveal(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) || self.phase != LightboxPhase::Loading {
            return false;
        }
        self.phase = LightboxPhase::Visible;
        true
    }

    /// Reset to Closed. Outstanding tickets become stale.
    pub fn close(&mut self) {
        self.target = None;
        self.display = None;
        self.phase = LightboxPhase::Closed;
        self.token += 1;
    }

    pub fn can_step(&self, step: Step) -> bool {
        self.step(step).is_some()
    }

    /// Neighbour of the target in direction `step`, without wrapping
    pub fn step(&self, step: Step) -> Option<usize> {
        let target = self.target?;
        match step {
            Step::Previous => target.checked_sub(1),
            Step::Next => (target + 1 < self.len).then_some(target + 1),
        }
    }
}
