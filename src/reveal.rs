use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Animation {
    FadeUp,
    FadeIn,
    ScaleIn,
    SlideLeft,
    SlideRight,
}

impl Animation {
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal-fade-up",
            Self::FadeIn => "reveal-fade-in",
            Self::ScaleIn => "reveal-scale-in",
            Self::SlideLeft => "reveal-slide-left",
            Self::SlideRight => "reveal-slide-right",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealState {
    NotRevealed,
    /// Seen, waiting out the delay.
    Pending,
    Revealed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealAction {
    Nothing,
    RevealNow,
    RevealAfter(Duration),
}

/// One-shot reveal: once revealed, an element stays revealed for the rest
/// of its mount.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Reveal {
    animation: Animation,
    delay: Duration,
    state: RevealState,
}

impl Reveal {
    pub fn new(animation: Animation, delay_ms: u32) -> Self {
        Self {
            animation,
            delay: Duration::from_millis(u64::from(delay_ms)),
            state: RevealState::NotRevealed,
        }
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one intersection observation. Only the first intersecting
    /// observation does anything.
    pub fn observe(&mut self, intersecting: bool) -> RevealAction {
        if !intersecting || self.state != RevealState::NotRevealed {
            return RevealAction::Nothing;
        }

        if self.delay.is_zero() {
            self.state = RevealState::Revealed;
            RevealAction::RevealNow
        } else {
            self.state = RevealState::Pending;
            RevealAction::RevealAfter(self.delay)
        }
    }

    /// Finishes a delayed reveal. Returns whether visibility changed.
    pub fn complete(&mut self) -> bool {
        if self.state != RevealState::Pending {
            return false;
        }

        self.state = RevealState::Revealed;
        true
    }

    /// Skips the transition entirely, e.g. for reduced-motion readers.
    pub fn reveal_immediately(&mut self) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }

        self.state = RevealState::Revealed;
        true
    }
}

/// Fallback visibility test for browsers without `IntersectionObserver`.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    bottom > 0.0 && top < viewport_height
}
