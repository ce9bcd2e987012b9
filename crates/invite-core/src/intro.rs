use crate::constants::INTRO_FADE_DURATION;
use std::time::Duration;

/// Overlay lifecycle. `Revealed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroState {
    Gated,
    FadingOut { elapsed: Duration },
    Revealed,
}

pub struct IntroOverlay {
    state: IntroState,
    fade: Duration,
}

impl Default for IntroOverlay {
    fn default() -> Self {
        Self::new(INTRO_FADE_DURATION)
    }
}

impl IntroOverlay {
    pub fn new(fade: Duration) -> Self {
        Self {
            state: IntroState::Gated,
            fade,
        }
    }

    pub fn state(&self) -> IntroState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == IntroState::Revealed
    }

    /// Start the fade. Only the first click counts; returns whether it did.
    pub fn click(&mut self) -> bool {
        if self.state != IntroState::Gated {
            return false;
        }
        self.state = IntroState::FadingOut {
            elapsed: Duration::ZERO,
        };
        log::info!("[intro] overlay dismissed, fading out");
        true
    }

    /// Returns true on the frame the fade completes.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let IntroState::FadingOut { elapsed } = self.state else {
            return false;
        };
        let elapsed = elapsed + dt;
        if elapsed >= self.fade {
            self.state = IntroState::Revealed;
            log::info!("[intro] main content revealed");
            true
        } else {
            self.state = IntroState::FadingOut { elapsed };
            false
        }
    }
}
