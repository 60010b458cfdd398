//! Press/hold detector
//!
//! Consumes an already-debounced contact level once per tick and turns
//! it into discrete events:
//!
//! ```text
//!   Idle --rise--> Pressed --held >= long_press--> HeldLong
//!     ^               |                               |
//!     +----fall-------+-------------fall--------------+
//! ```
//!
//! `Hold` fires at most once per press cycle; the latch re-arms on
//! release.

use core::fmt;

use crate::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressState {
    Idle,
    Pressed,
    HeldLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEvent {
    Press,
    Release,
    Hold,
}

impl PressEvent {
    /// Single-character wire code.
    pub const fn code(self) -> &'static str {
        match self {
            PressEvent::Press => "p",
            PressEvent::Release => "r",
            PressEvent::Hold => "l",
        }
    }
}

impl fmt::Display for PressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub struct PressDetector {
    long_press_ms: Millis,
    state: PressState,
    press_since: Millis,
}

impl PressDetector {
    pub const fn new(long_press_ms: Millis) -> Self {
        Self {
            long_press_ms,
            state: PressState::Idle,
            press_since: 0,
        }
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn update(&mut self, pressed: bool, now: Millis) -> Option<PressEvent> {
        match (self.state, pressed) {
            (PressState::Idle, true) => {
                self.state = PressState::Pressed;
                self.press_since = now;
                Some(PressEvent::Press)
            }
            (PressState::Pressed | PressState::HeldLong, false) => {
                self.state = PressState::Idle;
                Some(PressEvent::Release)
            }
            (PressState::Pressed, true) => {
                if now.saturating_sub(self.press_since) >= self.long_press_ms {
                    log::debug!("hold after {}ms", now - self.press_since);
                    self.state = PressState::HeldLong;
                    Some(PressEvent::Hold)
                } else {
                    None
                }
            }
            (PressState::HeldLong, true) | (PressState::Idle, false) => None,
        }
    }
}
