//! Buzzer (M5StickC Plus): sounds while the contact is closed and for
//! one tone length after it opens.

use crate::Millis;
use crate::beep::{Beep, Tone};

pub struct Buzzer {
    beep: Beep,
}

impl Buzzer {
    pub const fn new(tone: Tone) -> Self {
        Self {
            beep: Beep::new(tone),
        }
    }

    /// Returns whether the tone should be sounding after this tick.
    pub fn step(&mut self, pressed: bool, now: Millis) -> bool {
        if pressed {
            self.beep.start(now);
        }
        self.beep.update(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BEEP, BUZZER_LOOP_MS};

    #[test]
    fn silent_until_pressed() {
        let mut b = Buzzer::new(BEEP);
        assert!(!b.step(false, 0));
        assert!(b.step(true, 2));
    }

    #[test]
    fn holds_while_pressed_then_tails_off() {
        let mut b = Buzzer::new(BEEP);
        let mut now = 0;
        for _ in 0..500 {
            assert!(b.step(true, now));
            now += BUZZER_LOOP_MS;
        }
        let released = now;
        while now < released + BEEP.duration_ms - BUZZER_LOOP_MS {
            assert!(b.step(false, now), "at {now}");
            now += BUZZER_LOOP_MS;
        }
        now = released + BEEP.duration_ms;
        assert!(!b.step(false, now));
    }
}
