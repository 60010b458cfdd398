// One-shot tone timer
//
// start() begins a fixed-length tone; update() reports whether it
// should still be sounding. Starting again while sounding restarts
// the duration. The caller owns the actual PWM channel.

use crate::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub freq_hz: u32,
    pub duration_ms: Millis,
    /// PWM duty in percent.
    pub volume_pct: u8,
}

pub struct Beep {
    tone: Tone,
    until: Option<Millis>,
}

impl Beep {
    pub const fn new(tone: Tone) -> Self {
        Self { tone, until: None }
    }

    pub fn start(&mut self, now: Millis) {
        self.until = Some(now + self.tone.duration_ms);
    }

    /// Advance to `now`; true while the tone should sound.
    pub fn update(&mut self, now: Millis) -> bool {
        match self.until {
            Some(until) if now < until => true,
            Some(_) => {
                self.until = None;
                false
            }
            None => false,
        }
    }

    pub fn is_sounding(&self) -> bool {
        self.until.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TONE: Tone = Tone {
        freq_hz: 400,
        duration_ms: 100,
        volume_pct: 50,
    };

    #[test]
    fn sounds_for_its_duration() {
        let mut b = Beep::new(TONE);
        assert!(!b.update(0));
        b.start(1000);
        assert!(b.update(1000));
        assert!(b.update(1099));
        assert!(!b.update(1100));
        assert!(!b.is_sounding());
    }

    #[test]
    fn restart_extends() {
        let mut b = Beep::new(TONE);
        b.start(0);
        b.start(80);
        assert!(b.update(150));
        assert!(!b.update(180));
    }
}
