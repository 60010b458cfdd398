// Contact debouncer
//
// A raw reading becomes the candidate; the candidate only becomes the
// stable state after holding for the settle window. Any flip during
// the window restarts it.

use crate::Millis;

pub struct Debouncer {
    settle_ms: Millis,
    stable: bool,
    candidate: bool,
    candidate_since: Millis,
}

impl Debouncer {
    pub const fn new(settle_ms: Millis) -> Self {
        Self {
            settle_ms,
            stable: false,
            candidate: false,
            candidate_since: 0,
        }
    }

    /// Feed one raw reading; returns the debounced level.
    pub fn update(&mut self, raw: bool, now: Millis) -> bool {
        if raw != self.candidate {
            self.candidate = raw;
            self.candidate_since = now;
        }

        if now.saturating_sub(self.candidate_since) >= self.settle_ms {
            self.stable = self.candidate;
        }
        self.stable
    }

    pub fn is_high(&self) -> bool {
        self.stable
    }

    pub fn is_settling(&self) -> bool {
        self.candidate != self.stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_until_settled() {
        let mut d = Debouncer::new(10);
        assert!(!d.update(true, 100));
        assert!(d.is_settling());
        assert!(!d.update(true, 105));
        assert!(d.update(true, 110));
        assert!(!d.is_settling());
    }

    #[test]
    fn chatter_restarts_the_window() {
        let mut d = Debouncer::new(10);
        d.update(true, 0);
        d.update(false, 4);
        d.update(true, 8);
        assert!(!d.update(true, 15));
        assert!(d.update(true, 18));
    }

    #[test]
    fn release_is_debounced_too() {
        let mut d = Debouncer::new(10);
        d.update(true, 0);
        assert!(d.update(true, 10));
        assert!(d.update(false, 20));
        assert!(!d.update(false, 30));
        assert!(!d.is_high());
    }
}
