// Wire-loop contact counter
//
// Counts rising edges of the contact signal. An edge only counts when
// more than the margin window has passed since the last counted edge;
// anything sooner is bounce or the same scrape continuing. While the
// loop is in contact the elapsed time is accumulated as well.
//
// reset() zeroes count and contact time without looking at the window.

use crate::Millis;

pub struct ContactCounter {
    margin_ms: Millis,
    count: u32,
    last_accepted: Option<Millis>,
    touching: bool,
    last_seen: Millis,
    contact_ms: Millis,
}

impl ContactCounter {
    pub const fn new(margin_ms: Millis) -> Self {
        Self {
            margin_ms,
            count: 0,
            last_accepted: None,
            touching: false,
            last_seen: 0,
            contact_ms: 0,
        }
    }

    /// Feed the contact level for this tick. Returns the new count when
    /// a rising edge was accepted.
    pub fn update(&mut self, closed: bool, now: Millis) -> Option<u32> {
        let rising = closed && !self.touching;
        if closed && self.touching {
            self.contact_ms += now.saturating_sub(self.last_seen);
        }
        self.touching = closed;
        self.last_seen = now;

        if !rising {
            return None;
        }

        let clear = match self.last_accepted {
            Some(last) => now.saturating_sub(last) > self.margin_ms,
            None => true,
        };
        if !clear {
            log::trace!("contact at {}ms inside margin, ignored", now);
            return None;
        }

        self.last_accepted = Some(now);
        self.count = self.count.saturating_add(1);
        log::debug!("contact #{} at {}ms", self.count, now);
        Some(self.count)
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.contact_ms = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Total time spent in contact since boot or the last reset.
    pub fn contact_ms(&self) -> Millis {
        self.contact_ms
    }
}
