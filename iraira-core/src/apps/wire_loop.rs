//! Wire-loop counter (M5StickC Plus).
//!
//! Every tick the contact level goes through the margin-windowed
//! counter; an accepted contact starts a beep and flashes the LED. The
//! current count is written to telemetry once per tick. The LCD is not
//! touched from `step`: the scheduler calls `refresh` on its own period,
//! and the reset button calls `reset`, which repaints "0" at once.

use embedded_hal::digital::OutputPin;

use crate::Millis;
use crate::beep::{Beep, Tone};
use crate::config::{EVENT_PULSE_TICKS, MARGIN_MS};
use crate::counter::ContactCounter;
use crate::pulse::LightPulse;
use crate::telemetry::{Sink, Telemetry};
use crate::view::CounterView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireStep {
    /// New count when this tick's contact was accepted.
    pub accepted: Option<u32>,
    pub beeping: bool,
}

pub struct WireLoop<P, C, W> {
    counter: ContactCounter,
    led: LightPulse<P>,
    beep: Beep,
    view: CounterView,
    telemetry: Telemetry<C, W>,
}

impl<P: OutputPin, C: Sink, W: Sink> WireLoop<P, C, W> {
    pub fn new(led: P, tone: Tone, telemetry: Telemetry<C, W>) -> Self {
        Self {
            counter: ContactCounter::new(MARGIN_MS),
            led: LightPulse::new(led),
            beep: Beep::new(tone),
            view: CounterView::new(),
            telemetry,
        }
    }

    /// `closed` is the contact level (true while the wand touches the wire).
    pub fn step(&mut self, closed: bool, now: Millis) -> WireStep {
        let accepted = self.counter.update(closed, now);
        if accepted.is_some() {
            self.beep.start(now);
            self.led.trigger(EVENT_PULSE_TICKS);
        }

        self.telemetry.count(self.counter.count());
        self.led.tick();

        WireStep {
            accepted,
            beeping: self.beep.update(now),
        }
    }

    /// Zero the count; returns the text to paint right away.
    pub fn reset(&mut self) -> &str {
        log::debug!(
            "reset at count {} ({}ms in contact)",
            self.counter.count(),
            self.counter.contact_ms()
        );
        self.counter.reset();
        self.view.clear()
    }

    /// Text to paint if the count changed since the last paint.
    pub fn refresh(&mut self) -> Option<&str> {
        self.view.refresh(self.counter.count())
    }

    pub fn count(&self) -> u32 {
        self.counter.count()
    }

    pub fn contact_ms(&self) -> Millis {
        self.counter.contact_ms()
    }

    pub fn telemetry_mut(&mut self) -> &mut Telemetry<C, W> {
        &mut self.telemetry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BEEP;
    use crate::pulse::tests::FakePin;
    use crate::telemetry::tests::Capture;

    fn game() -> (WireLoop<FakePin, Capture, Capture>, FakePin) {
        let pin = FakePin::default();
        let t = Telemetry::new(Capture::default(), Capture::default());
        (WireLoop::new(pin.clone(), BEEP, t), pin)
    }

    // touch for `len` ms starting at `at`, 20ms ticks, then one open tick
    fn touch(g: &mut WireLoop<FakePin, Capture, Capture>, at: Millis, len: Millis) {
        for t in (at..at + len).step_by(20) {
            g.step(true, t);
        }
        g.step(false, at + len);
    }

    #[test]
    fn bounce_inside_margin_counts_once() {
        let (mut g, _) = game();
        touch(&mut g, 0, 40);
        touch(&mut g, 500, 40);
        assert_eq!(g.count(), 1);
        touch(&mut g, 1500, 40);
        assert_eq!(g.count(), 2);
    }

    #[test]
    fn accepted_contact_beeps_and_flashes() {
        let (mut g, pin) = game();
        let s = g.step(true, 100);
        assert_eq!(s.accepted, Some(1));
        assert!(s.beeping);
        assert!(pin.is_high());

        assert!(g.step(true, 180).beeping);
        assert!(!g.step(true, 200).beeping);
        for _ in 0..4 {
            g.step(false, 220);
        }
        assert!(!pin.is_high());
    }

    #[test]
    fn count_line_every_tick() {
        let (mut g, _) = game();
        g.step(false, 0);
        g.step(true, 20);
        g.step(true, 40);
        let (console, wireless) = g.telemetry_mut().sinks_mut();
        assert_eq!(console.lines(), ["0", "1", "1"]);
        assert_eq!(wireless.lines(), ["0", "1", "1"]);
    }

    #[test]
    fn refresh_paints_changes_only() {
        let (mut g, _) = game();
        assert_eq!(g.refresh(), Some("0"));
        assert_eq!(g.refresh(), None);
        touch(&mut g, 0, 20);
        assert_eq!(g.refresh(), Some("1"));
        assert_eq!(g.refresh(), None);
    }

    #[test]
    fn reset_clears_immediately() {
        let (mut g, _) = game();
        touch(&mut g, 0, 60);
        touch(&mut g, 2000, 60);
        g.refresh();
        assert_eq!(g.count(), 2);
        assert_eq!(g.contact_ms(), 80);

        assert_eq!(g.reset(), "0");
        assert_eq!(g.count(), 0);
        assert_eq!(g.contact_ms(), 0);
        // the periodic refresh has nothing left to do
        assert_eq!(g.refresh(), None);
    }
}
