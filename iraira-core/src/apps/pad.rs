//! Analog pad (M5Atom).
//!
//! One tick: the sample is normalized and written to both telemetry
//! sinks, quantized twice (matrix digits and the 3-bit parallel code),
//! the button feeds the press detector whose events are written as
//! their own lines and flash the LED, and finally the LED pulse ticks.

use embedded_hal::digital::OutputPin;

use crate::Millis;
use crate::config::{
    BOOT_PULSE_TICKS, EVENT_PULSE_TICKS, LONG_PRESS_MS, MATRIX_LEVELS, PARALLEL_LEVELS,
};
use crate::parallel;
use crate::press::{PressDetector, PressEvent};
use crate::pulse::LightPulse;
use crate::quantize::{self, Level};
use crate::telemetry::{Sink, Telemetry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadFrame {
    pub normalized: f32,
    /// Level for the matrix glyph.
    pub level: Level,
    /// Code for the parallel port.
    pub code: u8,
    pub event: Option<PressEvent>,
}

pub struct AnalogPad<P, C, W> {
    press: PressDetector,
    led: LightPulse<P>,
    telemetry: Telemetry<C, W>,
}

impl<P: OutputPin, C: Sink, W: Sink> AnalogPad<P, C, W> {
    /// Starts with the boot flash already lit.
    pub fn new(led: P, telemetry: Telemetry<C, W>) -> Self {
        let mut led = LightPulse::new(led);
        led.trigger(BOOT_PULSE_TICKS);
        Self {
            press: PressDetector::new(LONG_PRESS_MS),
            led,
            telemetry,
        }
    }

    /// `pressed` must already be debounced.
    pub fn step(&mut self, raw: u16, pressed: bool, now: Millis) -> PadFrame {
        let normalized = quantize::normalize(&MATRIX_LEVELS, raw);
        self.telemetry.value(normalized);

        let level = quantize::quantize(&MATRIX_LEVELS, raw);
        let code = parallel::encode(quantize::quantize(&PARALLEL_LEVELS, raw));

        let event = self.press.update(pressed, now);
        if let Some(ev) = event {
            log::debug!("button: {:?}", ev);
            self.led.trigger(EVENT_PULSE_TICKS);
            self.telemetry.event(ev);
        }

        self.led.tick();

        PadFrame {
            normalized,
            level,
            code,
            event,
        }
    }

    pub fn led_lit(&self) -> bool {
        self.led.is_lit()
    }

    pub fn telemetry_mut(&mut self) -> &mut Telemetry<C, W> {
        &mut self.telemetry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pulse::tests::FakePin;
    use crate::telemetry::tests::Capture;

    fn pad() -> (AnalogPad<FakePin, Capture, Capture>, FakePin) {
        let pin = FakePin::default();
        let t = Telemetry::new(Capture::default(), Capture::default());
        (AnalogPad::new(pin.clone(), t), pin)
    }

    #[test]
    fn raw_sequence_end_to_end() {
        let (mut pad, _) = pad();
        let frames: Vec<PadFrame> = [2047u16, 2047, 4095, 4095, 0]
            .iter()
            .enumerate()
            .map(|(i, &raw)| pad.step(raw, false, i as Millis * 20))
            .collect();

        let levels: Vec<Level> = frames.iter().map(|f| f.level).collect();
        assert_eq!(
            levels,
            [
                Level::NEUTRAL,
                Level::NEUTRAL,
                Level::positive(5),
                Level::positive(5),
                Level::negative(5),
            ]
        );
        let codes: Vec<u8> = frames.iter().map(|f| f.code).collect();
        assert_eq!(codes, [4, 4, 7, 7, 0]);

        let (console, wireless) = pad.telemetry_mut().sinks_mut();
        assert_eq!(console.lines(), ["0.500", "0.500", "1.000", "1.000", "0.000"]);
        assert_eq!(wireless.text, console.text);
    }

    #[test]
    fn press_hold_release_lines_follow_the_value() {
        let (mut pad, _) = pad();
        let mut now = 0;
        let mut step = |pressed| {
            let f = pad.step(2047, pressed, now);
            now += 20;
            f.event
        };
        let mut events = Vec::new();
        for _ in 0..60 {
            events.extend(step(true));
        }
        events.extend(step(false));
        drop(step);

        assert_eq!(
            events,
            [PressEvent::Press, PressEvent::Hold, PressEvent::Release]
        );
        let (console, _) = pad.telemetry_mut().sinks_mut();
        let codes: Vec<&str> = console
            .lines()
            .into_iter()
            .filter(|l| !l.starts_with('0'))
            .collect();
        assert_eq!(codes, ["p", "l", "r"]);
        assert_eq!(console.lines()[..2], ["0.500", "p"]);
    }

    #[test]
    fn boot_flash_then_event_flash() {
        let (mut pad, pin) = pad();
        assert!(pin.is_high());
        for t in 0..BOOT_PULSE_TICKS as Millis {
            pad.step(2047, false, t * 20);
        }
        assert!(pin.is_high());
        pad.step(2047, false, 1000);
        assert!(!pin.is_high());

        pad.step(2047, true, 1020);
        assert!(pad.led_lit());
        for t in 0..EVENT_PULSE_TICKS as Millis {
            pad.step(2047, true, 1040 + t * 20);
        }
        assert!(!pad.led_lit());
    }
}
