// Debounced digital input (button or wire-loop contact)
//
// Polled once per loop tick; `active_low` inputs read as pressed while
// the pin is pulled to ground.

use esp_hal::gpio::Input;
use iraira_core::Millis;
use iraira_core::debounce::Debouncer;

pub struct DigitalInput {
    pin: Input<'static>,
    active_low: bool,
    debounce: Debouncer,
}

impl DigitalInput {
    pub fn new(pin: Input<'static>, active_low: bool, settle_ms: Millis) -> Self {
        Self {
            pin,
            active_low,
            debounce: Debouncer::new(settle_ms),
        }
    }

    /// Debounced active level at `now`.
    pub fn poll(&mut self, now: Millis) -> bool {
        let active = self.pin.is_low() == self.active_low;
        self.debounce.update(active, now)
    }
}
