// Light pulse controller
//
// Keeps one output lit for a number of loop ticks. trigger() lights it
// at once and loads the budget; each tick() spends one lit period, and
// the tick after the budget runs dry drives the pin low. The pin is
// rewritten on every tick so nothing else can leave it stuck.
//
// Re-triggering replaces the remaining budget (last trigger wins).

use embedded_hal::digital::OutputPin;

pub struct LightPulse<P> {
    pin: P,
    remaining: u16,
    lit: bool,
}

impl<P: OutputPin> LightPulse<P> {
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self {
            pin,
            remaining: 0,
            lit: false,
        }
    }

    pub fn trigger(&mut self, ticks: u16) {
        self.remaining = ticks;
        self.lit = ticks > 0;
        self.drive();
    }

    /// Call exactly once per loop iteration.
    pub fn tick(&mut self) {
        self.lit = self.remaining > 0;
        self.remaining = self.remaining.saturating_sub(1);
        self.drive();
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Loop periods the output stays lit, counting the current one;
    /// zero exactly when the output is low.
    pub fn remaining(&self) -> u16 {
        self.remaining.saturating_add(u16::from(self.lit))
    }

    fn drive(&mut self) {
        let _ = if self.lit {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}
