// 3-bit parallel level port
//
// Lines are rewritten only when the code changes; the host reader
// samples all three at once, so a stable code matters more than
// latency.

use esp_hal::gpio::{Level, Output};
use iraira_core::parallel::{self, BITS};

pub struct ParallelPort {
    pins: [Output<'static>; BITS],
    code: Option<u8>,
}

impl ParallelPort {
    /// `pins` are bit 0 first.
    pub fn new(pins: [Output<'static>; BITS]) -> Self {
        Self { pins, code: None }
    }

    pub fn write(&mut self, code: u8) {
        if self.code == Some(code) {
            return;
        }
        for (pin, high) in self.pins.iter_mut().zip(parallel::lines(code)) {
            pin.set_level(Level::from(high));
        }
        self.code = Some(code);
    }
}
