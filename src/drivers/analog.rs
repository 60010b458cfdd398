// Oneshot ADC sampler for the analog pad
//
// A failed conversion keeps the previous sample so the loop always has
// a value to quantize.

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcPin};
use esp_hal::peripherals::{ADC2, GPIO25};
use iraira_core::config::{ADC_MAX, ADC_MIN};

pub type PadAdc = Adc<'static, ADC2<'static>, Blocking>;
pub type PadPin = AdcPin<GPIO25<'static>, ADC2<'static>>;

pub struct Sampler {
    adc: PadAdc,
    pin: PadPin,
    last: u16,
    failures: u32,
}

impl Sampler {
    pub fn new(adc: PadAdc, pin: PadPin) -> Self {
        Self {
            adc,
            pin,
            // centre until the first conversion lands
            last: ADC_MIN + (ADC_MAX - ADC_MIN) / 2,
            failures: 0,
        }
    }

    /// Raw 12-bit sample.
    pub fn read(&mut self) -> u16 {
        match nb::block!(self.adc.read_oneshot(&mut self.pin)) {
            Ok(raw) => {
                self.last = raw.min(ADC_MAX);
                if self.failures > 0 {
                    log::info!("adc: recovered after {} failed reads", self.failures);
                    self.failures = 0;
                }
            }
            Err(()) => {
                if self.failures == 0 {
                    log::warn!("adc: read failed, holding {}", self.last);
                }
                self.failures = self.failures.saturating_add(1);
            }
        }
        self.last
    }
}
