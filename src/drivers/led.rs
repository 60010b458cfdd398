// Indicator LED polarity
//
// The pulse controller drives "high" for lit; boards wired with the
// LED to VCC need the level flipped.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use esp_hal::gpio::Output;

pub struct ActiveLow(pub Output<'static>);

impl ErrorType for ActiveLow {
    type Error = Infallible;
}

impl OutputPin for ActiveLow {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set_low();
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set_high();
        Ok(())
    }
}
