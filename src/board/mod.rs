//! Board support for the two M5Stack controllers.
//!
//! Maps physical hardware to named subsystems so the binaries never see
//! GPIO numbers. Each board consumes `Peripherals` once in `init` and
//! hands back ready-to-use bundles; bring-up errors surface as
//! [`BoardError`] and are fatal at boot.

pub mod atom;
pub mod pins;
pub mod pmu;
pub mod stickc;

use core::fmt;

pub use atom::Atom;
pub use stickc::StickC;

use esp_hal::Blocking;
use esp_hal::uart::{self, Uart};

/// Baud rate of the grove UART feeding the Bluetooth serial bridge.
pub const WIRELESS_BAUD: u32 = 115_200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    Spi,
    Uart,
    I2c,
    Pwm,
    Rmt,
    Display,
    /// Power management IC did not answer.
    Pmu,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Spi => write!(f, "spi config rejected"),
            BoardError::Uart => write!(f, "uart config rejected"),
            BoardError::I2c => write!(f, "i2c config rejected"),
            BoardError::Pwm => write!(f, "ledc config rejected"),
            BoardError::Rmt => write!(f, "rmt config rejected"),
            BoardError::Display => write!(f, "lcd init failed"),
            BoardError::Pmu => write!(f, "pmu not responding"),
        }
    }
}

pub type WirelessUart = Uart<'static, Blocking>;

fn wireless_config() -> uart::Config {
    uart::Config::default().with_baudrate(WIRELESS_BAUD)
}
