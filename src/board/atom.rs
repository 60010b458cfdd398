//! M5Atom Matrix running the analog pad.

use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcConfig, Attenuation},
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::{GPIO27, Peripherals},
    rmt::Rmt,
    time::Rate,
    uart::Uart,
};
use log::info;

use crate::drivers::analog::{PadAdc, PadPin};

use super::{BoardError, WirelessUart, pins, wireless_config};

/// RMT source clock for the SK6812 timing.
const RMT_CLOCK_MHZ: u32 = 80;

/// Analog pad inputs and the indicator LED.
pub struct PadHw {
    pub adc: PadAdc,
    pub analog: PadPin,
    pub button: Input<'static>,
    pub led: Output<'static>,
}

/// RMT and data pin for the 5x5 matrix; the binary owns the pulse buffer.
pub struct MatrixHw {
    pub rmt: Rmt<'static, Blocking>,
    pub pin: GPIO27<'static>,
}

pub struct Atom {
    pub pad: PadHw,
    pub matrix: MatrixHw,
    /// Parallel code lines, bit 0 first.
    pub parallel: [Output<'static>; 3],
    pub uart: WirelessUart,
}

impl Atom {
    pub fn init(p: Peripherals) -> Result<Self, BoardError> {
        let mut adc_cfg = AdcConfig::new();
        // full 0-3.3V swing of the wiper
        let analog = adc_cfg.enable_pin(p.GPIO25, Attenuation::_11dB);
        let adc = Adc::new(p.ADC2, adc_cfg);

        // GPIO39 is input-only without internal pulls
        let button = Input::new(p.GPIO39, InputConfig::default().with_pull(Pull::None));
        let led = Output::new(p.GPIO22, Level::Low, OutputConfig::default());

        let rmt = Rmt::new(p.RMT, Rate::from_mhz(RMT_CLOCK_MHZ)).map_err(|_| BoardError::Rmt)?;

        let parallel = [
            Output::new(p.GPIO19, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO23, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO33, Level::Low, OutputConfig::default()),
        ];

        let uart = Uart::new(p.UART1, wireless_config())
            .map_err(|_| BoardError::Uart)?
            .with_tx(p.GPIO26)
            .with_rx(p.GPIO32);

        info!(
            "atom: analog GPIO{} button GPIO{} led GPIO{} matrix GPIO{}",
            pins::atom::ANALOG_IN,
            pins::atom::BUTTON,
            pins::atom::LED,
            pins::atom::MATRIX
        );
        info!(
            "atom: parallel GPIO{:?} uart tx GPIO{}",
            pins::atom::PARALLEL,
            pins::atom::UART_TX
        );

        Ok(Atom {
            pad: PadHw {
                adc,
                analog,
                button,
                led,
            },
            matrix: MatrixHw {
                rmt,
                pin: p.GPIO27,
            },
            parallel,
            uart,
        })
    }
}
