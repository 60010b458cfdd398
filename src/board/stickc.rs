//! M5StickC Plus running the wire loop or the buzzer.

use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::{
    Blocking,
    delay::Delay,
    gpio::{DriveMode, Input, InputConfig, Level, Output, OutputConfig, Pull},
    i2c::{self, master::I2c},
    ledc::{
        HighSpeed, Ledc,
        channel::{self, Channel, ChannelIFace},
        timer::{self, Timer, TimerIFace},
    },
    peripherals::Peripherals,
    spi,
    time::Rate,
    uart::Uart,
};
use iraira_core::config::BEEP_FREQ_HZ;
use log::info;
use mipidsi::{
    Builder,
    interface::SpiInterface,
    models::ST7789,
    options::{ColorInversion, Orientation, Rotation},
};
use static_cell::StaticCell;

use super::{BoardError, WirelessUart, pins, pmu, wireless_config};

// Visible 135x240 window inside the controller's 240x320 RAM
pub const LCD_WIDTH: u16 = 135;
pub const LCD_HEIGHT: u16 = 240;
const LCD_OFFSET_X: u16 = 52;
const LCD_OFFSET_Y: u16 = 40;
pub const LCD_SPI_MHZ: u32 = 40;

pub type LcdSpi = ExclusiveDevice<spi::master::Spi<'static, Blocking>, Output<'static>, NoDelay>;
pub type Lcd = mipidsi::Display<SpiInterface<'static, LcdSpi, Output<'static>>, ST7789, Output<'static>>;
pub type BuzzerChannel = Channel<'static, HighSpeed>;

// both must outlive the drivers that borrow them
static LCD_BUF: StaticCell<[u8; 512]> = StaticCell::new();
static BUZZER_TIMER: StaticCell<Timer<'static, HighSpeed>> = StaticCell::new();

pub struct StickC {
    /// Wire loop contact, low while touching.
    pub contact: Input<'static>,
    /// Button A; the binary arms its interrupt.
    pub reset_button: Input<'static>,
    /// Indicator LED, active low.
    pub led: Output<'static>,
    /// LEDC channel on the buzzer, silent until a duty is set.
    pub buzzer: BuzzerChannel,
    pub lcd: Lcd,
    pub uart: WirelessUart,
}

impl StickC {
    pub fn init(p: Peripherals) -> Result<Self, BoardError> {
        let contact = Input::new(p.GPIO26, InputConfig::default().with_pull(Pull::Up));
        // external pull-up on the button
        let reset_button = Input::new(p.GPIO37, InputConfig::default().with_pull(Pull::None));
        let led = Output::new(p.GPIO10, Level::High, OutputConfig::default());

        // LCD rails first, the ST7789 ignores commands while unpowered
        let mut i2c = I2c::new(p.I2C0, i2c::master::Config::default())
            .map_err(|_| BoardError::I2c)?
            .with_sda(p.GPIO21)
            .with_scl(p.GPIO22);
        pmu::enable_lcd_power(&mut i2c).map_err(|e| {
            log::error!("pmu: {:?}", e);
            BoardError::Pmu
        })?;

        let spi_cfg = spi::master::Config::default().with_frequency(Rate::from_mhz(LCD_SPI_MHZ));
        let spi_bus = spi::master::Spi::new(p.SPI2, spi_cfg)
            .map_err(|_| BoardError::Spi)?
            .with_sck(p.GPIO13)
            .with_mosi(p.GPIO15);
        let cs = Output::new(p.GPIO5, Level::High, OutputConfig::default());
        let spi_dev = ExclusiveDevice::new_no_delay(spi_bus, cs).map_err(|_| BoardError::Spi)?;

        let dc = Output::new(p.GPIO23, Level::Low, OutputConfig::default());
        let rst = Output::new(p.GPIO18, Level::High, OutputConfig::default());
        let di = SpiInterface::new(spi_dev, dc, LCD_BUF.init([0; 512]));

        let lcd = Builder::new(ST7789, di)
            .display_size(LCD_WIDTH, LCD_HEIGHT)
            .display_offset(LCD_OFFSET_X, LCD_OFFSET_Y)
            .invert_colors(ColorInversion::Inverted)
            .orientation(Orientation::new().rotate(Rotation::Deg90))
            .reset_pin(rst)
            .init(&mut Delay::new())
            .map_err(|_| BoardError::Display)?;

        let ledc = Ledc::new(p.LEDC);
        let mut hstimer = ledc.timer::<HighSpeed>(timer::Number::Timer0);
        hstimer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty8Bit,
                clock_source: timer::HSClockSource::APBClk,
                frequency: Rate::from_hz(BEEP_FREQ_HZ),
            })
            .map_err(|_| BoardError::Pwm)?;
        let hstimer = BUZZER_TIMER.init(hstimer);

        let mut buzzer = ledc.channel(channel::Number::Channel0, p.GPIO2);
        buzzer
            .configure(channel::config::Config {
                timer: &*hstimer,
                duty_pct: 0,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(|_| BoardError::Pwm)?;

        let uart = Uart::new(p.UART1, wireless_config())
            .map_err(|_| BoardError::Uart)?
            .with_tx(p.GPIO32)
            .with_rx(p.GPIO33);

        info!(
            "stickc: contact GPIO{} reset GPIO{} buzzer GPIO{} led GPIO{}",
            pins::stickc::CONTACT,
            pins::stickc::RESET_BUTTON,
            pins::stickc::BUZZER,
            pins::stickc::LED
        );
        info!(
            "stickc: lcd {}x{} @{}MHz, uart tx GPIO{}",
            LCD_WIDTH,
            LCD_HEIGHT,
            LCD_SPI_MHZ,
            pins::stickc::UART_TX
        );

        Ok(StickC {
            contact,
            reset_button,
            led,
            buzzer,
            lcd,
            uart,
        })
    }
}
