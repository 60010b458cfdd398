//! M5Atom Matrix (analog pad)
//!
//! GPIO |     Function      |      Notes
//! -----+-------------------+----------------------------------
//! 19   | Parallel bit 0    | LSB of the 3-bit level code
//! 22   | Indicator LED     | Active HIGH, external LED on the header
//! 23   | Parallel bit 1    |
//! 25   | ADC2 - Analog in  | Slider/potentiometer wiper, 11dB
//! 26   | UART1 TX          | Grove, to the Bluetooth serial bridge
//! 27   | RMT - Matrix      | 25x SK6812, GRB
//! 32   | UART1 RX          | Grove, unused by the firmware
//! 33   | Parallel bit 2    | MSB of the 3-bit level code
//! 39   | Digital - Button  | Screen button, active LOW, input-only,
//!      |                   | external pull-up
//!
//! M5StickC Plus (wire loop, buzzer)
//!
//! GPIO |     Function      |      Notes
//! -----+-------------------+----------------------------------
//!  2   | LEDC - Buzzer     | Passive buzzer
//!  5   | LCD CS            | ST7789 135x240
//! 10   | Indicator LED     | Active LOW
//! 13   | SPI SCLK          | LCD clock
//! 15   | SPI MOSI          | LCD data (write-only)
//! 18   | LCD RST           | Reset (active low)
//! 21   | I2C SDA           | AXP192 PMU (LCD backlight and logic rail)
//! 22   | I2C SCL           | AXP192 PMU
//! 23   | LCD DC            | Data/Command select
//! 26   | Digital - Contact | Wire loop, active LOW, internal pull-up
//! 32   | UART1 TX          | Grove, to the Bluetooth serial bridge
//! 33   | UART1 RX          | Grove, unused by the firmware
//! 37   | Digital - Reset   | Button A, active LOW, falling-edge IRQ

pub mod atom {
    // ----- Analog pad -----
    pub const ANALOG_IN: u8 = 25;
    pub const BUTTON: u8 = 39;
    pub const LED: u8 = 22;

    // ----- Outputs -----
    pub const MATRIX: u8 = 27;
    pub const PARALLEL: [u8; 3] = [19, 23, 33]; // bit 0..2

    // ----- Wireless bridge -----
    pub const UART_TX: u8 = 26;
    pub const UART_RX: u8 = 32;
}

pub mod stickc {
    // ----- Inputs -----
    pub const CONTACT: u8 = 26;
    pub const RESET_BUTTON: u8 = 37;

    // ----- Outputs -----
    pub const BUZZER: u8 = 2;
    pub const LED: u8 = 10; // active low

    // ----- LCD (SPI) -----
    pub const LCD_MOSI: u8 = 15;
    pub const LCD_SCLK: u8 = 13;
    pub const LCD_CS: u8 = 5;
    pub const LCD_DC: u8 = 23;
    pub const LCD_RST: u8 = 18;

    // ----- PMU (I2C) -----
    pub const PMU_SDA: u8 = 21;
    pub const PMU_SCL: u8 = 22;

    // ----- Wireless bridge -----
    pub const UART_TX: u8 = 32;
    pub const UART_RX: u8 = 33;
}
