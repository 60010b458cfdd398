// AXP192 power management on the M5StickC Plus
//
// The LCD logic rail (LDO3) and backlight (LDO2) are both behind the
// PMU; nothing shows on the ST7789 until they are switched on.
// Register values follow the AXP192 datasheet.

use embedded_hal::i2c::I2c;

pub const AXP192_ADDR: u8 = 0x34;

const REG_POWER_OUT: u8 = 0x12;
const REG_LDO23_VOLTAGE: u8 = 0x28;

// LDO2 = LDO3 = 3.0V (0.1V steps from 1.8V, high nibble LDO2)
const LDO23_3V0: u8 = 0xCC;

// DCDC1 | LDO2 | LDO3 | EXTEN
const POWER_OUT_LCD: u8 = 0x4D;

fn read_reg<I: I2c>(i2c: &mut I, reg: u8) -> Result<u8, I::Error> {
    let mut buf = [0u8; 1];
    i2c.write_read(AXP192_ADDR, &[reg], &mut buf)?;
    Ok(buf[0])
}

fn write_reg<I: I2c>(i2c: &mut I, reg: u8, value: u8) -> Result<(), I::Error> {
    i2c.write(AXP192_ADDR, &[reg, value])
}

/// Power the LCD panel and its backlight. Other outputs are left as
/// the bootloader configured them.
pub fn enable_lcd_power<I: I2c>(i2c: &mut I) -> Result<(), I::Error> {
    write_reg(i2c, REG_LDO23_VOLTAGE, LDO23_3V0)?;
    let out = read_reg(i2c, REG_POWER_OUT)?;
    write_reg(i2c, REG_POWER_OUT, out | POWER_OUT_LCD)?;
    log::debug!("pmu: power out {:#04x} -> {:#04x}", out, out | POWER_OUT_LCD);
    Ok(())
}
