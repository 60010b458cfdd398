// Compile-time configuration shared by every controller variant.
//
// Nothing here is runtime-configurable; the firmware picks the
// constants it needs and the quantizer validates its ranges in a
// const fn so a bad table fails the build instead of the device.

use core::fmt;

use crate::Millis;
use crate::beep::Tone;

// ----- ADC -----
pub const ADC_MIN: u16 = 0;
pub const ADC_MAX: u16 = 4095; // 12-bit

// ----- Quantizer -----
/// Fraction of the ADC span treated as the centre dead zone (each side).
pub const ZERO_VALUE_RANGE: f32 = 0.02;
/// Non-zero buckets per side rendered on the 5x5 matrix (digits 0..=5).
pub const MATRIX_RESOLUTION: u8 = 5;
/// Non-zero buckets per side on the 3-bit parallel port.
pub const PARALLEL_RESOLUTION: u8 = 3;

// ----- Timing -----
pub const LOOP_PERIOD_MS: Millis = 20;
pub const BUZZER_LOOP_MS: Millis = 2;
pub const DEBOUNCE_MS: Millis = 10;
pub const LONG_PRESS_MS: Millis = 1000;
/// Contact "invulnerability" window of the wire-loop counter.
pub const MARGIN_MS: Millis = 1000;
pub const DISPLAY_REFRESH_MS: Millis = 512;

// ----- Light pulse (in loop ticks, not wall time) -----
pub const BOOT_PULSE_TICKS: u16 = 50;
pub const EVENT_PULSE_TICKS: u16 = 5;

// ----- Beeper -----
pub const BEEP_FREQ_HZ: u32 = 400;
pub const BEEP_DURATION_MS: Millis = 100;
/// Duty cycle in percent; 50 is the loudest a square wave gets.
pub const BEEP_VOLUME_PCT: u8 = 50;

pub const BEEP: Tone = Tone {
    freq_hz: BEEP_FREQ_HZ,
    duration_ms: BEEP_DURATION_MS,
    volume_pct: BEEP_VOLUME_PCT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `max` is not above `min`.
    EmptyRange,
    ZeroResolution,
    /// Dead zone is negative or swallows the whole span.
    DeadZoneTooWide,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRange => write!(f, "adc max must exceed min"),
            ConfigError::ZeroResolution => write!(f, "resolution must be at least 1"),
            ConfigError::DeadZoneTooWide => write!(f, "dead zone must be within [0, 0.5)"),
        }
    }
}

/// Range and bucketing parameters of a [`crate::quantize`] pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizerConfig {
    pub min: u16,
    pub max: u16,
    pub zero_range: f32,
    pub resolution: u8,
}

impl QuantizerConfig {
    pub const fn new(
        min: u16,
        max: u16,
        zero_range: f32,
        resolution: u8,
    ) -> Result<Self, ConfigError> {
        if max <= min {
            return Err(ConfigError::EmptyRange);
        }
        if resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if !(zero_range >= 0.0 && zero_range < 0.5) {
            return Err(ConfigError::DeadZoneTooWide);
        }
        Ok(Self {
            min,
            max,
            zero_range,
            resolution,
        })
    }

    pub const fn span(&self) -> u16 {
        self.max - self.min
    }
}

const fn unwrap_config(cfg: Result<QuantizerConfig, ConfigError>) -> QuantizerConfig {
    match cfg {
        Ok(cfg) => cfg,
        Err(_) => panic!("invalid quantizer config"),
    }
}

pub const MATRIX_LEVELS: QuantizerConfig = unwrap_config(QuantizerConfig::new(
    ADC_MIN,
    ADC_MAX,
    ZERO_VALUE_RANGE,
    MATRIX_RESOLUTION,
));

pub const PARALLEL_LEVELS: QuantizerConfig = unwrap_config(QuantizerConfig::new(
    ADC_MIN,
    ADC_MAX,
    ZERO_VALUE_RANGE,
    PARALLEL_RESOLUTION,
));
