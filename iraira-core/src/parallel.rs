//! 3-bit parallel level code.
//!
//! The Atom hands its quantized level to the game host over three GPIO
//! lines. Levels up to +/-3 fit in 0..=7 with 4 as the neutral point:
//!
//! | level | -3 | -2 | -1 | 0 | +1 | +2 | +3 |
//! |-------|----|----|----|---|----|----|----|
//! | code  |  0 |  1 |  2 | 4 |  5 |  6 |  7 |
//!
//! Code 3 is never sent; the host reads it as neutral too.

use crate::quantize::{Level, Polarity};

pub const BITS: usize = 3;
pub const MAX_MAGNITUDE: u8 = 3;
const NEUTRAL_CODE: u8 = 4;

pub fn encode(level: Level) -> u8 {
    let m = level.magnitude.min(MAX_MAGNITUDE);
    match level.polarity {
        Polarity::Neutral => NEUTRAL_CODE,
        Polarity::Positive => NEUTRAL_CODE + m,
        Polarity::Negative => NEUTRAL_CODE - 1 - m,
    }
}

/// Per-line levels, least significant bit first.
pub fn lines(code: u8) -> [bool; BITS] {
    core::array::from_fn(|bit| code & (1 << bit) != 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Neutral,
    Up,
    Down,
}

/// What the host makes of a code: a direction and a volume in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub direction: Direction,
    pub magnitude: f32,
}

pub fn decode(code: u8) -> Reading {
    let v = (code & 0b111) as i8 - NEUTRAL_CODE as i8;
    if v > 0 {
        Reading {
            direction: Direction::Up,
            magnitude: v as f32 / MAX_MAGNITUDE as f32,
        }
    } else if v < -1 {
        Reading {
            direction: Direction::Down,
            magnitude: (-v - 1) as f32 / MAX_MAGNITUDE as f32,
        }
    } else {
        Reading {
            direction: Direction::Neutral,
            magnitude: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table() {
        let codes: Vec<u8> = [
            Level::negative(3),
            Level::negative(2),
            Level::negative(1),
            Level::NEUTRAL,
            Level::positive(1),
            Level::positive(2),
            Level::positive(3),
        ]
        .into_iter()
        .map(encode)
        .collect();
        assert_eq!(codes, [0, 1, 2, 4, 5, 6, 7]);
    }

    #[test]
    fn magnitudes_beyond_three_saturate() {
        assert_eq!(encode(Level::positive(5)), 7);
        assert_eq!(encode(Level::negative(5)), 0);
    }

    #[test]
    fn host_reads_back_direction_and_volume() {
        for m in 1..=3u8 {
            let up = decode(encode(Level::positive(m)));
            assert_eq!(up.direction, Direction::Up);
            assert_eq!(up.magnitude, m as f32 / 3.0);

            let down = decode(encode(Level::negative(m)));
            assert_eq!(down.direction, Direction::Down);
            assert_eq!(down.magnitude, m as f32 / 3.0);
        }
        assert_eq!(decode(4).direction, Direction::Neutral);
        assert_eq!(decode(3).direction, Direction::Neutral);
    }

    #[test]
    fn line_levels() {
        assert_eq!(lines(0), [false, false, false]);
        assert_eq!(lines(5), [true, false, true]);
        assert_eq!(lines(6), [false, true, true]);
    }
}
