// 5x5 digit glyphs for the Atom's LED matrix
//
// Each glyph is five rows of five bits, MSB = leftmost column. The
// frame for a level lights the digit of its magnitude in the colour of
// its polarity. Pixel order is row-major from the top-left LED, which
// is how the SK6812 chain is wired.

use crate::quantize::{Level, Polarity};

pub const SIDE: usize = 5;
pub const PIXELS: usize = SIDE * SIDE;

#[rustfmt::skip]
const DIGITS: [[u8; SIDE]; 6] = [
    [0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b01110],
    [0b11110, 0b00001, 0b01110, 0b10000, 0b11111],
    [0b11110, 0b00001, 0b00110, 0b00001, 0b11110],
    [0b10010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b11110],
];

pub const MAX_DIGIT: u8 = (DIGITS.len() - 1) as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// kept dim; 25 LEDs at full white brown out the Atom's regulator
pub const NEUTRAL_COLOR: Rgb = Rgb::new(0, 40, 0);
pub const POSITIVE_COLOR: Rgb = Rgb::new(40, 0, 0);
pub const NEGATIVE_COLOR: Rgb = Rgb::new(0, 0, 40);

pub const fn color(polarity: Polarity) -> Rgb {
    match polarity {
        Polarity::Neutral => NEUTRAL_COLOR,
        Polarity::Positive => POSITIVE_COLOR,
        Polarity::Negative => NEGATIVE_COLOR,
    }
}

pub fn is_set(digit: u8, x: usize, y: usize) -> bool {
    let rows = &DIGITS[digit.min(MAX_DIGIT) as usize];
    rows[y] & (1 << (SIDE - 1 - x)) != 0
}

pub fn frame(level: Level) -> [Rgb; PIXELS] {
    let on = color(level.polarity);
    core::array::from_fn(|i| {
        if is_set(level.magnitude, i % SIDE, i / SIDE) {
            on
        } else {
            Rgb::OFF
        }
    })
}

/// Whole matrix in one colour (boot splash).
pub const fn fill(color: Rgb) -> [Rgb; PIXELS] {
    [color; PIXELS]
}
