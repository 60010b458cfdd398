// Centred text on the StickC LCD
//
// Works on any Rgb565 draw target; the board hands in the mipidsi
// display. Each paint clears the panel and draws the text in the
// middle, so callers should only paint when the text changed.

use core::fmt::Debug;

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb565,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const FOREGROUND: Rgb565 = Rgb565::WHITE;

pub struct TextScreen<D> {
    lcd: D,
}

impl<D> TextScreen<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    pub fn new(mut lcd: D) -> Self {
        if let Err(e) = lcd.clear(BACKGROUND) {
            log::warn!("lcd: clear failed: {:?}", e);
        }
        Self { lcd }
    }

    pub fn show(&mut self, text: &str) {
        let center = self.lcd.bounding_box().center();
        let char_style = MonoTextStyle::new(&FONT_10X20, FOREGROUND);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let drawn = self.lcd.clear(BACKGROUND).and_then(|_| {
            Text::with_text_style(text, center, char_style, text_style)
                .draw(&mut self.lcd)
                .map(|_| ())
        });
        if let Err(e) = drawn {
            log::warn!("lcd: paint {:?} failed: {:?}", text, e);
        }
    }
}
