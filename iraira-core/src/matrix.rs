// 5x5 SK6812 matrix showing the quantized level
//
// Generic over the smart-leds writer so the RMT adapter and its pulse
// buffer stay owned by the binary. The writer picks the wire colour
// order (the SK6812 adapter takes GRB); frames are built as RGB8 and
// converted on the way out. Frames are only pushed when the level
// changes; a failed write is retried on the next tick.

use core::fmt::Debug;

use smart_leds::{RGB8, SmartLedsWrite};

use crate::glyph::{self, Rgb};
use crate::quantize::Level;

pub struct Matrix<W> {
    leds: W,
    shown: Option<Level>,
}

fn rgb8(c: Rgb) -> RGB8 {
    RGB8 {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

impl<W> Matrix<W>
where
    W: SmartLedsWrite,
    W::Error: Debug,
    RGB8: Into<W::Color>,
{
    pub fn new(leds: W) -> Self {
        Self { leds, shown: None }
    }

    pub fn show(&mut self, level: Level) {
        if self.shown == Some(level) {
            return;
        }
        let frame = glyph::frame(level);
        match self.leds.write(frame.iter().copied().map(rgb8)) {
            Ok(()) => self.shown = Some(level),
            Err(e) => {
                log::warn!("matrix: write failed: {:?}", e);
                self.shown = None;
            }
        }
    }

    /// Solid fill, used once at boot as a lamp test.
    pub fn fill(&mut self, color: Rgb) {
        let frame = glyph::fill(color);
        if let Err(e) = self.leds.write(frame.iter().copied().map(rgb8)) {
            log::warn!("matrix: write failed: {:?}", e);
        }
        self.shown = None;
    }

    pub fn leds_mut(&mut self) -> &mut W {
        &mut self.leds
    }
}
