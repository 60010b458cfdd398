// Count text for the LCD
//
// Remembers what is currently on screen so the periodic refresh only
// repaints when the formatted count actually changed.

use core::fmt::Write;

use crate::stack_fmt::StackFmt;

const TEXT_CAP: usize = 12;

pub struct CounterView {
    shown: StackFmt<TEXT_CAP>,
    painted: bool,
}

impl CounterView {
    pub const fn new() -> Self {
        Self {
            shown: StackFmt::new(),
            painted: false,
        }
    }

    /// New text to paint, or `None` when the screen is already current.
    pub fn refresh(&mut self, count: u32) -> Option<&str> {
        let next = StackFmt::<TEXT_CAP>::from_args(format_args!("{}", count));
        if self.painted && self.shown.as_str() == next.as_str() {
            return None;
        }
        self.shown = next;
        self.painted = true;
        Some(self.shown.as_str())
    }

    /// Unconditional "0", used by the reset button.
    pub fn clear(&mut self) -> &str {
        self.shown.clear();
        let _ = self.shown.write_str("0");
        self.painted = true;
        self.shown.as_str()
    }

    pub fn shown(&self) -> &str {
        self.shown.as_str()
    }
}

impl Default for CounterView {
    fn default() -> Self {
        Self::new()
    }
}
