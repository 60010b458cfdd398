//! Line-oriented telemetry.
//!
//! Every tick the controller writes the normalized sample as `%.3f`,
//! and discrete events as their own single-line codes, to two
//! independent sinks: the local console and the wireless serial link.
//!
//! Delivery is fire-and-forget. A sink that errors loses that line and
//! nothing else: the other sink still gets it, nothing is retried, and
//! the loop never waits. Failures are counted per sink and logged only
//! when a sink changes between healthy and failing.

use core::fmt;

use crate::press::PressEvent;
use crate::stack_fmt::StackFmt;

/// Longest line we emit: a u32 count plus newline fits with room to spare.
pub const LINE_CAP: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// Peer not connected; the line was discarded.
    Disconnected,
    /// Transmit buffer full.
    Overflow,
    /// Transport-level failure.
    Bus,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Disconnected => write!(f, "not connected"),
            SinkError::Overflow => write!(f, "tx buffer full"),
            SinkError::Bus => write!(f, "bus error"),
        }
    }
}

/// A newline-delimited text output.
pub trait Sink {
    /// Write one complete line (newline included). Must not block on the
    /// peer.
    fn send(&mut self, line: &str) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn send(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).send(line)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SinkStats {
    pub sent: u32,
    pub dropped: u32,
    failing: bool,
}

impl SinkStats {
    fn record(&mut self, name: &str, result: Result<(), SinkError>) {
        match result {
            Ok(()) => {
                self.sent = self.sent.wrapping_add(1);
                if self.failing {
                    self.failing = false;
                    log::info!("telemetry: {} sink recovered", name);
                }
            }
            Err(e) => {
                self.dropped = self.dropped.wrapping_add(1);
                if !self.failing {
                    self.failing = true;
                    log::warn!("telemetry: {} sink {}, dropping lines", name, e);
                }
            }
        }
    }
}

/// Non-blocking byte transmitter, e.g. a UART TX FIFO.
pub trait ByteTx {
    /// Queue as many bytes as fit right now; returns how many were taken.
    fn try_write(&mut self, bytes: &[u8]) -> Result<usize, SinkError>;
}

/// Line sink over a [`ByteTx`] that never interleaves two lines.
///
/// When the transmitter takes only part of a line, the rest is kept and
/// pushed out ahead of anything else. New lines are dropped with
/// [`SinkError::Overflow`] until that tail is gone, so the peer only
/// ever sees whole lines.
pub struct LineTx<T> {
    tx: T,
    tail: [u8; LINE_CAP],
    start: usize,
    end: usize,
}

impl<T: ByteTx> LineTx<T> {
    pub const fn new(tx: T) -> Self {
        Self {
            tx,
            tail: [0; LINE_CAP],
            start: 0,
            end: 0,
        }
    }

    /// Bytes of an earlier line still waiting for the transmitter.
    pub fn pending(&self) -> usize {
        self.end - self.start
    }

    fn drain(&mut self) -> Result<(), SinkError> {
        while self.start < self.end {
            let n = self.tx.try_write(&self.tail[self.start..self.end])?;
            if n == 0 {
                break;
            }
            self.start += n;
        }
        Ok(())
    }
}

impl<T: ByteTx> Sink for LineTx<T> {
    fn send(&mut self, line: &str) -> Result<(), SinkError> {
        self.drain()?;
        if self.pending() > 0 {
            return Err(SinkError::Overflow);
        }

        let bytes = line.as_bytes();
        if bytes.len() > LINE_CAP {
            return Err(SinkError::Overflow);
        }
        let n = self.tx.try_write(bytes)?;
        let rest = &bytes[n.min(bytes.len())..];
        self.tail[..rest.len()].copy_from_slice(rest);
        self.start = 0;
        self.end = rest.len();
        Ok(())
    }
}

pub struct Telemetry<C, W> {
    console: C,
    wireless: W,
    console_stats: SinkStats,
    wireless_stats: SinkStats,
}

impl<C: Sink, W: Sink> Telemetry<C, W> {
    pub fn new(console: C, wireless: W) -> Self {
        Self {
            console,
            wireless,
            console_stats: SinkStats::default(),
            wireless_stats: SinkStats::default(),
        }
    }

    /// Normalized sample, three decimals.
    pub fn value(&mut self, normalized: f32) {
        self.line(format_args!("{:.3}\n", normalized));
    }

    pub fn event(&mut self, event: PressEvent) {
        self.line(format_args!("{}\n", event.code()));
    }

    pub fn count(&mut self, count: u32) {
        self.line(format_args!("{}\n", count));
    }

    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        let line = StackFmt::<LINE_CAP>::from_args(args);
        let line = line.as_str();
        self.console_stats.record("console", self.console.send(line));
        self.wireless_stats.record("wireless", self.wireless.send(line));
    }

    pub fn console_stats(&self) -> SinkStats {
        self.console_stats
    }

    pub fn wireless_stats(&self) -> SinkStats {
        self.wireless_stats
    }

    pub fn sinks_mut(&mut self) -> (&mut C, &mut W) {
        (&mut self.console, &mut self.wireless)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Collects lines; can be switched to fail.
    #[derive(Default)]
    pub(crate) struct Capture {
        pub(crate) text: String,
        pub(crate) down: Option<SinkError>,
    }

    impl Capture {
        pub(crate) fn lines(&self) -> Vec<&str> {
            self.text.lines().collect()
        }
    }

    impl Sink for Capture {
        fn send(&mut self, line: &str) -> Result<(), SinkError> {
            if let Some(e) = self.down {
                return Err(e);
            }
            self.text.push_str(line);
            Ok(())
        }
    }

    #[test]
    fn value_has_three_decimals_and_newline() {
        let mut t = Telemetry::new(Capture::default(), Capture::default());
        t.value(0.5);
        t.value(1.0 / 3.0);
        t.value(1.0);
        let (console, wireless) = t.sinks_mut();
        assert_eq!(console.text, "0.500\n0.333\n1.000\n");
        assert_eq!(wireless.text, console.text);
    }

    #[test]
    fn events_and_counts_are_single_lines() {
        let mut t = Telemetry::new(Capture::default(), Capture::default());
        t.event(PressEvent::Press);
        t.event(PressEvent::Hold);
        t.event(PressEvent::Release);
        t.count(42);
        let (console, _) = t.sinks_mut();
        assert_eq!(console.lines(), ["p", "l", "r", "42"]);
    }

    #[test]
    fn a_dead_sink_does_not_starve_the_other() {
        let wireless = Capture {
            down: Some(SinkError::Disconnected),
            ..Default::default()
        };
        let mut t = Telemetry::new(Capture::default(), wireless);
        t.value(0.25);
        t.event(PressEvent::Press);

        assert_eq!(t.console_stats().sent, 2);
        assert_eq!(t.wireless_stats().dropped, 2);

        let (console, wireless) = t.sinks_mut();
        assert_eq!(console.lines(), ["0.250", "p"]);
        wireless.down = None;
        t.count(1);
        assert_eq!(t.wireless_stats().sent, 1);
        let (_, wireless) = t.sinks_mut();
        assert_eq!(wireless.lines(), ["1"]);
    }

    #[test]
    fn failing_console_does_not_block_wireless() {
        let console = Capture {
            down: Some(SinkError::Overflow),
            ..Default::default()
        };
        let mut t = Telemetry::new(console, Capture::default());
        t.count(7);
        assert_eq!(t.console_stats().dropped, 1);
        let (_, wireless) = t.sinks_mut();
        assert_eq!(wireless.text, "7\n");
    }

    /// FIFO that takes at most `room` bytes until drained by the test.
    struct Fifo {
        out: Vec<u8>,
        room: usize,
    }

    impl ByteTx for Fifo {
        fn try_write(&mut self, bytes: &[u8]) -> Result<usize, SinkError> {
            let n = bytes.len().min(self.room);
            self.out.extend_from_slice(&bytes[..n]);
            self.room -= n;
            Ok(n)
        }
    }

    #[test]
    fn short_write_is_finished_before_the_next_line() {
        let mut tx = LineTx::new(Fifo {
            out: Vec::new(),
            room: 3,
        });
        assert_eq!(tx.send("0.750\n"), Ok(()));
        assert_eq!(tx.pending(), 3);

        // still no room: the new line is dropped, nothing gets spliced in
        assert_eq!(tx.send("p\n"), Err(SinkError::Overflow));
        assert_eq!(tx.tx.out, b"0.7");

        tx.tx.room = 4;
        assert_eq!(tx.send("r\n"), Ok(()));
        assert_eq!(tx.pending(), 1);
        assert_eq!(tx.tx.out, b"0.750\nr");
        // "r" went out without its newline, so the next line waits again
        tx.tx.room = 64;
        assert_eq!(tx.send("1.000\n"), Ok(()));
        assert_eq!(tx.tx.out, b"0.750\nr\n1.000\n");
    }

    #[test]
    fn full_fifo_keeps_the_whole_line() {
        let mut tx = LineTx::new(Fifo {
            out: Vec::new(),
            room: 0,
        });
        assert_eq!(tx.send("42\n"), Ok(()));
        assert_eq!(tx.pending(), 3);
        tx.tx.room = 64;
        assert_eq!(tx.send("43\n"), Ok(()));
        assert_eq!(std::str::from_utf8(&tx.tx.out), Ok("42\n43\n"));
    }
}
