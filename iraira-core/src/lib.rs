// Hardware-independent logic for the iraira-bou controllers.
//
// Everything here is pure state advanced once per loop tick by the
// firmware; time comes in as millisecond timestamps, pins come in
// through embedded-hal traits, so the whole crate runs under the host
// test harness.

#![cfg_attr(not(test), no_std)]

pub mod apps;
pub mod beep;
pub mod config;
pub mod counter;
pub mod debounce;
pub mod glyph;
pub mod matrix;
pub mod parallel;
pub mod press;
pub mod pulse;
pub mod quantize;
pub mod sched;
pub mod stack_fmt;
pub mod telemetry;
pub mod view;

/// Milliseconds since boot.
pub type Millis = u64;

pub use config::{ConfigError, QuantizerConfig};
pub use press::{PressDetector, PressEvent, PressState};
pub use pulse::LightPulse;
pub use quantize::{Level, Polarity};
pub use sched::{Job, Scheduler};
pub use telemetry::{Sink, SinkError, Telemetry};
