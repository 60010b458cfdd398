// Per-variant loop state.
//
// Each controller's globals live in one struct owned by the firmware's
// main loop; step() is one loop iteration. Hardware reads happen in the
// firmware and arrive here as plain values.

pub mod buzzer;
pub mod pad;
pub mod wire_loop;

pub use buzzer::Buzzer;
pub use pad::{AnalogPad, PadFrame};
pub use wire_loop::{WireLoop, WireStep};
