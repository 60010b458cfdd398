// Peripheral drivers: thin adapters between esp-hal types and the
// iraira-core state machines.
//
// Board wiring lives in board/; these only know the peripheral kind.

pub mod analog;
pub mod beeper;
pub mod button;
pub mod lcd;
pub mod led;
pub mod parallel;
pub mod serial;
