// Firmware for the iraira-bou controllers (ESP32: M5Atom Matrix, M5StickC Plus)
//
// Game logic lives in iraira-core and is host tested there; this crate
// only brings up the boards and moves samples and outputs between the
// pins and the core state machines.

#![no_std]

pub mod board;
pub mod drivers;
pub mod kernel;
