// Wake flag signaling between ISRs and the main loop
//
// ISRs set atomic flags; the main loop consumes them via try_wake().
// Independent flags keep a button edge and a timer tick that land
// together from swallowing each other. Loads and clears happen inside
// one critical section so nothing set in between is lost.

use core::sync::atomic::{AtomicBool, Ordering};

use esp_hal::time::Instant;
use iraira_core::Millis;

static WAKE_BUTTON: AtomicBool = AtomicBool::new(false);
static WAKE_TIMER: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy)]
pub struct WakeFlags {
    pub button: bool,
    pub timer: bool,
}

fn take_wake_flags() -> Option<WakeFlags> {
    critical_section::with(|_| {
        let button = WAKE_BUTTON.swap(false, Ordering::Relaxed);
        let timer = WAKE_TIMER.swap(false, Ordering::Relaxed);

        if !button && !timer {
            return None;
        }
        Some(WakeFlags { button, timer })
    })
}

#[inline]
pub fn signal_button() {
    WAKE_BUTTON.store(true, Ordering::Release);
}

#[inline]
pub fn signal_timer() {
    WAKE_TIMER.store(true, Ordering::Release);
}

pub fn try_wake() -> Option<WakeFlags> {
    take_wake_flags()
}

/// Milliseconds since boot.
pub fn uptime_ms() -> Millis {
    Instant::now().duration_since_epoch().as_millis()
}

// Xtensa WAITI needs inline asm that stable does not have for this
// arch; the loop period is short enough that spinning costs nothing.
#[inline]
pub fn wait_for_interrupt() {
    core::hint::spin_loop();
}
