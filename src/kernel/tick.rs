// Periodic loop tick
//
// TIMG0 timer0 fires every loop period; the handler only acknowledges
// the interrupt and raises the timer wake flag.

use core::cell::RefCell;

use critical_section::Mutex;
use esp_hal::Blocking;
use esp_hal::time::Duration;
use esp_hal::timer::PeriodicTimer;
use iraira_core::Millis;

use super::wake::signal_timer;

static TICKER: Mutex<RefCell<Option<PeriodicTimer<'static, Blocking>>>> =
    Mutex::new(RefCell::new(None));

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority1)]
fn ticker_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = TICKER.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }
    });
    signal_timer();
}

/// Hand the timer over to the ISR and start it.
pub fn start(mut timer: PeriodicTimer<'static, Blocking>, period_ms: Millis) {
    critical_section::with(|cs| {
        timer.set_interrupt_handler(ticker_handler);
        if let Err(e) = timer.start(Duration::from_millis(period_ms)) {
            log::error!("tick: timer start failed: {:?}", e);
        }
        timer.listen();
        TICKER.borrow_ref_mut(cs).replace(timer);
    });
    log::info!("tick: {}ms", period_ms);
}
