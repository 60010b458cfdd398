// Wire-loop counter entry point (M5StickC Plus)
//
// Boot: timer -> board -> reset button IRQ -> first paint -> loop
// Loop: drain jobs (Step, Reset, Refresh) -> idle -> wake flags to jobs
//
// Step runs every 20ms: contact sample, margin-windowed count, beep and
// LED flash on an accepted contact, count line to both sinks. Refresh
// repaints the count every 512ms if it changed. Button A raises a
// Reset that zeroes the count and repaints "0" at once. Only the main
// loop touches the counter and the LCD.

#![no_std]
#![no_main]

use core::cell::RefCell;

use critical_section::Mutex;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Event, Input, Io};
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;
use log::{debug, error, info, warn};

use iraira::board::StickC;
use iraira::drivers::beeper::Beeper;
use iraira::drivers::button::DigitalInput;
use iraira::drivers::lcd::TextScreen;
use iraira::drivers::led::ActiveLow;
use iraira::drivers::serial::{ConsoleSink, UartSink, UartTx};
use iraira::kernel::wake::{self, signal_button, try_wake};
use iraira::kernel::{Job, Scheduler, tick};
use iraira_core::{Millis, Telemetry};
use iraira_core::apps::WireLoop;
use iraira_core::config::{BEEP, DISPLAY_REFRESH_MS, LOOP_PERIOD_MS};

esp_bootloader_esp_idf::esp_app_desc!();

// the margin window already rejects bounce on the wire
const CONTACT_SETTLE_MS: Millis = 0;

static RESET_BUTTON: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority1)]
fn gpio_handler() {
    critical_section::with(|cs| {
        if let Some(btn) = RESET_BUTTON.borrow_ref_mut(cs).as_mut() {
            if btn.is_interrupt_set() {
                btn.clear_interrupt();
                signal_button();
            }
        }
    });
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let mut io = Io::new(unsafe { peripherals.IO_MUX.clone_unchecked() });
    io.set_interrupt_handler(gpio_handler);

    let board = StickC::init(peripherals).expect("stickc bring-up failed");
    info!("hardware initialized.");

    let mut reset_button = board.reset_button;
    critical_section::with(|cs| {
        reset_button.listen(Event::FallingEdge);
        RESET_BUTTON.borrow_ref_mut(cs).replace(reset_button);
    });

    let mut contact = DigitalInput::new(board.contact, true, CONTACT_SETTLE_MS);
    let mut beeper = Beeper::new(board.buzzer, BEEP);
    let mut screen = TextScreen::new(board.lcd);
    let telemetry = Telemetry::new(ConsoleSink, UartSink::new(UartTx::new(board.uart)));
    let mut game = WireLoop::new(ActiveLow(board.led), BEEP, telemetry);

    if let Some(text) = game.refresh() {
        screen.show(text);
    }

    let mut sched = Scheduler::new();
    if let Err(e) = sched.every(Job::Refresh, DISPLAY_REFRESH_MS, wake::uptime_ms()) {
        error!("sched: {}", e);
    }
    tick::start(PeriodicTimer::new(timg0.timer0), LOOP_PERIOD_MS);
    info!("kernel ready.");

    loop {
        // high first (Step, Reset), Refresh last
        while let Some(job) = sched.pop() {
            match job {
                Job::Step => {
                    let now = wake::uptime_ms();
                    let closed = contact.poll(now);
                    let step = game.step(closed, now);
                    beeper.set(step.beeping);
                    if let Some(n) = step.accepted {
                        debug!("contact #{} at {}ms", n, now);
                    }
                }
                Job::Reset => {
                    let text = game.reset();
                    screen.show(text);
                }
                Job::Refresh => {
                    if let Some(text) = game.refresh() {
                        screen.show(text);
                    }
                }
            }
        }

        wake::wait_for_interrupt();

        let Some(flags) = try_wake() else {
            continue;
        };
        if flags.button {
            if let Err(e) = sched.push_unique(Job::Reset) {
                warn!("sched: {}", e);
            }
        }
        if flags.timer {
            if let Err(e) = sched.push_unique(Job::Step) {
                warn!("sched: {}", e);
            }
            sched.on_tick(wake::uptime_ms());
        }
    }
}
