// Buzzer entry point (M5StickC Plus)
//
// Polls the contact every 2ms; the tone sounds while it is closed and
// for one tone length after it opens. The LED follows the tone.

#![no_std]
#![no_main]

use embedded_hal::digital::{OutputPin, PinState};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;
use log::{info, warn};

use iraira::board::StickC;
use iraira::drivers::beeper::Beeper;
use iraira::drivers::button::DigitalInput;
use iraira::drivers::lcd::TextScreen;
use iraira::drivers::led::ActiveLow;
use iraira::kernel::wake::{self, try_wake};
use iraira::kernel::{Job, Scheduler, tick};
use iraira_core::apps::Buzzer;
use iraira_core::config::{BEEP, BUZZER_LOOP_MS, DEBOUNCE_MS};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let board = StickC::init(peripherals).expect("stickc bring-up failed");
    info!("hardware initialized.");

    let mut contact = DigitalInput::new(board.contact, true, DEBOUNCE_MS);
    let mut beeper = Beeper::new(board.buzzer, BEEP);
    let mut led = ActiveLow(board.led);
    let mut buzzer = Buzzer::new(BEEP);

    // nothing to show; blank the panel once
    let _screen = TextScreen::new(board.lcd);

    let mut sched = Scheduler::new();
    tick::start(PeriodicTimer::new(timg0.timer0), BUZZER_LOOP_MS);
    info!("kernel ready.");

    loop {
        while let Some(job) = sched.pop() {
            if job != Job::Step {
                continue;
            }
            let now = wake::uptime_ms();
            let sounding = buzzer.step(contact.poll(now), now);
            if sounding != beeper.is_on() {
                log::debug!("buzzer {} at {}ms", if sounding { "on" } else { "off" }, now);
            }
            beeper.set(sounding);
            let _ = led.set_state(PinState::from(sounding));
        }

        wake::wait_for_interrupt();

        let Some(flags) = try_wake() else {
            continue;
        };
        if flags.timer {
            if let Err(e) = sched.push_unique(Job::Step) {
                warn!("sched: {}", e);
            }
        }
    }
}
