// Analog pad entry point (M5Atom Matrix)
//
// Boot: timer -> board -> matrix splash -> loop
// Loop: timer wake -> Step job -> sample, quantize, show, emit -> idle
//
// Every 20ms the wiper is sampled and normalized to the console and the
// Bluetooth bridge, the level goes to the 5x5 matrix and to the 3-bit
// parallel port, and the screen button reports press/release/hold.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;
use esp_hal_smartled::{SmartLedsAdapter, smart_led_buffer};
use log::{debug, info, warn};

use iraira::board::Atom;
use iraira::drivers::analog::Sampler;
use iraira::drivers::button::DigitalInput;
use iraira::drivers::parallel::ParallelPort;
use iraira::drivers::serial::{ConsoleSink, UartSink, UartTx};
use iraira::kernel::wake::{self, try_wake};
use iraira::kernel::{Job, Scheduler, tick};
use iraira_core::Telemetry;
use iraira_core::apps::AnalogPad;
use iraira_core::config::{BOOT_PULSE_TICKS, DEBOUNCE_MS, LOOP_PERIOD_MS};
use iraira_core::glyph::{self, PIXELS};
use iraira_core::matrix::Matrix;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let board = Atom::init(peripherals).expect("atom bring-up failed");
    info!("hardware initialized.");

    let mut rmt_buffer = smart_led_buffer!(PIXELS);
    let mut matrix = Matrix::new(SmartLedsAdapter::new(
        board.matrix.rmt.channel0,
        board.matrix.pin,
        &mut rmt_buffer,
    ));
    // splash stays up for as long as the boot flash
    matrix.fill(glyph::NEUTRAL_COLOR);
    let mut splash_ticks = BOOT_PULSE_TICKS;

    let mut sampler = Sampler::new(board.pad.adc, board.pad.analog);
    let mut button = DigitalInput::new(board.pad.button, true, DEBOUNCE_MS);
    let mut port = ParallelPort::new(board.parallel);
    let telemetry = Telemetry::new(ConsoleSink, UartSink::new(UartTx::new(board.uart)));
    let mut pad = AnalogPad::new(board.pad.led, telemetry);

    let mut sched = Scheduler::new();
    tick::start(PeriodicTimer::new(timg0.timer0), LOOP_PERIOD_MS);
    info!("kernel ready.");

    loop {
        while let Some(job) = sched.pop() {
            match job {
                Job::Step => {
                    let now = wake::uptime_ms();
                    let raw = sampler.read();
                    let pressed = button.poll(now);
                    let frame = pad.step(raw, pressed, now);

                    if splash_ticks > 0 {
                        splash_ticks -= 1;
                    } else {
                        matrix.show(frame.level);
                    }
                    port.write(frame.code);

                    if let Some(ev) = frame.event {
                        debug!("button {} at {}ms (raw {})", ev, now, raw);
                    }
                }
                // no reset input or display on this board
                Job::Reset | Job::Refresh => {}
            }
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
