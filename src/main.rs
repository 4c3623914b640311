//! RelayLights firmware entry point.
//!
//! Single cooperative loop, no tasks beyond `main`:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  GpioBoard                         LogEventSink   SystemClock  │
//! │  (RelayPort + ButtonPort + Delay)  (EventSink)    (ClockPort)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │           LightController (pure logic)                 │    │
//! │  │  Debouncer · RotationScheduler · PatternEngine         │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver, Pull};
use log::info;

use relaylights::adapters::board::GpioBoard;
use relaylights::adapters::log_sink::LogEventSink;
use relaylights::adapters::time::SystemClock;
use relaylights::app::controller::LightController;
use relaylights::config::ControllerConfig;
use relaylights::drivers::relays::RelayBank;
use relaylights::pins;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RelayLights v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = ControllerConfig {
        // SAFETY: esp_random reads the hardware RNG register; no preconditions.
        rng_seed: u64::from(unsafe { esp_idf_svc::sys::esp_random() }),
        ..ControllerConfig::default()
    };
    let mut controller = LightController::new(config)?;

    // ── 3. Pins ───────────────────────────────────────────────
    // SAFETY: each GPIO number is taken exactly once, here, and nothing
    // else in the firmware claims `Peripherals`.
    let (relay1, relay2, relay3, button) = unsafe {
        (
            AnyOutputPin::new(pins::RELAY_1_GPIO),
            AnyOutputPin::new(pins::RELAY_2_GPIO),
            AnyOutputPin::new(pins::RELAY_3_GPIO),
            AnyIOPin::new(pins::BUTTON_GPIO),
        )
    };
    let relays = RelayBank::new(
        PinDriver::output(relay1)?,
        PinDriver::output(relay2)?,
        PinDriver::output(relay3)?,
    );
    let mut button = PinDriver::input(button)?;
    // Plain input: the board supplies the pull-up.
    button.set_pull(Pull::Floating)?;
    info!(
        "Relays on GPIO {}/{}/{}, button on GPIO {}",
        pins::RELAY_1_GPIO,
        pins::RELAY_2_GPIO,
        pins::RELAY_3_GPIO,
        pins::BUTTON_GPIO
    );

    let mut board = GpioBoard::new(relays, button, SystemClock::new(), FreeRtos);
    let mut sink = LogEventSink::new();

    // ── 4. Run ────────────────────────────────────────────────
    controller.start(&mut board, &mut sink);

    loop {
        controller.tick(&mut board, &mut sink);
        // One RTOS tick per iteration keeps the IDLE task (and with it
        // the task watchdog) scheduled.
        FreeRtos::delay_ms(1);
    }
}
