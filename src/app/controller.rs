//! Light controller, the single-loop core.
//!
//! [`LightController`] owns the debouncer, the rotation scheduler and the
//! pattern engine. Each [`tick`](LightController::tick) runs the three
//! phases of one main-loop iteration in a fixed order:
//!
//! ```text
//!  ButtonPort ──▶ debounce ──▶ press? advance + guard delay
//!  ClockPort  ──▶ rotation ──▶ timeout? advance
//!  ClockPort  ──▶ pattern  ──▶ RelayPort (+ settle delay on bulk writes)
//! ```
//!
//! The clock is re-read at every phase, so time spent in a blocking delay
//! is visible to the phases that follow it.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::ControllerConfig;
use crate::drivers::button::{ButtonEvent, Debouncer};
use crate::drivers::relays::RelayState;
use crate::error::ConfigError;
use crate::patterns::{PatternEngine, PatternId, Step};

use super::events::{AppEvent, SwitchCause};
use super::ports::{ButtonPort, ClockPort, EventSink, RelayPort};
use super::rotation::RotationScheduler;

pub struct LightController {
    config: ControllerConfig,
    button: Debouncer,
    rotation: RotationScheduler,
    engine: PatternEngine,
    relays: RelayState,
    tick_count: u64,
}

impl LightController {
    /// Construct the controller. Does not touch hardware; call
    /// [`start`](Self::start) next.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            button: Debouncer::new(config.debounce_ms),
            rotation: RotationScheduler::new(config.pattern_duration_ms),
            engine: PatternEngine::new(config.rng_seed),
            relays: RelayState::ALL_OFF,
            tick_count: 0,
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Release all relays, start the rotation timer, announce start-up.
    pub fn start(&mut self, hw: &mut (impl RelayPort + ClockPort), sink: &mut impl EventSink) {
        self.write(hw, RelayState::ALL_OFF);
        self.rotation.restart(hw.now());
        sink.emit(&AppEvent::Started {
            pattern: self.rotation.current(),
        });
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one main-loop iteration: button → rotation timeout → pattern.
    pub fn tick(
        &mut self,
        hw: &mut (impl RelayPort + ButtonPort + ClockPort + DelayNs),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Button
        let level = hw.read_button();
        if let Some(ButtonEvent::Pressed) = self.button.sample(level, hw.now()) {
            let next = self.rotation.advance(hw.now());
            self.switched(next, SwitchCause::Button, sink);
            hw.delay_ms(self.config.press_guard_ms);
        }

        // 2. Rotation timeout
        if let Some(next) = self.rotation.poll(hw.now()) {
            self.switched(next, SwitchCause::Timeout, sink);
        }

        // 3. Active pattern
        match self.engine.step(self.rotation.current(), hw.now()) {
            Step::Hold => {}
            Step::Write(state) => self.write(hw, state),
            Step::Bulk(state) => {
                self.write(hw, state);
                hw.delay_ms(self.config.bulk_settle_ms);
            }
        }
    }

    fn switched(&mut self, pattern: PatternId, cause: SwitchCause, sink: &mut impl EventSink) {
        if self.config.reset_pattern_state_on_switch {
            self.engine.reset(pattern);
        }
        debug!("rotation: {:?} -> {}", cause, pattern);
        sink.emit(&AppEvent::PatternChanged { pattern, cause });
    }

    fn write(&mut self, hw: &mut impl RelayPort, state: RelayState) {
        hw.write_relays(state);
        self.relays = state;
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn pattern(&self) -> PatternId {
        self.rotation.current()
    }

    /// Last state written to the relays.
    pub fn relays(&self) -> RelayState {
        self.relays
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
