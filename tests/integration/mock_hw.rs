//! Mock hardware adapter for integration tests.
//!
//! Records every relay write with its timestamp, plays back a scripted
//! button level, and runs a simulated millisecond clock that blocking
//! delays advance. A 200 ms guard costs 200 ms of simulated time and no
//! wall-clock time.

use embedded_hal::delay::DelayNs;
use relaylights::app::events::AppEvent;
use relaylights::app::ports::{ButtonPort, ClockPort, EventSink, RelayPort};
use relaylights::drivers::button::Level;
use relaylights::drivers::relays::RelayState;
use relaylights::time::Millis;

// ── Relay write record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelayWrite {
    pub at: Millis,
    pub state: RelayState,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub now: Millis,
    pub button: Level,
    pub writes: Vec<RelayWrite>,
    pub delays_ms: Vec<u32>,
    sub_ms_ns: u64,
}

#[allow(dead_code)]
impl MockHardware {
    /// Clock at zero, button released (HIGH).
    pub fn new() -> Self {
        Self::starting_at(Millis::ZERO)
    }

    pub fn starting_at(now: Millis) -> Self {
        Self {
            now,
            button: Level::High,
            writes: Vec::new(),
            delays_ms: Vec::new(),
            sub_ms_ns: 0,
        }
    }

    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }

    pub fn last_write(&self) -> Option<&RelayWrite> {
        self.writes.last()
    }

    pub fn writes_between(&self, from: Millis, to: Millis) -> Vec<RelayWrite> {
        let span = to.elapsed_since(from);
        self.writes
            .iter()
            .filter(|w| w.at.elapsed_since(from) < span)
            .copied()
            .collect()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayPort for MockHardware {
    fn write_relays(&mut self, state: RelayState) {
        self.writes.push(RelayWrite {
            at: self.now,
            state,
        });
    }
}

impl ButtonPort for MockHardware {
    fn read_button(&mut self) -> Level {
        self.button
    }
}

impl ClockPort for MockHardware {
    fn now(&self) -> Millis {
        self.now
    }
}

impl DelayNs for MockHardware {
    fn delay_ns(&mut self, ns: u32) {
        self.sub_ms_ns += u64::from(ns);
        let whole = (self.sub_ms_ns / 1_000_000) as u32;
        self.sub_ms_ns %= 1_000_000;
        self.advance(whole);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        self.advance(ms);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
