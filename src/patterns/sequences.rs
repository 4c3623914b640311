//! Patterns whose timing varies from step to step.
//!
//! - [`Heartbeat`] arms the *next* wait after each write.
//! - [`TimedSequence`] waits the *current* entry's duration, then writes it
//!   (SOS and thunder tables).
//! - [`FadeSimulation`] walks a step counter up and down.

use crate::drivers::relays::RelayState;
use crate::time::Millis;

use super::Step;
use super::frames::IntervalTimer;

// ── Heartbeat ─────────────────────────────────────────────────

/// Double pulse: beat, short gap, beat, long pause.
#[derive(Debug, Clone)]
pub struct Heartbeat {
    timer: IntervalTimer,
    beat: usize,
    wait_ms: Option<u32>,
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self {
            timer: IntervalTimer::default(),
            beat: 0,
            wait_ms: None,
        }
    }
}

impl Heartbeat {
    /// `(state, wait after writing it)` in units of the base period.
    fn phase(beat: usize, base_ms: u32) -> (RelayState, u32) {
        match beat {
            0 => (RelayState::ALL_ON, base_ms),
            1 => (RelayState::ALL_OFF, base_ms / 2),
            2 => (RelayState::ALL_ON, base_ms),
            _ => (RelayState::ALL_OFF, base_ms * 4),
        }
    }

    pub fn step(&mut self, now: Millis, base_ms: u32) -> Step {
        let wait = self.wait_ms.unwrap_or(base_ms);
        if !self.timer.fire(now, wait) {
            return Step::Hold;
        }
        let (state, next_wait) = Self::phase(self.beat, base_ms);
        self.wait_ms = Some(next_wait);
        self.beat = (self.beat + 1) % 4;
        Step::Write(state)
    }
}

// ── Fade simulation ───────────────────────────────────────────

/// Relays switch on one by one, then the same steps replay switching off.
#[derive(Debug, Clone)]
pub struct FadeSimulation {
    timer: IntervalTimer,
    level: i8,
    rising: bool,
}

impl Default for FadeSimulation {
    fn default() -> Self {
        Self {
            timer: IntervalTimer::default(),
            level: 0,
            rising: true,
        }
    }
}

impl FadeSimulation {
    pub fn step(&mut self, now: Millis, interval_ms: u32) -> Step {
        if !self.timer.fire(now, interval_ms) {
            return Step::Hold;
        }
        let lit = self.rising;
        let state = match self.level {
            0 => RelayState::new(lit, false, false),
            1 => RelayState::new(lit, lit, false),
            _ => RelayState::new(lit, lit, lit),
        };

        if self.rising {
            self.level += 1;
            if self.level >= 3 {
                self.rising = false;
                self.level = 2;
            }
        } else {
            self.level -= 1;
            if self.level < 0 {
                self.rising = true;
                self.level = 0;
            }
        }
        Step::Write(state)
    }
}

// ── Table-driven bulk sequences ───────────────────────────────

/// One entry: wait `after_ms` since the previous write, then write `on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beat {
    pub on: bool,
    pub after_ms: u32,
}

const fn beat(on: bool, after_ms: u32) -> Beat {
    Beat { on, after_ms }
}

const DOT: u32 = 200;
const DASH: u32 = DOT * 3;
const ELEMENT_GAP: u32 = DOT;
const LETTER_GAP: u32 = DOT * 3;
const WORD_GAP: u32 = DOT * 7;

/// "... --- ..." followed by a word gap.
pub const SOS: &[Beat] = &[
    // S
    beat(true, DOT),
    beat(false, ELEMENT_GAP),
    beat(true, DOT),
    beat(false, ELEMENT_GAP),
    beat(true, DOT),
    beat(false, LETTER_GAP),
    // O
    beat(true, DASH),
    beat(false, ELEMENT_GAP),
    beat(true, DASH),
    beat(false, ELEMENT_GAP),
    beat(true, DASH),
    beat(false, LETTER_GAP),
    // S
    beat(true, DOT),
    beat(false, ELEMENT_GAP),
    beat(true, DOT),
    beat(false, ELEMENT_GAP),
    beat(true, DOT),
    beat(false, WORD_GAP),
];

/// Irregular flicker: two strikes, a pause, a double strike, a long quiet.
pub const THUNDER: &[Beat] = &[
    beat(true, 50),
    beat(false, 40),
    beat(true, 100),
    beat(false, 40),
    beat(false, 300),
    beat(false, 100),
    beat(true, 50),
    beat(false, 30),
    beat(true, 70),
    beat(true, 40),
    beat(false, 200),
    beat(false, 1000),
    beat(false, 2000),
];

/// Sum of every entry's wait: one full pass through the table.
pub const fn cycle_ms(table: &[Beat]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < table.len() {
        total += table[i].after_ms;
        i += 1;
    }
    total
}

#[derive(Debug, Clone)]
pub struct TimedSequence {
    table: &'static [Beat],
    cursor: usize,
    timer: IntervalTimer,
}

impl TimedSequence {
    pub const fn new(table: &'static [Beat]) -> Self {
        Self {
            table,
            cursor: 0,
            timer: IntervalTimer::new(),
        }
    }

    pub fn step(&mut self, now: Millis) -> Step {
        let entry = self.table[self.cursor];
        if !self.timer.fire(now, entry.after_ms) {
            return Step::Hold;
        }
        self.cursor = (self.cursor + 1) % self.table.len();
        Step::Bulk(if entry.on {
            RelayState::ALL_ON
        } else {
            RelayState::ALL_OFF
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
