//! Fixed-interval patterns expressed as frame tables.
//!
//! Twelve of the twenty patterns are the same machine: wait for the
//! interval, write the frame under the cursor, advance the cursor modulo
//! the table length. They differ only in their frames, their interval, and
//! whether the write is a bulk all-on/all-off write.

use crate::drivers::relays::{RelayChannel, RelayState};
use crate::time::Millis;

use super::Step;

/// Last-transition timestamp of one pattern kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalTimer {
    last_change: Millis,
}

impl IntervalTimer {
    pub const fn new() -> Self {
        Self {
            last_change: Millis::ZERO,
        }
    }

    /// `true` (and re-armed at `now`) once `interval_ms` has passed.
    pub fn fire(&mut self, now: Millis, interval_ms: u32) -> bool {
        if now.has_elapsed(self.last_change, interval_ms) {
            self.last_change = now;
            true
        } else {
            false
        }
    }

    pub fn last_change(&self) -> Millis {
        self.last_change
    }
}

const ON: bool = true;
const OFF: bool = false;

const fn frame(first: bool, second: bool, third: bool) -> RelayState {
    RelayState::new(first, second, third)
}

/// One relay on, travelling 1 → 2 → 3.
pub const SINGLE_CHASE: &[RelayState] = &[
    RelayState::only(RelayChannel::First),
    RelayState::only(RelayChannel::Second),
    RelayState::only(RelayChannel::Third),
];

/// {1,2} against {3}.
pub const ALTERNATE_12_3: &[RelayState] = &[frame(ON, ON, OFF), frame(OFF, OFF, ON)];

/// {1} against {2,3}.
pub const ALTERNATE_1_23: &[RelayState] = &[frame(ON, OFF, OFF), frame(OFF, ON, ON)];

/// 3-bit counter, relay n shows bit n-1.
pub const BINARY_COUNT: &[RelayState] = &[
    RelayState::from_bits(0),
    RelayState::from_bits(1),
    RelayState::from_bits(2),
    RelayState::from_bits(3),
    RelayState::from_bits(4),
    RelayState::from_bits(5),
    RelayState::from_bits(6),
    RelayState::from_bits(7),
];

pub const WAVE: &[RelayState] = &[
    frame(ON, OFF, OFF),
    frame(ON, ON, OFF),
    frame(OFF, ON, OFF),
    frame(OFF, ON, ON),
    frame(OFF, OFF, ON),
    frame(ON, OFF, ON),
];

/// Fill 1 → 1,2 → all, then drain from the front.
pub const CASCADE: &[RelayState] = &[
    frame(ON, OFF, OFF),
    frame(ON, ON, OFF),
    frame(ON, ON, ON),
    frame(OFF, ON, ON),
    frame(OFF, OFF, ON),
    frame(OFF, OFF, OFF),
];

pub const ALTERNATING_PAIRS: &[RelayState] = &[
    frame(ON, ON, OFF),
    frame(ON, OFF, ON),
    frame(OFF, ON, ON),
];

pub const SEQUENTIAL_PAIRS: &[RelayState] = &[
    frame(ON, ON, OFF),
    frame(OFF, ON, ON),
    frame(ON, OFF, ON),
];

pub const STROBE: &[RelayState] = &[RelayState::ALL_ON, RelayState::ALL_OFF];

/// Cursor over a frame table plus its interval timer.
#[derive(Debug, Clone)]
pub struct FrameCycle {
    frames: &'static [RelayState],
    bulk: bool,
    cursor: usize,
    timer: IntervalTimer,
}

impl FrameCycle {
    pub const fn new(frames: &'static [RelayState]) -> Self {
        Self {
            frames,
            bulk: false,
            cursor: 0,
            timer: IntervalTimer::new(),
        }
    }

    /// Frames are written as bulk writes (settle delay follows).
    pub const fn bulk(frames: &'static [RelayState]) -> Self {
        let mut cycle = Self::new(frames);
        cycle.bulk = true;
        cycle
    }

    pub fn step(&mut self, now: Millis, interval_ms: u32) -> Step {
        if !self.timer.fire(now, interval_ms) {
            return Step::Hold;
        }
        let state = self.frames[self.cursor];
        self.cursor = (self.cursor + 1) % self.frames.len();
        if self.bulk {
            Step::Bulk(state)
        } else {
            Step::Write(state)
        }
    }

    /// Index of the frame the next step will write.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.timer = IntervalTimer::default();
    }
}
