//! Relay pattern engine.
//!
//! Twenty fixed patterns selected by [`PatternId`]. The main loop calls
//! [`PatternEngine::step`] with the active pattern every tick; the engine
//! returns a [`Step`] telling the caller whether to write the relays.
//!
//! ## Pattern catalog
//!
//! | #  | Pattern             | Interval           | Kind state    |
//! |----|---------------------|--------------------|---------------|
//! | 0  | All On              | every tick (bulk)  | —             |
//! | 1  | All Off             | every tick (bulk)  | —             |
//! | 2  | Sequential On/Off   | 500 ms             | sequential    |
//! | 3  | Alternating 1+2 / 3 | 800 ms             | alternate_12_3|
//! | 4  | Slow Chase          | 1000 ms            | chase         |
//! | 5  | Fast Chase          | 250 ms             | chase         |
//! | 6  | Random Blink        | 300 ms             | random_blink  |
//! | 7  | Heartbeat           | 60 ms base         | heartbeat     |
//! | 8  | Binary Counter      | 500 ms             | binary        |
//! | 9  | Fade Simulation     | 100 ms             | fade          |
//! | 10 | Alternating 1 / 2+3 | 700 ms             | alternate_1_23|
//! | 11 | Wave                | 300 ms             | wave          |
//! | 12 | SOS Morse           | table (bulk)       | sos           |
//! | 13 | Slow Strobe         | 400 ms (bulk)      | strobe        |
//! | 14 | Fast Strobe         | 100 ms (bulk)      | strobe        |
//! | 15 | Cascade             | 300 ms             | cascade       |
//! | 16 | Firefly             | per relay, random  | firefly       |
//! | 17 | Alternating Pairs   | 600 ms             | pairs         |
//! | 18 | Thunder             | table (bulk)       | thunder       |
//! | 19 | Sequential Pairs    | 500 ms             | sequential_pairs |
//!
//! State is kept per *kind*: the two chase speeds share one cursor, as do
//! the two strobe speeds. Nothing is reset when the active pattern changes
//! unless the caller asks for it through [`PatternEngine::reset`].

pub mod frames;
pub mod random;
pub mod sequences;

use core::fmt;

use fastrand::Rng;

use crate::drivers::relays::RelayState;
use crate::time::Millis;

use frames::FrameCycle;
use random::{Firefly, RandomBlink};
use sequences::{FadeSimulation, Heartbeat, TimedSequence};

/// Number of patterns in the rotation.
pub const PATTERN_COUNT: u8 = 20;

/// Pattern identifier, ordered as the rotation visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PatternId {
    #[default]
    AllOn = 0,
    AllOff,
    SequentialOnOff,
    Alternating12Vs3,
    SlowChase,
    FastChase,
    RandomBlink,
    Heartbeat,
    BinaryCounter,
    FadeSimulation,
    Alternating1Vs23,
    Wave,
    SosMorse,
    SlowStrobe,
    FastStrobe,
    Cascade,
    Firefly,
    AlternatingPairs,
    Thunder,
    SequentialPairs,
}

impl PatternId {
    pub const ALL: [PatternId; PATTERN_COUNT as usize] = [
        Self::AllOn,
        Self::AllOff,
        Self::SequentialOnOff,
        Self::Alternating12Vs3,
        Self::SlowChase,
        Self::FastChase,
        Self::RandomBlink,
        Self::Heartbeat,
        Self::BinaryCounter,
        Self::FadeSimulation,
        Self::Alternating1Vs23,
        Self::Wave,
        Self::SosMorse,
        Self::SlowStrobe,
        Self::FastStrobe,
        Self::Cascade,
        Self::Firefly,
        Self::AlternatingPairs,
        Self::Thunder,
        Self::SequentialPairs,
    ];

    /// `None` for indices outside `0..PATTERN_COUNT`.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Zero-based rotation index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// One-based number as shown in diagnostics.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Successor in the rotation, wrapping after the last pattern.
    pub const fn next(self) -> Self {
        Self::ALL[((self.index() + 1) % PATTERN_COUNT) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::AllOn => "All On",
            Self::AllOff => "All Off",
            Self::SequentialOnOff => "Sequential On/Off",
            Self::Alternating12Vs3 => "Alternating 1+2 vs 3",
            Self::SlowChase => "Slow Chase",
            Self::FastChase => "Fast Chase",
            Self::RandomBlink => "Random Blink",
            Self::Heartbeat => "Heartbeat",
            Self::BinaryCounter => "Binary Counter",
            Self::FadeSimulation => "Fade Simulation",
            Self::Alternating1Vs23 => "Alternating 1 vs 2+3",
            Self::Wave => "Wave",
            Self::SosMorse => "SOS Morse",
            Self::SlowStrobe => "Slow Strobe",
            Self::FastStrobe => "Fast Strobe",
            Self::Cascade => "Cascade",
            Self::Firefly => "Firefly",
            Self::AlternatingPairs => "Alternating Pairs",
            Self::Thunder => "Thunder",
            Self::SequentialPairs => "Sequential Pairs",
        }
    }

    /// Fixed step interval, `None` for patterns with their own timing.
    pub const fn interval_ms(self) -> Option<u32> {
        match self {
            Self::SequentialOnOff => Some(500),
            Self::Alternating12Vs3 => Some(800),
            Self::SlowChase => Some(1000),
            Self::FastChase => Some(250),
            Self::RandomBlink => Some(300),
            Self::Heartbeat => Some(HEARTBEAT_BASE_MS),
            Self::BinaryCounter => Some(500),
            Self::FadeSimulation => Some(100),
            Self::Alternating1Vs23 => Some(700),
            Self::Wave => Some(300),
            Self::SlowStrobe => Some(400),
            Self::FastStrobe => Some(100),
            Self::Cascade => Some(300),
            Self::AlternatingPairs => Some(600),
            Self::SequentialPairs => Some(500),
            Self::AllOn | Self::AllOff | Self::SosMorse | Self::Firefly | Self::Thunder => None,
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

/// Heartbeat base period; the pause lengths derive from it.
pub const HEARTBEAT_BASE_MS: u32 = 60;

/// What the caller should do with the relays after one engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Interval not elapsed; leave the outputs untouched.
    Hold,
    /// Write this state.
    Write(RelayState),
    /// Write this all-on/all-off state, then block for the settle delay.
    Bulk(RelayState),
}

impl Step {
    pub fn state(self) -> Option<RelayState> {
        match self {
            Self::Hold => None,
            Self::Write(s) | Self::Bulk(s) => Some(s),
        }
    }
}

/// Persistent state of every pattern kind.
#[derive(Debug, Clone)]
struct KindStates {
    sequential: FrameCycle,
    alternate_12_3: FrameCycle,
    chase: FrameCycle,
    random_blink: RandomBlink,
    heartbeat: Heartbeat,
    binary: FrameCycle,
    fade: FadeSimulation,
    alternate_1_23: FrameCycle,
    wave: FrameCycle,
    sos: TimedSequence,
    strobe: FrameCycle,
    cascade: FrameCycle,
    firefly: Firefly,
    pairs: FrameCycle,
    thunder: TimedSequence,
    sequential_pairs: FrameCycle,
}

impl Default for KindStates {
    fn default() -> Self {
        Self {
            sequential: FrameCycle::new(frames::SINGLE_CHASE),
            alternate_12_3: FrameCycle::new(frames::ALTERNATE_12_3),
            chase: FrameCycle::new(frames::SINGLE_CHASE),
            random_blink: RandomBlink::default(),
            heartbeat: Heartbeat::default(),
            binary: FrameCycle::new(frames::BINARY_COUNT),
            fade: FadeSimulation::default(),
            alternate_1_23: FrameCycle::new(frames::ALTERNATE_1_23),
            wave: FrameCycle::new(frames::WAVE),
            sos: TimedSequence::new(sequences::SOS),
            strobe: FrameCycle::bulk(frames::STROBE),
            cascade: FrameCycle::new(frames::CASCADE),
            firefly: Firefly::default(),
            pairs: FrameCycle::new(frames::ALTERNATING_PAIRS),
            thunder: TimedSequence::new(sequences::THUNDER),
            sequential_pairs: FrameCycle::new(frames::SEQUENTIAL_PAIRS),
        }
    }
}

/// Dispatches to the active pattern and owns all pattern-local state.
pub struct PatternEngine {
    kinds: KindStates,
    rng: Rng,
}

impl PatternEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            kinds: KindStates::default(),
            rng: Rng::with_seed(seed),
        }
    }

    /// Advance `pattern` to `now`.
    pub fn step(&mut self, pattern: PatternId, now: Millis) -> Step {
        let k = &mut self.kinds;
        let interval = pattern.interval_ms().unwrap_or(0);
        match pattern {
            PatternId::AllOn => Step::Bulk(RelayState::ALL_ON),
            PatternId::AllOff => Step::Bulk(RelayState::ALL_OFF),
            PatternId::SequentialOnOff => k.sequential.step(now, interval),
            PatternId::Alternating12Vs3 => k.alternate_12_3.step(now, interval),
            PatternId::SlowChase | PatternId::FastChase => k.chase.step(now, interval),
            PatternId::RandomBlink => k.random_blink.step(now, interval, &mut self.rng),
            PatternId::Heartbeat => k.heartbeat.step(now, interval),
            PatternId::BinaryCounter => k.binary.step(now, interval),
            PatternId::FadeSimulation => k.fade.step(now, interval),
            PatternId::Alternating1Vs23 => k.alternate_1_23.step(now, interval),
            PatternId::Wave => k.wave.step(now, interval),
            PatternId::SosMorse => k.sos.step(now),
            PatternId::SlowStrobe | PatternId::FastStrobe => k.strobe.step(now, interval),
            PatternId::Cascade => k.cascade.step(now, interval),
            PatternId::Firefly => k.firefly.step(now, &mut self.rng),
            PatternId::AlternatingPairs => k.pairs.step(now, interval),
            PatternId::Thunder => k.thunder.step(now),
            PatternId::SequentialPairs => k.sequential_pairs.step(now, interval),
        }
    }

    /// Forget the timers and counters of `pattern`'s kind. Shared kinds
    /// (the chase and strobe pairs) are reset together.
    pub fn reset(&mut self, pattern: PatternId) {
        let fresh = KindStates::default();
        let k = &mut self.kinds;
        match pattern {
            PatternId::AllOn | PatternId::AllOff => {}
            PatternId::SequentialOnOff => k.sequential = fresh.sequential,
            PatternId::Alternating12Vs3 => k.alternate_12_3 = fresh.alternate_12_3,
            PatternId::SlowChase | PatternId::FastChase => k.chase = fresh.chase,
            PatternId::RandomBlink => k.random_blink = fresh.random_blink,
            PatternId::Heartbeat => k.heartbeat = fresh.heartbeat,
            PatternId::BinaryCounter => k.binary = fresh.binary,
            PatternId::FadeSimulation => k.fade = fresh.fade,
            PatternId::Alternating1Vs23 => k.alternate_1_23 = fresh.alternate_1_23,
            PatternId::Wave => k.wave = fresh.wave,
            PatternId::SosMorse => k.sos = fresh.sos,
            PatternId::SlowStrobe | PatternId::FastStrobe => k.strobe = fresh.strobe,
            PatternId::Cascade => k.cascade = fresh.cascade,
            PatternId::Firefly => k.firefly = fresh.firefly,
            PatternId::AlternatingPairs => k.pairs = fresh.pairs,
            PatternId::Thunder => k.thunder = fresh.thunder,
            PatternId::SequentialPairs => k.sequential_pairs = fresh.sequential_pairs,
        }
    }
}
