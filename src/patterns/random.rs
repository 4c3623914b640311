//! Randomised patterns: random blink and firefly.

use fastrand::Rng;

use crate::drivers::relays::{RelayChannel, RelayState};
use crate::time::Millis;

use super::Step;
use super::frames::IntervalTimer;

/// Each relay independently on or off with even odds, every interval.
#[derive(Debug, Clone, Default)]
pub struct RandomBlink {
    timer: IntervalTimer,
}

impl RandomBlink {
    pub fn step(&mut self, now: Millis, interval_ms: u32, rng: &mut Rng) -> Step {
        if !self.timer.fire(now, interval_ms) {
            return Step::Hold;
        }
        Step::Write(RelayState::new(rng.bool(), rng.bool(), rng.bool()))
    }
}

/// Lit for [100, 300) ms.
pub const GLOW_MS: core::ops::Range<u32> = 100..300;
/// Dark for [1000, 3000) ms.
pub const DARK_MS: core::ops::Range<u32> = 1000..3000;

#[derive(Debug, Clone, Copy, Default)]
struct Fly {
    last_change: Millis,
    hold_ms: u32,
    lit: bool,
}

/// Three unsynchronised fireflies: short glows, long dark spells.
///
/// Unlike the interval patterns this one rewrites all three relays on
/// every step; the written value only changes when a fly toggles.
#[derive(Debug, Clone, Default)]
pub struct Firefly {
    flies: [Fly; 3],
}

impl Firefly {
    pub fn step(&mut self, now: Millis, rng: &mut Rng) -> Step {
        for fly in &mut self.flies {
            if now.has_elapsed(fly.last_change, fly.hold_ms) {
                fly.last_change = now;
                fly.lit = !fly.lit;
                fly.hold_ms = if fly.lit {
                    rng.u32(GLOW_MS)
                } else {
                    rng.u32(DARK_MS)
                };
            }
        }
        Step::Write(self.state())
    }

    pub fn state(&self) -> RelayState {
        let [a, b, c] = self.flies.map(|f| f.lit);
        RelayState::new(a, b, c)
    }

    /// Remaining hold of `channel`'s current phase, as last drawn.
    pub fn hold_ms(&self, channel: RelayChannel) -> u32 {
        self.flies[channel.index()].hold_ms
    }
}
