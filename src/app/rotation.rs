//! Pattern rotation.
//!
//! Holds the active [`PatternId`] and the time it became active. Both
//! triggers (the rotation timeout and a confirmed press) advance by
//! exactly one pattern and restart the timer.

use crate::patterns::PatternId;
use crate::time::Millis;

#[derive(Debug, Clone)]
pub struct RotationScheduler {
    current: PatternId,
    started_at: Millis,
    period_ms: u32,
}

impl RotationScheduler {
    pub fn new(period_ms: u32) -> Self {
        Self {
            current: PatternId::default(),
            started_at: Millis::ZERO,
            period_ms,
        }
    }

    pub fn current(&self) -> PatternId {
        self.current
    }

    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    /// Time the active pattern has been running.
    pub fn elapsed(&self, now: Millis) -> u32 {
        now.elapsed_since(self.started_at)
    }

    /// Restart the timer without changing pattern.
    pub fn restart(&mut self, now: Millis) {
        self.started_at = now;
    }

    /// Move to the next pattern unconditionally.
    pub fn advance(&mut self, now: Millis) -> PatternId {
        self.current = self.current.next();
        self.started_at = now;
        self.current
    }

    /// Advance if the active pattern has run its full period.
    pub fn poll(&mut self, now: Millis) -> Option<PatternId> {
        if self.elapsed(now) >= self.period_ms {
            Some(self.advance(now))
        } else {
            None
        }
    }
}
