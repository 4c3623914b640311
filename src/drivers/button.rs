//! Debounced pattern-advance button.
//!
//! ## Hardware
//!
//! Active-low momentary switch on a plain input; the pull-up is external.
//! The main loop samples the raw level every tick and feeds it to
//! [`Debouncer::sample`].
//!
//! ## Filter
//!
//! A raw level is accepted as the new stable level once it has held
//! unchanged for strictly longer than the debounce window. Only the
//! transition of the stable level to LOW is reported; releases are
//! absorbed silently. Any follow-up guard delay is the caller's job.

use crate::time::Millis;

/// Electrical level of the button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl From<bool> for Level {
    /// `true` = HIGH.
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

/// Events emitted after debouncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Stable level went LOW: one physical press.
    Pressed,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u32,
    last_raw: Level,
    stable: Level,
    last_raw_change: Millis,
}

impl Debouncer {
    /// Both raw and stable level start LOW with the timer at zero, so a
    /// button already held at boot is only reported after a release.
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_raw: Level::Low,
            stable: Level::Low,
            last_raw_change: Millis::ZERO,
        }
    }

    /// Feed one raw sample taken at `now`.
    pub fn sample(&mut self, raw: Level, now: Millis) -> Option<ButtonEvent> {
        if raw != self.last_raw {
            self.last_raw_change = now;
        }
        self.last_raw = raw;

        if now.elapsed_since(self.last_raw_change) > self.window_ms && raw != self.stable {
            self.stable = raw;
            if self.stable.is_low() {
                return Some(ButtonEvent::Pressed);
            }
        }
        None
    }

    /// Last accepted level.
    pub fn stable_level(&self) -> Level {
        self.stable
    }
}
