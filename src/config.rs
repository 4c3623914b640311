//! Controller configuration parameters
//!
//! Timing constants for rotation, debouncing and the blocking delays of the
//! control loop. Compiled in and validated once at start-up; pattern
//! intervals themselves are fixed and live with the pattern catalog.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Rotation ---
    /// Time each pattern runs before auto-advancing (milliseconds)
    pub pattern_duration_ms: u32,

    // --- Button ---
    /// Raw level must hold for longer than this before it is accepted (milliseconds)
    pub debounce_ms: u32,
    /// Blocking guard after a confirmed press (milliseconds)
    pub press_guard_ms: u32,

    // --- Relays ---
    /// Blocking delay after an all-on / all-off bulk write (milliseconds)
    pub bulk_settle_ms: u32,

    // --- Pattern state ---
    /// Reset the entered pattern's timers on every switch instead of
    /// resuming from whatever state it was left in
    pub reset_pattern_state_on_switch: bool,
    /// Seed for the random blink and firefly patterns
    pub rng_seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Rotation
            pattern_duration_ms: 20_000,

            // Button
            debounce_ms: 50,
            press_guard_ms: 200,

            // Relays
            bulk_settle_ms: 50,

            // Pattern state
            reset_pattern_state_on_switch: false,
            rng_seed: 0x5EED,
        }
    }
}

impl ControllerConfig {
    /// Reject values that would break the rotation or debounce contracts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern_duration_ms == 0 {
            return Err(ConfigError::ZeroPatternDuration);
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounceWindow);
        }
        Ok(())
    }
}
