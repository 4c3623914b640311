//! GPIO pin assignments for the relay controller board.
//!
//! `main` builds every pin driver from these
//! numbers rather than hard-coding them.

// ---------------------------------------------------------------------------
// Relay module (3 channels, active-low inputs)
// ---------------------------------------------------------------------------

/// Digital output: relay channel 1. LOW = energised.
pub const RELAY_1_GPIO: i32 = 9;
/// Digital output: relay channel 2. LOW = energised.
pub const RELAY_2_GPIO: i32 = 10;
/// Digital output: relay channel 3. LOW = energised.
pub const RELAY_3_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// Pattern-advance button
// ---------------------------------------------------------------------------

/// Momentary push-button, LOW = pressed.
///
/// Configured as a plain (floating) input. The board must provide an
/// external pull-up; without it the level is undefined while released.
pub const BUTTON_GPIO: i32 = 12;
