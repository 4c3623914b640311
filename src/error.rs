//! Unified error types for the relay light firmware.
//!
//! The control loop itself has no recoverable error paths: pattern indices
//! are produced by modulo arithmetic and GPIO faults are logged and skipped.
//! What remains is configuration validation at start-up and the pin-level
//! faults surfaced by the driver layer. All variants are `Copy`.

use core::fmt;

use crate::drivers::relays::RelayChannel;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The controller configuration was rejected.
    Config(ConfigError),
    /// A GPIO read or write failed.
    Pin(PinFault),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Pin(e) => write!(f, "pin: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero rotation timeout would advance the pattern on every tick.
    ZeroPatternDuration,
    /// A zero debounce window lets every contact bounce through.
    ZeroDebounceWindow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPatternDuration => write!(f, "pattern duration must be non-zero"),
            Self::ZeroDebounceWindow => write!(f, "debounce window must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Pin faults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFault {
    /// Driving a relay output failed.
    Relay(RelayChannel),
    /// Sampling the button input failed.
    Button,
}

impl fmt::Display for PinFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relay(ch) => write!(f, "relay {} write failed", ch.number()),
            Self::Button => write!(f, "button read failed"),
        }
    }
}

impl From<PinFault> for Error {
    fn from(e: PinFault) -> Self {
        Self::Pin(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
