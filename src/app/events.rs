//! Outbound application events.
//!
//! The [`LightController`](super::controller::LightController) emits these
//! through the [`EventSink`](super::ports::EventSink) port. `Display`
//! renders the human-readable serial lines; they are advisory and not
//! meant to be parsed.

use core::fmt;

use crate::patterns::PatternId;

/// What made the rotation advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCause {
    /// The pattern ran for the full rotation period.
    Timeout,
    /// A debounced button press.
    Button,
}

/// Structured events emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Relays initialised and rotation timer started.
    Started { pattern: PatternId },

    /// The active pattern changed.
    PatternChanged {
        pattern: PatternId,
        cause: SwitchCause,
    },
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { .. } => write!(f, "Relay Light Pattern System Started"),
            Self::PatternChanged {
                pattern,
                cause: SwitchCause::Timeout,
            } => write!(f, "Switching to pattern: {}", pattern.number()),
            Self::PatternChanged {
                pattern,
                cause: SwitchCause::Button,
            } => write!(f, "Button pressed! Switching to pattern: {}", pattern.number()),
        }
    }
}
