//! Port traits: the hexagonal boundary between the controller and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LightController (domain)
//! ```
//!
//! The [`LightController`](super::controller::LightController) takes its
//! hardware as `impl RelayPort + ButtonPort + ClockPort + DelayNs`, so the
//! same control loop runs against GPIO on target and against a scripted
//! mock in tests. Blocking delays use `embedded_hal::delay::DelayNs`
//! directly rather than a port of their own.

use crate::drivers::button::Level;
use crate::drivers::relays::RelayState;
use crate::time::Millis;

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: commands all three relays at once.
pub trait RelayPort {
    /// Apply a logical state. Implementations map on → LOW.
    fn write_relays(&mut self, state: RelayState);
}

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one raw, undebounced sample of the button input.
pub trait ButtonPort {
    fn read_button(&mut self) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter. Allowed to wrap at `u32::MAX`.
pub trait ClockPort {
    fn now(&self) -> Millis;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → diagnostics)
// ───────────────────────────────────────────────────────────────

/// The controller emits [`AppEvent`](super::events::AppEvent)s through
/// this port. Adapters decide where they go (serial log, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
