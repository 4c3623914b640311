//! Board adapter: bridges embedded-hal peripherals to the domain ports.
//!
//! Owns the relay pins, the button pin, the clock and the delay provider,
//! and exposes them through [`RelayPort`], [`ButtonPort`], [`ClockPort`]
//! and `DelayNs`. This is the only module in the system that touches pins.
//! GPIO errors are logged and swallowed: the loop never stops for them.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{ButtonPort, ClockPort, RelayPort};
use crate::drivers::button::Level;
use crate::drivers::relays::{RelayBank, RelayState};
use crate::error::{Error, PinFault};
use crate::time::Millis;

/// Concrete adapter that combines all hardware behind the port traits.
pub struct GpioBoard<R1, R2, R3, B, C, D> {
    relays: RelayBank<R1, R2, R3>,
    button: B,
    clock: C,
    delay: D,
}

impl<R1, R2, R3, B, C, D> GpioBoard<R1, R2, R3, B, C, D>
where
    R1: OutputPin,
    R2: OutputPin,
    R3: OutputPin,
    B: InputPin,
    C: ClockPort,
    D: DelayNs,
{
    pub fn new(relays: RelayBank<R1, R2, R3>, button: B, clock: C, delay: D) -> Self {
        Self {
            relays,
            button,
            clock,
            delay,
        }
    }
}

// ── RelayPort implementation ──────────────────────────────────

impl<R1, R2, R3, B, C, D> RelayPort for GpioBoard<R1, R2, R3, B, C, D>
where
    R1: OutputPin,
    R2: OutputPin,
    R3: OutputPin,
{
    fn write_relays(&mut self, state: RelayState) {
        if let Err(fault) = self.relays.apply(state) {
            warn!("{}", Error::from(fault));
        }
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl<R1, R2, R3, B, C, D> ButtonPort for GpioBoard<R1, R2, R3, B, C, D>
where
    B: InputPin,
{
    /// A failed read is reported as HIGH (released).
    fn read_button(&mut self) -> Level {
        match self.button.is_high() {
            Ok(high) => Level::from(high),
            Err(_) => {
                warn!("{}", Error::from(PinFault::Button));
                Level::High
            }
        }
    }
}

// ── ClockPort / DelayNs pass-through ──────────────────────────

impl<R1, R2, R3, B, C, D> ClockPort for GpioBoard<R1, R2, R3, B, C, D>
where
    C: ClockPort,
{
    fn now(&self) -> Millis {
        self.clock.now()
    }
}

impl<R1, R2, R3, B, C, D> DelayNs for GpioBoard<R1, R2, R3, B, C, D>
where
    D: DelayNs,
{
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
