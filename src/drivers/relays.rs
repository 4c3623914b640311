//! Three-channel relay module driver.
//!
//! ## Hardware
//!
//! Opto-isolated relay board with active-low inputs: driving a pin LOW
//! energises the relay (light on), HIGH releases it.
//!
//! [`RelayState`] is the logical view the pattern engine works in. The
//! inversion to electrical levels happens only here, in
//! [`RelayState::levels`] and [`RelayBank::apply`].

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::PinFault;

/// One of the three relay outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayChannel {
    First,
    Second,
    Third,
}

impl RelayChannel {
    pub const ALL: [RelayChannel; 3] = [Self::First, Self::Second, Self::Third];

    /// Zero-based position, matching bit `n` of a [`RelayState`].
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// One-based channel number as printed on the board.
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Logical on/off state of all three relays, written together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelayState([bool; 3]);

impl RelayState {
    pub const ALL_ON: Self = Self([true; 3]);
    pub const ALL_OFF: Self = Self([false; 3]);

    pub const fn new(first: bool, second: bool, third: bool) -> Self {
        Self([first, second, third])
    }

    /// Exactly one relay on.
    pub const fn only(channel: RelayChannel) -> Self {
        let mut on = [false; 3];
        on[channel.index()] = true;
        Self(on)
    }

    /// Low three bits map to relays 1..3 (bit 0 = relay 1).
    pub const fn from_bits(bits: u8) -> Self {
        Self([bits & 0b001 != 0, bits & 0b010 != 0, bits & 0b100 != 0])
    }

    pub const fn bits(self) -> u8 {
        (self.0[0] as u8) | ((self.0[1] as u8) << 1) | ((self.0[2] as u8) << 2)
    }

    pub const fn is_on(self, channel: RelayChannel) -> bool {
        self.0[channel.index()]
    }

    pub fn count_on(self) -> usize {
        self.0.iter().filter(|on| **on).count()
    }

    /// Electrical level per channel: on → LOW, off → HIGH.
    pub fn levels(self) -> [PinState; 3] {
        self.0.map(|on| if on { PinState::Low } else { PinState::High })
    }
}

impl core::fmt::Display for RelayState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for on in self.0 {
            f.write_str(if on { "#" } else { "." })?;
        }
        Ok(())
    }
}

/// The three relay output pins.
pub struct RelayBank<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A, B, C> RelayBank<A, B, C>
where
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
{
    pub fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Drive all three pins. Every pin is written even if an earlier one
    /// fails; the first failure is reported.
    pub fn apply(&mut self, state: RelayState) -> Result<(), PinFault> {
        let [l1, l2, l3] = state.levels();
        let r1 = self.first.set_state(l1).map_err(|_| RelayChannel::First);
        let r2 = self.second.set_state(l2).map_err(|_| RelayChannel::Second);
        let r3 = self.third.set_state(l3).map_err(|_| RelayChannel::Third);
        r1.and(r2).and(r3).map_err(PinFault::Relay)
    }

    pub fn release(self) -> (A, B, C) {
        (self.first, self.second, self.third)
    }
}
