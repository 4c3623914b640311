//! Millisecond timestamps on a wrapping 32-bit counter.
//!
//! The clock source rolls over after ~49.7 days. Every elapsed-time
//! computation goes through [`Millis::elapsed_since`], which uses wrapping
//! subtraction, so an interval that straddles the rollover still comes out
//! as the small positive delta it really is.

use core::fmt;

/// A point on the monotonic millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Millis(pub u32);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub const fn new(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, modulo 2^32.
    pub const fn elapsed_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// `true` once at least `interval_ms` have passed since `earlier`.
    pub const fn has_elapsed(self, earlier: Millis, interval_ms: u32) -> bool {
        self.elapsed_since(earlier) >= interval_ms
    }

    pub const fn wrapping_add(self, ms: u32) -> Millis {
        Self(self.0.wrapping_add(ms))
    }
}

impl From<u32> for Millis {
    fn from(ms: u32) -> Self {
        Self(ms)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
