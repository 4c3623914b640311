//! Peripheral drivers: relay outputs and the debounced button.

pub mod button;
pub mod relays;
