//! Application core: control logic with no direct I/O.
//!
//! The debounce → rotation → pattern loop lives here. All interaction with
//! hardware happens through the **port traits** in [`ports`], so the whole
//! loop runs on the host against mock adapters.

pub mod controller;
pub mod events;
pub mod ports;
pub mod rotation;
