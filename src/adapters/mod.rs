//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements                       | Connects to              |
//! |------------|----------------------------------|--------------------------|
//! | `board`    | RelayPort, ButtonPort,           | embedded-hal GPIO pins,  |
//! |            | ClockPort, DelayNs               | clock, delay provider    |
//! | `log_sink` | EventSink                        | Serial log output        |
//! | `time`     | ClockPort                        | ESP32 system timer       |

pub mod board;
pub mod log_sink;
pub mod time;
