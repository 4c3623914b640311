//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC in production). The `info` line is the fixed
//! diagnostic text; a `debug` line adds the pattern name.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        info!("{}", event);
        match event {
            AppEvent::Started { pattern } => {
                debug!("START | pattern={}", pattern);
            }
            AppEvent::PatternChanged { pattern, cause } => {
                debug!("PATTERN | {} via {:?}", pattern, cause);
            }
        }
    }
}
