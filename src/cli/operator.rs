//! Operator-facing observer.
//!
//! Everything is logged through `tracing`; advisories are also printed as
//! warnings so the operator sees them without raising the log level.

use crate::cli::output;
use crate::core::events::{Event, Observer, TracingObserver};

/// Observer used by the command line.
#[derive(Debug, Default)]
pub struct Operator {
    log: TracingObserver,
}

impl Observer for Operator {
    fn record(&self, event: &Event) {
        if event.is_advisory() {
            output::warn(&event.to_string());
        }
        self.log.record(event);
    }
}
