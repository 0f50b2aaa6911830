//! Decision events emitted by the orchestrator.
//!
//! The orchestrator never logs directly; it reports to an injected
//! [`Observer`]. `TracingObserver` turns events into `tracing` records,
//! `Recorder` keeps them for inspection.

use std::cell::RefCell;
use std::fmt;

use tracing::{debug, info};

use crate::core::domain::{CipherType, Field, Operation};

/// Something the orchestrator decided or observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A request was accepted for processing.
    Started {
        cipher: CipherType,
        operation: Operation,
    },
    KeyProvided,
    KeyGenerated { bits: u16 },
    IvProvided,
    IvGenerated,
    /// An IV was supplied for a mode that has none.
    IvIgnored { cipher: CipherType },
    /// A caller-supplied IV is being used for encryption.
    IvReuse,
    /// A value is missing and the operator is being asked for it.
    Prompting(Field),
    /// Decrypted bytes were not UTF-8 and are returned as Base64.
    BinaryPlaintext { bytes: usize },
    Encrypted { bytes: usize },
    Decrypted { bytes: usize },
    Failed {
        operation: Operation,
        reason: String,
    },
}

impl Event {
    /// Whether the operator should be shown this event as a caution.
    ///
    /// Advisories never interrupt processing.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            Event::IvIgnored { .. } | Event::IvReuse | Event::BinaryPlaintext { .. }
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Started { cipher, operation } => {
                write!(f, "new {} {} request", cipher, operation)
            }
            Event::KeyProvided => f.write_str("working with the provided encryption key"),
            Event::KeyGenerated { bits } => write!(f, "generated a new {}-bit key", bits),
            Event::IvProvided => f.write_str("working with the provided initialization vector"),
            Event::IvGenerated => f.write_str("generated a new initialization vector"),
            Event::IvIgnored { cipher } => write!(
                f,
                "initialization vector is not used by {} and will be ignored",
                cipher.mode.name().to_uppercase()
            ),
            Event::IvReuse => f.write_str(
                "using the same initialization vector for more than one encryption is not recommended",
            ),
            Event::Prompting(field) => write!(f, "{} is missing, asking for input", field),
            Event::BinaryPlaintext { bytes } => write!(
                f,
                "decrypted {} bytes are not valid UTF-8, phrase is Base64-encoded",
                bytes
            ),
            Event::Encrypted { bytes } => write!(f, "encrypted {} bytes", bytes),
            Event::Decrypted { bytes } => write!(f, "decrypted {} bytes", bytes),
            Event::Failed { operation, reason } => write!(f, "{} failed: {}", operation, reason),
        }
    }
}

/// Capability for recording orchestrator events.
pub trait Observer {
    fn record(&self, event: &Event);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn record(&self, event: &Event) {
        match event {
            Event::Started { .. } | Event::Encrypted { .. } | Event::Decrypted { .. } => {
                info!("{}", event)
            }
            Event::Failed { operation, reason } => {
                info!(%operation, %reason, "operation failed")
            }
            e if e.is_advisory() => info!(advisory = true, "{}", e),
            e => debug!("{}", e),
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn record(&self, _event: &Event) {}
}

/// Keeps every event in order.
#[derive(Debug, Default)]
pub struct Recorder {
    events: RefCell<Vec<Event>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Recorded advisories only.
    pub fn advisories(&self) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.is_advisory())
            .cloned()
            .collect()
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.borrow().contains(event)
    }
}

impl Observer for Recorder {
    fn record(&self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}

impl<O: Observer + ?Sized> Observer for &O {
    fn record(&self, event: &Event) {
        (**self).record(event)
    }
}
