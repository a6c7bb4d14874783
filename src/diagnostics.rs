// SPDX-License-Identifier: MPL-2.0
//! Diagnostics hook for alert activity.
//!
//! Hosts that want observability over warning/error alerts attach a
//! [`DiagnosticsHandle`] to the store; events flow through a bounded
//! channel into a capacity-limited buffer owned by the collector. Sends
//! never block the UI thread: when the channel is full the event is
//! dropped.

use crate::alert::{Alert, AlertId, Category};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Instant;

/// Capacity of the event channel between handles and the collector.
const CHANNEL_BOUND: usize = 128;

/// Maximum number of events retained by the collector.
const BUFFER_CAPACITY: usize = 256;

/// What happened to the alert collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertEventKind {
    /// A warning or error alert was added to the store.
    Raised {
        id: AlertId,
        category: Category,
        title: String,
    },
    /// The store was cleared while holding `count` alerts.
    Cleared { count: usize },
}

/// A single diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct AlertEvent {
    kind: AlertEventKind,
    at: Instant,
}

impl AlertEvent {
    /// Event for a newly added warning or error alert.
    #[must_use]
    pub fn raised(alert: &Alert) -> Self {
        Self {
            kind: AlertEventKind::Raised {
                id: alert.id(),
                category: alert.category(),
                title: alert.title().to_string(),
            },
            at: Instant::now(),
        }
    }

    /// Event for a clear-all of `count` alerts.
    #[must_use]
    pub fn cleared(count: usize) -> Self {
        Self {
            kind: AlertEventKind::Cleared { count },
            at: Instant::now(),
        }
    }

    /// Returns what happened.
    #[must_use]
    pub fn kind(&self) -> &AlertEventKind {
        &self.kind
    }

    /// Returns when the event was captured.
    #[must_use]
    pub fn at(&self) -> Instant {
        self.at
    }
}

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to share across threads. Sends are
/// non-blocking; events are dropped when the channel is full.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<AlertEvent>,
}

impl DiagnosticsHandle {
    /// Reports an event. Never blocks; drops the event when the channel is full.
    pub fn report(&self, event: AlertEvent) {
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector that receives and buffers alert diagnostics.
///
/// The buffer keeps the most recent [`BUFFER_CAPACITY`] events; older ones
/// are evicted first.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_tx: Sender<AlertEvent>,
    event_rx: Receiver<AlertEvent>,
    buffer: Mutex<VecDeque<AlertEvent>>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_BOUND);
        Self {
            event_tx,
            event_rx,
            buffer: Mutex::new(VecDeque::new()),
        }
    }
}

impl DiagnosticsCollector {
    /// Creates a new collector with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle for reporting events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves pending channel events into the buffer, evicting the oldest
    /// entries beyond capacity.
    fn pump(&self, buffer: &mut VecDeque<AlertEvent>) {
        while let Ok(event) = self.event_rx.try_recv() {
            if buffer.len() >= BUFFER_CAPACITY {
                buffer.pop_front();
            }
            buffer.push_back(event);
        }
    }

    /// Returns all buffered events, emptying the buffer.
    pub fn drain(&self) -> Vec<AlertEvent> {
        let mut buffer = match self.buffer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.pump(&mut buffer);
        buffer.drain(..).collect()
    }

    /// Returns `true` when no events are buffered or pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let mut buffer = match self.buffer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.pump(&mut buffer);
        buffer.is_empty()
    }
}
