//! # Diagnostics
//!
//! Every mutation and reconciliation decision is reported to a
//! `DiagnosticSink` handed to the `Pilot` at construction. There is no
//! process-wide switch: each controller carries its own sink.
//!
//! - [`NoopSink`]: default, drops everything
//! - [`LogSink`]: forwards to the `log` facade at debug level
//! - [`RecordingSink`]: keeps events in memory for test harnesses

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::entry::EntryId;

/// Why a host removal signal was not folded into the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Nothing left to pop.
    EmptyStack,
    /// The revealed entry is already on top; the host is echoing a pop we made.
    AlreadyTop,
    /// The signal does not describe exactly one entry leaving the top.
    ShapeMismatch,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::EmptyStack => write!(f, "stack is empty"),
            IgnoreReason::AlreadyTop => write!(f, "revealed entry is already on top"),
            IgnoreReason::ShapeMismatch => write!(f, "not a single pop from the top"),
        }
    }
}

/// Things the engine reports while it works.
///
/// Routes are carried as their `Debug` rendering so events stay
/// independent of the route type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Initialized { depth: usize },
    Pushed { route: String, entry: EntryId },
    Popped { route: String, entry: EntryId },
    /// `pop` on an empty stack.
    PopIgnored,
    PopToMatched { route: String, index: usize, removed: usize },
    PopToMissed { route: String },
    PoppedToRoot { removed: usize },
    RootReplaced { route: String, entry: EntryId },
    CacheHit { entry: EntryId },
    Rendered { entry: EntryId },
    Evicted { entry: EntryId },
    Reconciled { generation: u64, depth: usize },
    SignalHonored { revealed: EntryId },
    SignalIgnored { reason: IgnoreReason },
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavEvent::Initialized { depth } => write!(f, "initialized with {depth} route(s)"),
            NavEvent::Pushed { route, entry } => write!(f, "pushed {route} as {entry}"),
            NavEvent::Popped { route, entry } => write!(f, "popped {route} ({entry})"),
            NavEvent::PopIgnored => write!(f, "pop ignored, stack is empty"),
            NavEvent::PopToMatched {
                route,
                index,
                removed,
            } => write!(f, "pop to {route} matched index {index}, removed {removed}"),
            NavEvent::PopToMissed { route } => write!(f, "pop to {route}: route not found"),
            NavEvent::PoppedToRoot { removed } => write!(f, "popped to root, removed {removed}"),
            NavEvent::RootReplaced { route, entry } => {
                write!(f, "root replaced with {route} as {entry}")
            }
            NavEvent::CacheHit { entry } => write!(f, "cache hit for {entry}"),
            NavEvent::Rendered { entry } => write!(f, "rendered screen for {entry}"),
            NavEvent::Evicted { entry } => write!(f, "evicted screen for {entry}"),
            NavEvent::Reconciled { generation, depth } => {
                write!(f, "reconciled #{generation}, depth {depth}")
            }
            NavEvent::SignalHonored { revealed } => {
                write!(f, "host removal honored, {revealed} revealed")
            }
            NavEvent::SignalIgnored { reason } => write!(f, "host removal ignored: {reason}"),
        }
    }
}

/// Receiver for engine diagnostics.
pub trait DiagnosticSink: Send {
    fn record(&self, event: &NavEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _event: &NavEvent) {}
}

/// Writes events through `log::debug!` under the `waypoint` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, event: &NavEvent) {
        log::debug!(target: "waypoint", "{event}");
    }
}

/// In-memory sink. Clones share the same buffer, so keep one clone and hand
/// the other to the `Pilot`.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<NavEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NavEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the buffered events and empties the buffer.
    pub fn take(&self) -> Vec<NavEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: &NavEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
