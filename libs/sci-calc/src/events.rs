//! Diagnostic channel for engine operations
//!
//! The engine reports every operation outcome to an [`EventSink`]. Reports are
//! a side channel: they never carry computational results that callers need,
//! so tests assert on engine state and only inspect events when the channel
//! itself is under test.

use crate::angle::AngleMode;
use crate::error::CalcError;
use crate::state::{CalculatorState, PendingOperation};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};

/// Status after a successful mutating operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<PendingOperation>,
    pub angle_mode: AngleMode,
}

impl StatusReport {
    pub fn from_state(state: &CalculatorState) -> Self {
        Self {
            display: state.display().to_string(),
            pending: state.pending(),
            angle_mode: state.angle_mode(),
        }
    }
}

/// Diagnostic event emitted by the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    Status(StatusReport),
    AngleModeChanged { angle_mode: AngleMode },
    /// Operation refused; `reset` tells whether the state was cleared
    Rejected { error: String, reset: bool },
}

impl EngineEvent {
    pub fn rejected(error: &CalcError) -> Self {
        Self::Rejected {
            error: error.to_string(),
            reset: error.resets_state(),
        }
    }
}

/// Receiver for engine diagnostics
///
/// Implementations can log, record, or forward events elsewhere.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &EngineEvent);
}

/// Default sink: structured tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &EngineEvent) {
        match event {
            EngineEvent::Status(report) => match report.pending {
                Some(p) => info!(
                    display = %report.display,
                    accumulator = p.accumulator,
                    operator = %p.operator,
                    angle_mode = %report.angle_mode,
                    "status"
                ),
                None => info!(
                    display = %report.display,
                    angle_mode = %report.angle_mode,
                    "status"
                ),
            },
            EngineEvent::AngleModeChanged { angle_mode } => {
                info!(angle_mode = %angle_mode, "angle mode changed");
            },
            EngineEvent::Rejected { error, reset } => {
                warn!(reset = *reset, "rejected: {}", error);
            },
        }
    }
}

/// In-memory sink for testing and embedding
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<EngineEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events
    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.lock().clone()
    }

    /// Remove and return recorded events
    pub fn drain(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn last(&self) -> Option<EngineEvent> {
        self.events.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &EngineEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Null sink - diagnostics are discarded
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &EngineEvent) {}
}
