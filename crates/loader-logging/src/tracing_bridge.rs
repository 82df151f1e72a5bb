//! crates/loader-logging/src/tracing_bridge.rs
//! Bridge recorder forwarding accepted messages to the tracing crate.
//!
//! Applications that already run a `tracing` subscriber can register this
//! recorder instead of (or alongside) the console sinks, letting loader
//! diagnostics flow into their existing pipeline. Severities map onto
//! tracing levels: VERBOSE becomes `trace`, the rest keep their names.

use crate::recorder::{LogRecorder, RecorderId, RecorderKind};
use loader_core::{CallbackData, Category, Severity};

/// Recorder that re-emits each accepted message as a `tracing` event.
///
/// Filtering still happens through the recorder's own severity and category
/// masks before the event is emitted; subscriber-side filtering applies on
/// top of that. The recorder never requests process termination.
#[derive(Clone, Copy, Debug)]
pub struct TracingRecorder {
    id: RecorderId,
    severities: Severity,
    categories: Category,
}

impl TracingRecorder {
    /// Creates a bridge recorder with the given filters.
    #[must_use]
    pub const fn new(id: RecorderId, severities: Severity, categories: Category) -> Self {
        Self {
            id,
            severities,
            categories,
        }
    }

    /// Bridge accepting every message, leaving filtering to the subscriber.
    #[must_use]
    pub const fn unfiltered(id: RecorderId) -> Self {
        Self::new(id, Severity::all(), Category::all())
    }
}

impl LogRecorder for TracingRecorder {
    fn id(&self) -> RecorderId {
        self.id
    }

    fn kind(&self) -> RecorderKind {
        RecorderKind::Standard
    }

    fn severities(&self) -> Severity {
        self.severities
    }

    fn categories(&self) -> Category {
        self.categories
    }

    fn log(&mut self, severity: Severity, _category: Category, data: &CallbackData) -> bool {
        let operation = data.operation.as_str();
        let message_id = data.message_id.as_str();
        if severity == Severity::ERROR {
            tracing::error!(target: "loader", operation, message_id, "{}", data.message);
        } else if severity == Severity::WARNING {
            tracing::warn!(target: "loader", operation, message_id, "{}", data.message);
        } else if severity == Severity::INFO {
            tracing::info!(target: "loader", operation, message_id, "{}", data.message);
        } else {
            tracing::trace!(target: "loader", operation, message_id, "{}", data.message);
        }
        false
    }
}
