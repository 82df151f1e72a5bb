//! crates/loader-logging/src/sink/callback.rs
//! Recorder forwarding messages to an application-registered function.

use crate::recorder::{LogRecorder, RecorderId, RecorderKind};
use loader_core::{
    CallbackData, Category, DebugUtilsCallbackData, DebugUtilsCategory, DebugUtilsSeverity,
    Severity,
};

/// Function signature a debug-utils messenger registers.
///
/// The return value is the messenger's "should terminate" vote: `true` asks
/// the hosting process to exit once dispatch completes.
pub type DebugUtilsCallback =
    Box<dyn Fn(DebugUtilsSeverity, DebugUtilsCategory, &DebugUtilsCallbackData) -> bool + Send + Sync>;

/// Recorder backed by an application-supplied callback.
///
/// Registered through the debug-utils extension, so it participates in both
/// dispatch paths: extension messages are forwarded as-is, while generic
/// loader messages are reshaped into the extension payload and translated
/// into the extension's flag vocabulary first. The filters are supplied in
/// the extension vocabulary at registration and stored natively.
pub struct CallbackRecorder {
    id: RecorderId,
    severities: Severity,
    categories: Category,
    callback: DebugUtilsCallback,
}

impl CallbackRecorder {
    /// Creates a recorder for a registered messenger.
    ///
    /// `id` is assigned by the messenger's owner and is the value later
    /// passed to remove the recorder.
    #[must_use]
    pub fn new<F>(
        id: RecorderId,
        severities: DebugUtilsSeverity,
        categories: DebugUtilsCategory,
        callback: F,
    ) -> Self
    where
        F: Fn(DebugUtilsSeverity, DebugUtilsCategory, &DebugUtilsCallbackData) -> bool
            + Send
            + Sync
            + 'static,
    {
        Self {
            id,
            severities: severities.into(),
            categories: categories.into(),
            callback: Box::new(callback),
        }
    }
}

impl std::fmt::Debug for CallbackRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRecorder")
            .field("id", &self.id)
            .field("severities", &self.severities)
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

impl LogRecorder for CallbackRecorder {
    fn id(&self) -> RecorderId {
        self.id
    }

    fn kind(&self) -> RecorderKind {
        RecorderKind::DebugUtils
    }

    fn severities(&self) -> Severity {
        self.severities
    }

    fn categories(&self) -> Category {
        self.categories
    }

    fn log(&mut self, severity: Severity, category: Category, data: &CallbackData) -> bool {
        let payload = DebugUtilsCallbackData::from(data);
        (self.callback)(severity.into(), category.into(), &payload)
    }

    fn log_debug_utils(
        &mut self,
        severity: DebugUtilsSeverity,
        category: DebugUtilsCategory,
        data: &DebugUtilsCallbackData,
    ) -> bool {
        (self.callback)(severity, category, data)
    }
}
