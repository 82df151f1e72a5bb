//! crates/loader-logging/src/recorder.rs
//! Recorder abstraction: the capability set every registered sink implements.

use loader_core::{
    CallbackData, Category, DebugUtilsCallbackData, DebugUtilsCategory, DebugUtilsSeverity,
    Severity,
};
use std::fmt;

/// Identifier a recorder is registered under.
///
/// Unique within the registry at any instant and used solely for later
/// removal. Callback recorders receive their id from whoever hands out the
/// messenger handle; the built-in console recorders use the reserved ids
/// below, so externally assigned ids should start above them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RecorderId(pub u64);

impl RecorderId {
    /// Id of the error recorder installed unconditionally at construction.
    pub const DEFAULT: Self = Self(0);
    /// Id of the optional debug-output recorder enabled by configuration.
    pub const DEBUG_CONSOLE: Self = Self(1);
}

impl fmt::Display for RecorderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Discriminates generic recorders from debug-utils messengers.
///
/// The extension dispatch path filters on this kind as a hard gate: a
/// [`RecorderKind::Standard`] recorder never sees extension messages even
/// when its severity and category filters would match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecorderKind {
    /// Recorder fed by the loader's generic logging path only.
    Standard,
    /// Debug-utils messenger, fed by both dispatch paths.
    DebugUtils,
}

/// A registered diagnostic sink.
///
/// Recorders are owned by the registry once added and are invoked
/// synchronously on whatever thread logged the message, with the registry
/// lock held. Implementations must not call back into the owning logger.
///
/// A recorder that cannot render a message reports that only through its
/// return value; the dispatcher neither retries nor removes it.
pub trait LogRecorder: Send {
    /// Identifier used for removal.
    fn id(&self) -> RecorderId;

    /// Whether this recorder participates in the extension dispatch path.
    fn kind(&self) -> RecorderKind;

    /// Severity bits this recorder is interested in.
    fn severities(&self) -> Severity;

    /// Category bits this recorder is interested in.
    fn categories(&self) -> Category;

    /// Returns true when both filters contain all of the message's bits.
    fn accepts(&self, severity: Severity, category: Category) -> bool {
        (self.severities() & severity) == severity && (self.categories() & category) == category
    }

    /// Renders a generic message. Returns true when the hosting process
    /// should terminate.
    fn log(&mut self, severity: Severity, category: Category, data: &CallbackData) -> bool;

    /// Renders an extension message. Returns true when the hosting process
    /// should terminate.
    ///
    /// The default body ignores the message; only debug-utils recorders
    /// override it.
    fn log_debug_utils(
        &mut self,
        severity: DebugUtilsSeverity,
        category: DebugUtilsCategory,
        data: &DebugUtilsCallbackData,
    ) -> bool {
        let _ = (severity, category, data);
        false
    }
}
