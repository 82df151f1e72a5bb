//! crates/loader-logging/src/logger.rs
//! Recorder registry, dispatch algorithm, and the process-wide instance.

use crate::config::{DebugVerbosity, LOADER_DEBUG_ENV};
use crate::recorder::{LogRecorder, RecorderId, RecorderKind};
use crate::sink::ConsoleRecorder;
use crate::store::AnnotationStore;
use loader_core::{
    CallbackData, Category, DebugUtilsCallbackData, DebugUtilsCategory, DebugUtilsSeverity,
    ObjectInfo, ObjectKind, Severity,
};
use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Message id used for diagnostics the loader produces about itself.
const LOADER_MESSAGE_ID: &str = "loader";

/// Diagnostic dispatcher owning the recorder registry and the annotation
/// store.
///
/// Messages flow one way: a caller logs, the payload is enriched with object
/// names and active session labels, and every recorder whose severity and
/// category filters contain the message's bits is invoked in registration
/// order. Each recorder's "should terminate" vote is OR-accumulated and
/// returned; acting on it is the caller's responsibility.
///
/// Most code uses the process-wide instance via [`Logger::global`], but a
/// `Logger` is an ordinary value: embedders and tests construct their own and
/// thread it through explicitly.
///
/// # Examples
///
/// ```
/// use loader_logging::Logger;
///
/// let logger = Logger::new();
/// let terminate = logger.log_error("create_instance", "no runtime available");
/// assert!(!terminate);
/// ```
#[derive(Default)]
pub struct Logger {
    recorders: Mutex<Vec<Box<dyn LogRecorder>>>,
    annotations: AnnotationStore,
}

impl Logger {
    /// Creates a logger with an empty registry and no stored annotations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logger pre-populated the way the process-wide instance is:
    /// a standard-error recorder for errors of any category, plus a
    /// standard-output recorder covering the given verbosity when one is
    /// requested.
    #[must_use]
    pub fn with_verbosity(verbosity: Option<DebugVerbosity>) -> Self {
        let logger = Self::new();
        logger.add_recorder(Box::new(ConsoleRecorder::stderr_errors()));
        if let Some(verbosity) = verbosity {
            logger.add_recorder(Box::new(ConsoleRecorder::stdout_with_severities(
                verbosity.severity_mask(),
            )));
        }
        logger
    }

    /// Creates a logger configured from the [`LOADER_DEBUG_ENV`] environment
    /// variable. An absent or unrecognised keyword enables no debug output.
    #[must_use]
    pub fn from_env() -> Self {
        let verbosity = env::var(LOADER_DEBUG_ENV)
            .ok()
            .as_deref()
            .and_then(DebugVerbosity::from_keyword);
        Self::with_verbosity(verbosity)
    }

    /// Returns the process-wide logger, constructing it on first access.
    ///
    /// Construction happens exactly once even under concurrent first use and
    /// follows [`from_env`](Self::from_env). The instance lives until process
    /// exit; there is no shutdown call.
    #[must_use]
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<Logger> = OnceLock::new();
        INSTANCE.get_or_init(Self::from_env)
    }

    fn recorders(&self) -> MutexGuard<'_, Vec<Box<dyn LogRecorder>>> {
        self.recorders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a recorder to the registry.
    pub fn add_recorder(&self, recorder: Box<dyn LogRecorder>) {
        self.recorders().push(recorder);
    }

    /// Removes the recorder registered under `id`. Removing an id that is not
    /// present is a no-op.
    pub fn remove_recorder(&self, id: RecorderId) {
        let mut recorders = self.recorders();
        if let Some(index) = recorders.iter().position(|recorder| recorder.id() == id) {
            recorders.remove(index);
        }
    }

    /// Number of currently registered recorders.
    #[must_use]
    pub fn recorder_count(&self) -> usize {
        self.recorders().len()
    }

    /// Dispatches a generic loader message.
    ///
    /// The payload is enriched with stored object names and the active labels
    /// of any session referenced in `objects`, then offered to every recorder
    /// passing the filter test `(filter & message) == message` on both axes.
    /// Returns true when any recorder asked the process to terminate; one
    /// recorder's failure never prevents the next from receiving the message.
    pub fn log_message(
        &self,
        severity: Severity,
        category: Category,
        message_id: &str,
        operation: &str,
        message: &str,
        objects: &[ObjectInfo],
    ) -> bool {
        let resolved = self.annotations.populate_names_and_labels(objects);
        let data = CallbackData {
            message_id: message_id.to_owned(),
            operation: operation.to_owned(),
            message: message.to_owned(),
            objects: resolved.objects,
            labels: resolved.labels,
        };

        let mut terminate = false;
        for recorder in self.recorders().iter_mut() {
            if recorder.accepts(severity, category) {
                terminate |= recorder.log(severity, category, &data);
            }
        }
        terminate
    }

    /// Dispatches a message arriving through the debug-utils extension.
    ///
    /// Severity and category are translated into the native vocabulary for
    /// filtering; the payload is augmented without overwriting
    /// caller-supplied names. Only [`RecorderKind::DebugUtils`] recorders are
    /// considered; kind is a hard gate, not a filter preference.
    pub fn log_debug_utils_message(
        &self,
        severity: DebugUtilsSeverity,
        category: DebugUtilsCategory,
        data: &DebugUtilsCallbackData,
    ) -> bool {
        let native_severity = Severity::from(severity);
        let native_category = Category::from(category);
        let augmented = self.annotations.augment_callback_data(data);

        let mut terminate = false;
        for recorder in self.recorders().iter_mut() {
            if recorder.kind() != RecorderKind::DebugUtils
                || !recorder.accepts(native_severity, native_category)
            {
                continue;
            }
            terminate |= recorder.log_debug_utils(severity, category, &augmented);
        }
        terminate
    }

    /// Logs an error the loader produced about itself.
    pub fn log_error(&self, operation: &str, message: &str) -> bool {
        self.log_message(
            Severity::ERROR,
            Category::GENERAL,
            LOADER_MESSAGE_ID,
            operation,
            message,
            &[],
        )
    }

    /// Logs a warning the loader produced about itself.
    pub fn log_warning(&self, operation: &str, message: &str) -> bool {
        self.log_message(
            Severity::WARNING,
            Category::GENERAL,
            LOADER_MESSAGE_ID,
            operation,
            message,
            &[],
        )
    }

    /// Logs an informational message the loader produced about itself.
    pub fn log_info(&self, operation: &str, message: &str) -> bool {
        self.log_message(
            Severity::INFO,
            Category::GENERAL,
            LOADER_MESSAGE_ID,
            operation,
            message,
            &[],
        )
    }

    /// Logs verbose chatter the loader produced about itself.
    pub fn log_verbose(&self, operation: &str, message: &str) -> bool {
        self.log_message(
            Severity::VERBOSE,
            Category::GENERAL,
            LOADER_MESSAGE_ID,
            operation,
            message,
            &[],
        )
    }

    /// Binds a caller-assigned name to an object handle.
    pub fn add_object_name<T: Into<String>>(&self, handle: u64, kind: ObjectKind, name: T) {
        self.annotations.add_object_name(handle, kind, name);
    }

    /// Opens a label region on the session's stack.
    pub fn begin_label_region<T: Into<String>>(&self, session: u64, name: T) {
        self.annotations.begin_label_region(session, name);
    }

    /// Closes the session's innermost label region, if any.
    pub fn end_label_region(&self, session: u64) {
        self.annotations.end_label_region(session);
    }

    /// Inserts a transient label on the session's stack.
    pub fn insert_label<T: Into<String>>(&self, session: u64, name: T) {
        self.annotations.insert_label(session, name);
    }

    /// Discards all label state for a session. Must be called from the
    /// session-teardown path before the handle value is reused.
    pub fn delete_session_labels(&self, session: u64) {
        self.annotations.delete_session_labels(session);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("recorder_count", &self.recorder_count())
            .finish_non_exhaustive()
    }
}
