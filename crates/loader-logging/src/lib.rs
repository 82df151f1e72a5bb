#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `loader_logging` is the runtime-interface loader's diagnostic dispatch
//! subsystem. Loader internals and the runtime layers beneath them hand
//! structured messages to a [`Logger`]; the logger enriches each message with
//! caller-assigned object names and active session label regions, then fans
//! it out to every registered recorder whose severity and category filters
//! accept it.
//!
//! # Design
//!
//! Two classification schemes overlap. The loader's native scheme
//! ([`loader_core::Severity`], [`loader_core::Category`]) drives the generic
//! [`Logger::log_message`] path. The debug-utils extension scheme uses its
//! own bit layout and arrives through
//! [`Logger::log_debug_utils_message`], which translates the bits and
//! dispatches only to [`RecorderKind::DebugUtils`] recorders; recorder kind
//! is a hard gate on that path, independent of the filter masks.
//!
//! Recorders implement [`LogRecorder`] and live in an insertion-ordered
//! registry. The crate ships a line-oriented [`ConsoleRecorder`], the
//! application-callback [`CallbackRecorder`], and (behind the `tracing`
//! feature) a bridge into the `tracing` ecosystem.
//!
//! # Invariants
//!
//! - A recorder fires for a message iff `(filter & message) == message` on
//!   both the severity and the category axis.
//! - Recorder ids are unique within the registry; removal of an unknown id
//!   is a no-op.
//! - Label stacks are strictly per-session and must be deleted through
//!   [`Logger::delete_session_labels`] when the session is torn down.
//! - Every public operation is internally synchronized; callers may log,
//!   mutate annotations, and edit the registry concurrently.
//!
//! # Examples
//!
//! ```
//! use loader_core::{ObjectInfo, ObjectKind, Severity, Category};
//! use loader_logging::Logger;
//!
//! let logger = Logger::new();
//! logger.add_object_name(0x4d2, ObjectKind::Session, "main session");
//! logger.begin_label_region(0x4d2, "frame 41");
//!
//! let objects = [ObjectInfo::new(0x4d2, ObjectKind::Session)];
//! let terminate = logger.log_message(
//!     Severity::WARNING,
//!     Category::PERFORMANCE,
//!     "LOADER_SLOW_PATH",
//!     "submit_frame",
//!     "fallback blit path taken",
//!     &objects,
//! );
//! assert!(!terminate);
//! ```

mod config;
mod logger;
mod recorder;
mod sink;
mod store;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{DebugVerbosity, LOADER_DEBUG_ENV};
pub use logger::Logger;
pub use recorder::{LogRecorder, RecorderId, RecorderKind};
pub use sink::{CallbackRecorder, ConsoleRecorder, DebugUtilsCallback};
pub use store::{AnnotationStore, NamesAndLabels};
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingRecorder;
