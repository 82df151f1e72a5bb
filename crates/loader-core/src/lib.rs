#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `loader_core` defines the vocabulary shared by the runtime-interface
//! loader's diagnostic subsystem: the severity and category flag sets in both
//! classification schemes, the conversions between them, and the payload
//! types handed to registered recorders.
//!
//! # Design
//!
//! Two overlapping flag vocabularies coexist. The native scheme
//! ([`Severity`], [`Category`]) is what the loader and the layers beneath it
//! use when reporting events. The debug-utils extension scheme
//! ([`DebugUtilsSeverity`], [`DebugUtilsCategory`]) follows the extension's
//! own bit layout and naming; notably the extension calls
//! specification-conformance messages "validation". [`From`] conversions
//! remap bit-for-bit in both directions and are total: unknown bits drop
//! silently rather than erroring.
//!
//! # Invariants
//!
//! - A message carries exactly one severity bit; filters may carry several.
//! - A message may carry several category bits; the filter rule is the same
//!   superset test for both axes: `(filter & message) == message`.
//! - Translating native bits to the extension vocabulary and back yields the
//!   original bits for every valid combination.
//!
//! # Examples
//!
//! ```
//! use loader_core::{Category, DebugUtilsCategory, Severity};
//!
//! let filter = Severity::WARNING | Severity::ERROR;
//! assert!(filter.contains(Severity::ERROR));
//! assert!(!filter.contains(Severity::INFO));
//!
//! let translated = DebugUtilsCategory::from(Category::SPECIFICATION);
//! assert_eq!(translated, DebugUtilsCategory::VALIDATION);
//! assert_eq!(Category::from(translated), Category::SPECIFICATION);
//! ```

pub mod flags;
pub mod message;

pub use flags::{Category, DebugUtilsCategory, DebugUtilsSeverity, Severity};
pub use message::{CallbackData, DebugUtilsCallbackData, ObjectInfo, ObjectKind, SessionLabel};
