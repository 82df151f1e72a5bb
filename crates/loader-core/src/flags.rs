//! crates/loader-core/src/flags.rs
//! Severity and category flag vocabularies plus the debug-utils remapping.

use bitflags::bitflags;

bitflags! {
    /// Message severity in the loader's native vocabulary.
    ///
    /// A message carries exactly one severity bit. A recorder's severity
    /// filter may combine several bits, meaning "interested in all of these";
    /// the recorder fires only when `(filter & severity) == severity`.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Severity: u32 {
        /// Detailed chatter useful when tracing loader internals.
        const VERBOSE = 1 << 0;
        /// Informational events during normal operation.
        const INFO = 1 << 1;
        /// Suspicious but recoverable conditions.
        const WARNING = 1 << 2;
        /// Failures the caller must act on.
        const ERROR = 1 << 3;
    }
}

bitflags! {
    /// Message category in the loader's native vocabulary.
    ///
    /// Unlike [`Severity`], a single message may legitimately carry several
    /// category bits at once. Filters use the same superset rule.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Category: u32 {
        /// Events with no more specific classification.
        const GENERAL = 1 << 0;
        /// Deviations from the API specification.
        const SPECIFICATION = 1 << 1;
        /// Suboptimal but functionally correct usage.
        const PERFORMANCE = 1 << 2;
    }
}

bitflags! {
    /// Message severity in the debug-utils extension vocabulary.
    ///
    /// The extension fixes its bit positions independently of the native
    /// scheme, so the two layouts intentionally differ.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DebugUtilsSeverity: u32 {
        /// Matches [`Severity::VERBOSE`].
        const VERBOSE = 0x0001;
        /// Matches [`Severity::INFO`].
        const INFO = 0x0010;
        /// Matches [`Severity::WARNING`].
        const WARNING = 0x0100;
        /// Matches [`Severity::ERROR`].
        const ERROR = 0x1000;
    }
}

bitflags! {
    /// Message category in the debug-utils extension vocabulary.
    ///
    /// The extension calls specification-conformance messages "validation";
    /// the rename relative to [`Category::SPECIFICATION`] is deliberate and
    /// preserved by the conversions below.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DebugUtilsCategory: u32 {
        /// Matches [`Category::GENERAL`].
        const GENERAL = 0x1;
        /// Matches [`Category::SPECIFICATION`].
        const VALIDATION = 0x2;
        /// Matches [`Category::PERFORMANCE`].
        const PERFORMANCE = 0x4;
    }
}

impl Severity {
    /// Returns the lowercase name of a single-bit severity, or `"log"` when
    /// the value is empty or carries more than one bit.
    #[must_use]
    pub fn label(self) -> &'static str {
        if self == Self::VERBOSE {
            "verbose"
        } else if self == Self::INFO {
            "info"
        } else if self == Self::WARNING {
            "warning"
        } else if self == Self::ERROR {
            "error"
        } else {
            "log"
        }
    }
}

// The remaps below are total: unknown or unset bits simply produce no
// corresponding output bit, so every value of one vocabulary converts.

impl From<DebugUtilsSeverity> for Severity {
    fn from(value: DebugUtilsSeverity) -> Self {
        let mut out = Self::empty();
        if value.contains(DebugUtilsSeverity::VERBOSE) {
            out |= Self::VERBOSE;
        }
        if value.contains(DebugUtilsSeverity::INFO) {
            out |= Self::INFO;
        }
        if value.contains(DebugUtilsSeverity::WARNING) {
            out |= Self::WARNING;
        }
        if value.contains(DebugUtilsSeverity::ERROR) {
            out |= Self::ERROR;
        }
        out
    }
}

impl From<Severity> for DebugUtilsSeverity {
    fn from(value: Severity) -> Self {
        let mut out = Self::empty();
        if value.contains(Severity::VERBOSE) {
            out |= Self::VERBOSE;
        }
        if value.contains(Severity::INFO) {
            out |= Self::INFO;
        }
        if value.contains(Severity::WARNING) {
            out |= Self::WARNING;
        }
        if value.contains(Severity::ERROR) {
            out |= Self::ERROR;
        }
        out
    }
}

impl From<DebugUtilsCategory> for Category {
    fn from(value: DebugUtilsCategory) -> Self {
        let mut out = Self::empty();
        if value.contains(DebugUtilsCategory::GENERAL) {
            out |= Self::GENERAL;
        }
        if value.contains(DebugUtilsCategory::VALIDATION) {
            out |= Self::SPECIFICATION;
        }
        if value.contains(DebugUtilsCategory::PERFORMANCE) {
            out |= Self::PERFORMANCE;
        }
        out
    }
}

impl From<Category> for DebugUtilsCategory {
    fn from(value: Category) -> Self {
        let mut out = Self::empty();
        if value.contains(Category::GENERAL) {
            out |= Self::GENERAL;
        }
        if value.contains(Category::SPECIFICATION) {
            out |= Self::VALIDATION;
        }
        if value.contains(Category::PERFORMANCE) {
            out |= Self::PERFORMANCE;
        }
        out
    }
}
