//! crates/loader-logging/src/config.rs
//! Debug-output verbosity keyword consulted at logger construction.

use loader_core::Severity;

/// Environment variable holding the loader's debug verbosity keyword.
pub const LOADER_DEBUG_ENV: &str = "LOADER_DEBUG";

/// Verbosity keyword enabling the optional standard-output recorder.
///
/// Each keyword implies all severities above it, so `"info"` output includes
/// warnings and errors as well.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugVerbosity {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational messages, warnings, and errors.
    Info,
    /// Everything, including verbose chatter.
    All,
}

impl DebugVerbosity {
    /// Parses a configuration keyword.
    ///
    /// Recognised keywords are `"error"`, `"warn"`, `"info"`, and
    /// `"all"`/`"verbose"` (synonyms). Returns `None` for anything else;
    /// an unrecognised keyword disables the debug recorder rather than
    /// raising an error.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "all" | "verbose" => Some(Self::All),
            _ => None,
        }
    }

    /// Cumulative severity mask implied by the keyword.
    #[must_use]
    pub const fn severity_mask(self) -> Severity {
        match self {
            Self::Error => Severity::ERROR,
            Self::Warn => Severity::ERROR.union(Severity::WARNING),
            Self::Info => Severity::ERROR
                .union(Severity::WARNING)
                .union(Severity::INFO),
            Self::All => Severity::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_parse_to_their_levels() {
        assert_eq!(DebugVerbosity::from_keyword("error"), Some(DebugVerbosity::Error));
        assert_eq!(DebugVerbosity::from_keyword("warn"), Some(DebugVerbosity::Warn));
        assert_eq!(DebugVerbosity::from_keyword("info"), Some(DebugVerbosity::Info));
        assert_eq!(DebugVerbosity::from_keyword("all"), Some(DebugVerbosity::All));
        assert_eq!(DebugVerbosity::from_keyword("verbose"), Some(DebugVerbosity::All));
    }

    #[test]
    fn unrecognised_keywords_parse_to_nothing() {
        assert_eq!(DebugVerbosity::from_keyword(""), None);
        assert_eq!(DebugVerbosity::from_keyword("debug"), None);
        assert_eq!(DebugVerbosity::from_keyword("ERROR"), None);
        assert_eq!(DebugVerbosity::from_keyword("warn "), None);
    }

    #[test]
    fn masks_are_cumulative() {
        assert_eq!(DebugVerbosity::Error.severity_mask(), Severity::ERROR);
        assert_eq!(
            DebugVerbosity::Warn.severity_mask(),
            Severity::ERROR | Severity::WARNING
        );
        assert_eq!(
            DebugVerbosity::Info.severity_mask(),
            Severity::ERROR | Severity::WARNING | Severity::INFO
        );
        assert_eq!(DebugVerbosity::All.severity_mask(), Severity::all());
    }

    #[test]
    fn info_mask_rejects_verbose_only_messages() {
        let mask = DebugVerbosity::Info.severity_mask();
        assert!(!mask.contains(Severity::VERBOSE));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn verbosity_serde_round_trip() {
        let encoded = serde_json::to_string(&DebugVerbosity::Warn).expect("serialize keyword");
        let decoded: DebugVerbosity = serde_json::from_str(&encoded).expect("deserialize keyword");
        assert_eq!(decoded, DebugVerbosity::Warn);
    }
}
