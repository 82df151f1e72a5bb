//! crates/loader-core/src/message.rs
//! Payload types delivered to diagnostic recorders.

use std::fmt;

/// Kind of API object a diagnostic message refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectKind {
    /// Handle whose kind the caller did not identify.
    Unknown,
    /// Top-level loader instance.
    Instance,
    /// Execution context created from an instance.
    Session,
    /// Debug messenger registered through the debug-utils extension.
    Messenger,
    /// Any other runtime-owned resource.
    Resource,
}

impl ObjectKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Instance => "instance",
            Self::Session => "session",
            Self::Messenger => "messenger",
            Self::Resource => "resource",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an API object associated with a diagnostic message.
///
/// The handle is an opaque 64-bit value owned by whichever layer created the
/// object; this subsystem only resolves the caller-assigned name for it. The
/// name travels by value so the payload stays self-contained for the duration
/// of a recorder invocation.
///
/// # Examples
///
/// ```
/// use loader_core::{ObjectInfo, ObjectKind};
///
/// let object = ObjectInfo::new(0x4d2, ObjectKind::Session).with_name("main session");
/// assert_eq!(object.name.as_deref(), Some("main session"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectInfo {
    /// Opaque 64-bit object handle.
    pub handle: u64,
    /// Enumerated kind of the referenced object.
    pub kind: ObjectKind,
    /// Caller-assigned name, if one is known at this point.
    pub name: Option<String>,
}

impl ObjectInfo {
    /// Creates an unnamed object reference.
    #[must_use]
    pub const fn new(handle: u64, kind: ObjectKind) -> Self {
        Self {
            handle,
            kind,
            name: None,
        }
    }

    /// Attaches a name to the reference.
    #[must_use]
    pub fn with_name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for ObjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:#x}", self.kind, self.handle)?;
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => write!(f, " \"{name}\""),
            _ => Ok(()),
        }
    }
}

/// Named span of work on a session's label stack.
///
/// Regions are pushed by "begin" and popped by "end"; an `individual` label
/// is inserted transiently and survives only until the next label operation
/// on the same session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionLabel {
    /// Caller-supplied label text.
    pub name: String,
    /// True for a transiently inserted label, false for a begin/end region.
    pub individual: bool,
}

impl SessionLabel {
    /// Creates a begin/end region label.
    #[must_use]
    pub fn region<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            individual: false,
        }
    }

    /// Creates a transiently inserted label.
    #[must_use]
    pub fn individual<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            individual: true,
        }
    }
}

/// Generic message shape delivered to every recorder.
///
/// Built by the dispatcher immediately before fan-out: object names and
/// active session labels have already been resolved, so recorders can render
/// the payload without consulting any shared state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallbackData {
    /// Short identifier naming the condition being reported.
    pub message_id: String,
    /// Name of the API operation that produced the message.
    pub operation: String,
    /// Free-text description.
    pub message: String,
    /// Objects associated with the message, names resolved where known.
    pub objects: Vec<ObjectInfo>,
    /// Active labels of every session referenced by `objects`, oldest first.
    pub labels: Vec<SessionLabel>,
}

/// Extension message shape matching the debug-utils callback signature.
///
/// Unlike [`CallbackData`] this payload arrives from outside the loader and
/// may already carry object names and session labels of its own; augmentation
/// extends it without overwriting caller-supplied values. All strings are
/// owned by the value, so the payload remains valid for the whole recorder
/// invocation without any lifetime bookkeeping.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DebugUtilsCallbackData {
    /// Short identifier naming the condition being reported.
    pub message_id: String,
    /// Name of the API function the message concerns.
    pub function_name: String,
    /// Free-text description.
    pub message: String,
    /// Objects associated with the message.
    pub objects: Vec<ObjectInfo>,
    /// Session labels active when the message was produced, oldest first.
    pub session_labels: Vec<SessionLabel>,
}

impl DebugUtilsCallbackData {
    /// Creates a payload with no associated objects or labels.
    #[must_use]
    pub fn new<I, F, M>(message_id: I, function_name: F, message: M) -> Self
    where
        I: Into<String>,
        F: Into<String>,
        M: Into<String>,
    {
        Self {
            message_id: message_id.into(),
            function_name: function_name.into(),
            message: message.into(),
            objects: Vec::new(),
            session_labels: Vec::new(),
        }
    }

    /// Replaces the associated object list.
    #[must_use]
    pub fn with_objects(mut self, objects: Vec<ObjectInfo>) -> Self {
        self.objects = objects;
        self
    }
}

impl From<&CallbackData> for DebugUtilsCallbackData {
    /// Reshapes a generic payload for delivery to a debug-utils messenger.
    fn from(data: &CallbackData) -> Self {
        Self {
            message_id: data.message_id.clone(),
            function_name: data.operation.clone(),
            message: data.message.clone(),
            objects: data.objects.clone(),
            session_labels: data.labels.clone(),
        }
    }
}
