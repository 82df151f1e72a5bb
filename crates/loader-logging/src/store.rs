//! crates/loader-logging/src/store.rs
//! Object-name table and per-session label stacks used to enrich messages.

use loader_core::{DebugUtilsCallbackData, ObjectInfo, ObjectKind, SessionLabel};
use rustc_hash::FxHashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Object names and active labels resolved for one outgoing message.
#[derive(Clone, Debug, Default)]
pub struct NamesAndLabels {
    /// Input descriptors with names (and unknown kinds) filled in, order and
    /// count preserved.
    pub objects: Vec<ObjectInfo>,
    /// Active labels of every session present in `objects`, oldest first.
    pub labels: Vec<SessionLabel>,
}

#[derive(Debug)]
struct StoredName {
    kind: ObjectKind,
    name: String,
}

#[derive(Debug, Default)]
struct Tables {
    object_names: FxHashMap<u64, StoredName>,
    session_labels: FxHashMap<u64, Vec<SessionLabel>>,
}

/// Synchronized store for object names and per-session label regions.
///
/// Every operation takes the store's single mutex, so concurrent callers can
/// freely mix name registration, label mutation, and message augmentation.
/// Label stacks are strictly per-session; deleting a session's stack is the
/// owner's obligation at session teardown, otherwise the entry stays behind.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    inner: Mutex<Tables>,
}

impl AnnotationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Binds `name` to `handle`, replacing any previous binding regardless of
    /// the kind it was registered under. An empty name forgets the handle.
    pub fn add_object_name<T: Into<String>>(&self, handle: u64, kind: ObjectKind, name: T) {
        let name = name.into();
        let mut tables = self.tables();
        if name.is_empty() {
            tables.object_names.remove(&handle);
        } else {
            tables.object_names.insert(handle, StoredName { kind, name });
        }
    }

    /// Pushes a label region onto the session's stack, creating the stack on
    /// first use. A trailing individual label is dropped first.
    pub fn begin_label_region<T: Into<String>>(&self, session: u64, name: T) {
        let mut tables = self.tables();
        let stack = tables.session_labels.entry(session).or_default();
        drop_individual(stack);
        stack.push(SessionLabel::region(name));
    }

    /// Pops the session's innermost label region, if any. A trailing
    /// individual label is dropped first; an empty or missing stack is a
    /// silent no-op.
    pub fn end_label_region(&self, session: u64) {
        let mut tables = self.tables();
        if let Some(stack) = tables.session_labels.get_mut(&session) {
            drop_individual(stack);
            stack.pop();
        }
    }

    /// Appends an individual label to the session's stack. It stays active
    /// only until the next label operation on the same session.
    pub fn insert_label<T: Into<String>>(&self, session: u64, name: T) {
        let mut tables = self.tables();
        let stack = tables.session_labels.entry(session).or_default();
        drop_individual(stack);
        stack.push(SessionLabel::individual(name));
    }

    /// Discards the session's entire label stack. Idempotent; called from the
    /// session-teardown path before the handle value may be reused.
    pub fn delete_session_labels(&self, session: u64) {
        self.tables().session_labels.remove(&session);
    }

    /// Resolves names and active labels for the given objects without
    /// mutating the store.
    ///
    /// Descriptors keep their input order and count. A caller-supplied
    /// non-empty name wins over the table; otherwise the stored name is used,
    /// or the name stays absent. Descriptors whose kind is
    /// [`ObjectKind::Unknown`] pick up the kind the handle was registered
    /// under. Labels of every session object are flattened oldest-pushed
    /// first.
    #[must_use]
    pub fn populate_names_and_labels(&self, objects: &[ObjectInfo]) -> NamesAndLabels {
        let tables = self.tables();

        let objects: Vec<ObjectInfo> = objects
            .iter()
            .map(|object| resolve_object(&tables, object))
            .collect();

        let mut labels = Vec::new();
        for object in &objects {
            if object.kind == ObjectKind::Session {
                if let Some(stack) = tables.session_labels.get(&object.handle) {
                    labels.extend(stack.iter().cloned());
                }
            }
        }

        NamesAndLabels { objects, labels }
    }

    /// Clones an extension payload and extends it with stored names and
    /// active session labels.
    ///
    /// Resolution follows the same policy as
    /// [`populate_names_and_labels`](Self::populate_names_and_labels):
    /// names the payload already carries are preserved. Labels resolved from
    /// the store are appended after any labels the payload brought along.
    #[must_use]
    pub fn augment_callback_data(&self, data: &DebugUtilsCallbackData) -> DebugUtilsCallbackData {
        let tables = self.tables();
        let mut augmented = data.clone();

        for object in &mut augmented.objects {
            *object = resolve_object(&tables, object);
        }

        for object in &augmented.objects {
            if object.kind == ObjectKind::Session {
                if let Some(stack) = tables.session_labels.get(&object.handle) {
                    augmented.session_labels.extend(stack.iter().cloned());
                }
            }
        }

        augmented
    }
}

fn drop_individual(stack: &mut Vec<SessionLabel>) {
    if stack.last().is_some_and(|label| label.individual) {
        stack.pop();
    }
}

fn resolve_object(tables: &Tables, object: &ObjectInfo) -> ObjectInfo {
    let mut resolved = object.clone();
    if let Some(stored) = tables.object_names.get(&object.handle) {
        if resolved.name.as_deref().is_none_or(str::is_empty) {
            resolved.name = Some(stored.name.clone());
        }
        if resolved.kind == ObjectKind::Unknown {
            resolved.kind = stored.kind;
        }
    }
    resolved
}
