//! Integration tests for concurrent use of the dispatcher and the
//! annotation store.
//!
//! The subsystem is invoked synchronously from whatever thread the caller
//! uses, so label mutation, name registration, logging, and registry edits
//! all race in practice. These tests hammer those paths from multiple
//! threads and then assert the end state is exactly what the interleaved
//! operations imply.

use loader_core::{
    CallbackData, Category, DebugUtilsCategory, DebugUtilsSeverity, ObjectInfo, ObjectKind,
    Severity,
};
use loader_logging::{
    AnnotationStore, CallbackRecorder, LogRecorder, Logger, RecorderId, RecorderKind,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

const THREADS: u64 = 8;
const ROUNDS: usize = 64;

/// Minimal recorder counting generic deliveries.
struct Tally {
    id: RecorderId,
    count: Arc<AtomicUsize>,
}

impl LogRecorder for Tally {
    fn id(&self) -> RecorderId {
        self.id
    }

    fn kind(&self) -> RecorderKind {
        RecorderKind::Standard
    }

    fn severities(&self) -> Severity {
        Severity::all()
    }

    fn categories(&self) -> Category {
        Category::all()
    }

    fn log(&mut self, _: Severity, _: Category, _: &CallbackData) -> bool {
        self.count.fetch_add(1, Ordering::SeqCst);
        false
    }
}

/// Per-session label stacks survive concurrent mutation from one thread per
/// session plus readers resolving all sessions throughout.
#[test]
fn label_stacks_survive_concurrent_mutation() {
    let store = Arc::new(AnnotationStore::new());

    let writers: Vec<_> = (0..THREADS)
        .map(|session| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for round in 0..ROUNDS {
                    store.begin_label_region(session, format!("outer {round}"));
                    store.insert_label(session, "marker");
                    store.begin_label_region(session, format!("inner {round}"));
                    store.end_label_region(session);
                    store.end_label_region(session);
                }
                // Leave one region open so the end state is observable.
                store.begin_label_region(session, "left open");
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    for session in 0..THREADS {
                        let objects = [ObjectInfo::new(session, ObjectKind::Session)];
                        let resolved = store.populate_names_and_labels(&objects);
                        // Stacks only ever hold a handful of entries.
                        assert!(resolved.labels.len() <= 3);
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().expect("thread joins");
    }

    for session in 0..THREADS {
        let objects = [ObjectInfo::new(session, ObjectKind::Session)];
        let resolved = store.populate_names_and_labels(&objects);
        let names: Vec<_> = resolved
            .labels
            .iter()
            .map(|label| label.name.as_str())
            .collect();
        assert_eq!(names, ["left open"], "session {session}");

        store.delete_session_labels(session);
        assert!(
            store
                .populate_names_and_labels(&objects)
                .labels
                .is_empty()
        );
    }
}

/// Name registration from many threads over distinct handles leaves every
/// handle resolvable; a contested handle ends up with one of the written
/// names.
#[test]
fn object_names_survive_concurrent_registration() {
    let store = Arc::new(AnnotationStore::new());
    const CONTESTED: u64 = 0xffff;

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_index| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for round in 0..ROUNDS {
                    store.add_object_name(
                        thread_index,
                        ObjectKind::Resource,
                        format!("thread {thread_index} round {round}"),
                    );
                    store.add_object_name(
                        CONTESTED,
                        ObjectKind::Resource,
                        format!("claimed by {thread_index}"),
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread joins");
    }

    for thread_index in 0..THREADS {
        let resolved =
            store.populate_names_and_labels(&[ObjectInfo::new(thread_index, ObjectKind::Resource)]);
        let name = resolved.objects[0].name.as_deref().expect("name resolved");
        assert_eq!(name, format!("thread {thread_index} round {}", ROUNDS - 1));
    }

    let resolved =
        store.populate_names_and_labels(&[ObjectInfo::new(CONTESTED, ObjectKind::Resource)]);
    let name = resolved.objects[0].name.as_deref().expect("name resolved");
    assert!(name.starts_with("claimed by "));
}

/// Logging from several threads while the registry is being edited delivers
/// every message to the recorders present for its dispatch and never panics.
#[test]
fn dispatch_races_registry_edits_safely() {
    let logger = Arc::new(Logger::new());
    let count = Arc::new(AtomicUsize::new(0));
    logger.add_recorder(Box::new(Tally {
        id: RecorderId(1),
        count: Arc::clone(&count),
    }));

    let loggers: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    logger.log_info("poll_event", "tick");
                }
            })
        })
        .collect();

    let churn = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for round in 0..ROUNDS {
                let id = RecorderId(1000 + round as u64);
                logger.add_recorder(Box::new(CallbackRecorder::new(
                    id,
                    DebugUtilsSeverity::all(),
                    DebugUtilsCategory::all(),
                    |_, _, _| false,
                )));
                logger.remove_recorder(id);
            }
        })
    };

    for handle in loggers {
        handle.join().expect("thread joins");
    }
    churn.join().expect("churn thread joins");

    // The persistent recorder saw every message; all churned recorders are gone.
    assert_eq!(
        count.load(Ordering::SeqCst),
        (THREADS as usize) * ROUNDS
    );
    assert_eq!(logger.recorder_count(), 1);
}
