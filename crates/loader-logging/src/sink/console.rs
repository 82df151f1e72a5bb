//! crates/loader-logging/src/sink/console.rs
//! Line-oriented recorder writing formatted diagnostics to a stream.

use crate::recorder::{LogRecorder, RecorderId, RecorderKind};
use loader_core::{CallbackData, Category, Severity};
use std::io::{self, Write};

/// Recorder that renders each accepted message as one or more lines on an
/// [`io::Write`] target.
///
/// The first line carries the severity word, the message text, and the
/// originating operation and message id; associated objects and active
/// session labels follow on indented continuation lines. A failed write is
/// absorbed: the console is a best-effort sink and never asks the process to
/// terminate.
///
/// # Examples
///
/// Collect rendered diagnostics into an in-memory buffer:
///
/// ```
/// use loader_core::{CallbackData, Category, Severity};
/// use loader_logging::{ConsoleRecorder, LogRecorder, RecorderId};
///
/// let mut recorder = ConsoleRecorder::with_writer(
///     RecorderId::DEFAULT,
///     Severity::all(),
///     Category::all(),
///     Vec::new(),
/// );
///
/// let data = CallbackData {
///     message_id: "LOADER_RUNTIME_FAILURE".into(),
///     operation: "create_session".into(),
///     message: "runtime rejected the session".into(),
///     objects: Vec::new(),
///     labels: Vec::new(),
/// };
/// recorder.log(Severity::ERROR, Category::GENERAL, &data);
///
/// let output = String::from_utf8(recorder.into_inner()).unwrap();
/// assert!(output.starts_with("loader error: runtime rejected the session"));
/// ```
#[derive(Debug)]
pub struct ConsoleRecorder<W> {
    id: RecorderId,
    severities: Severity,
    categories: Category,
    writer: W,
}

impl ConsoleRecorder<io::Stderr> {
    /// The recorder installed unconditionally at logger construction:
    /// errors of any category, rendered to standard error.
    #[must_use]
    pub fn stderr_errors() -> Self {
        Self::with_writer(
            RecorderId::DEFAULT,
            Severity::ERROR,
            Category::all(),
            io::stderr(),
        )
    }
}

impl ConsoleRecorder<io::Stdout> {
    /// Standard-output recorder with a caller-chosen severity mask and
    /// unrestricted categories, used when debug output is enabled through
    /// configuration.
    #[must_use]
    pub fn stdout_with_severities(severities: Severity) -> Self {
        Self::with_writer(
            RecorderId::DEBUG_CONSOLE,
            severities,
            Category::all(),
            io::stdout(),
        )
    }
}

impl<W> ConsoleRecorder<W> {
    /// Creates a recorder over an arbitrary writer.
    #[must_use]
    pub fn with_writer(id: RecorderId, severities: Severity, categories: Category, writer: W) -> Self {
        Self {
            id,
            severities,
            categories,
            writer,
        }
    }

    /// Consumes the recorder and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn render<W: Write>(
    writer: &mut W,
    severity: Severity,
    category: Category,
    data: &CallbackData,
) -> io::Result<()> {
    write!(writer, "loader {}", severity.label())?;
    if category != Category::GENERAL {
        write!(writer, " ({})", category_names(category))?;
    }
    write!(writer, ": {}", data.message)?;
    if !data.operation.is_empty() || !data.message_id.is_empty() {
        write!(writer, " [{} | {}]", data.operation, data.message_id)?;
    }
    writeln!(writer)?;

    if !data.objects.is_empty() {
        let rendered: Vec<String> = data.objects.iter().map(ToString::to_string).collect();
        writeln!(writer, "    objects: {}", rendered.join(", "))?;
    }
    if !data.labels.is_empty() {
        let rendered: Vec<&str> = data.labels.iter().map(|label| label.name.as_str()).collect();
        writeln!(writer, "    labels: {}", rendered.join(" > "))?;
    }
    Ok(())
}

fn category_names(category: Category) -> String {
    let names: Vec<String> = category
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect();
    names.join("|")
}

impl<W: Write + Send> LogRecorder for ConsoleRecorder<W> {
    fn id(&self) -> RecorderId {
        self.id
    }

    fn kind(&self) -> RecorderKind {
        RecorderKind::Standard
    }

    fn severities(&self) -> Severity {
        self.severities
    }

    fn categories(&self) -> Category {
        self.categories
    }

    fn log(&mut self, severity: Severity, category: Category, data: &CallbackData) -> bool {
        // Best effort: a console that went away must not stop other sinks.
        let _ = render(&mut self.writer, severity, category, data);
        false
    }
}
