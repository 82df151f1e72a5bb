//! crates/loader-logging/src/sink/mod.rs
//! Concrete recorder implementations shipped with the loader.

mod callback;
mod console;

pub use callback::{CallbackRecorder, DebugUtilsCallback};
pub use console::ConsoleRecorder;
