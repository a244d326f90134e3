//! Output sinks used by the built-in observers.
//!
//! Sinks report failures as [`SinkError`](crate::error::SinkError); deciding
//! whether to absorb them is left to the caller.

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::FileSink;
