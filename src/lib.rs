//! # severity-notify
//!
//! A synchronous observer hub for warning, error and fatal notifications.
//!
//! ## Overview
//!
//! An [`Observable`](core::Observable) keeps an ordered registry of borrowed
//! [`Observer`](core::Observer)s and fans each notification out to all of them,
//! in registration order, before returning. Observers implement only the
//! handlers they care about; the rest default to no-ops.
//!
//! Three observers are built in:
//! - [`WarningObserver`](observers::WarningObserver) prints warnings
//! - [`ErrorObserver`](observers::ErrorObserver) appends errors to a log file
//! - [`FatalErrorObserver`](observers::FatalErrorObserver) does both for fatal errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use severity_notify::prelude::*;
//!
//! let warnings = WarningObserver::new();
//! let errors = ErrorObserver::new("errors.log");
//! let fatal = FatalErrorObserver::new("fatal_errors.log");
//!
//! let mut observable = Observable::new();
//! observable.add_observer(&warnings);
//! observable.add_observer(&errors);
//! observable.add_observer(&fatal);
//!
//! observable.warning("cache nearly full");     // stdout
//! observable.error("request failed");          // errors.log
//! observable.fatal_error("state corrupted");   // stdout + fatal_errors.log
//!
//! observable.remove_observer(&errors);
//! observable.error("nobody records this");
//! ```
//!
//! ## Failure handling
//!
//! Sinks that cannot be written (a log file in a missing directory, a closed
//! stdout) never fail a notification. The observer drops the line and counts
//! it; with the `tracing` feature it also emits a warning event.
//!
//! ## Feature Flags
//!
//! - `settings` (default): load [`LogPaths`](settings::LogPaths) from a
//!   YAML, TOML or JSON file
//! - `tracing` (default): debug events for registry changes and dispatch,
//!   warning events for dropped lines

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod observers;
pub mod sinks;

#[cfg(feature = "settings")]
pub mod settings;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{Observable, Observer, Severity};
    pub use crate::error::{Result, SinkError};
    pub use crate::observers::{ErrorObserver, FatalErrorObserver, WarningObserver};

    #[cfg(feature = "settings")]
    pub use crate::settings::LogPaths;
}
