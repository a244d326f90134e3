//! Built-in observers.
//!
//! | Observer               | Handles      | Output              |
//! |------------------------|--------------|---------------------|
//! | [`WarningObserver`]    | warnings     | console             |
//! | [`ErrorObserver`]      | errors       | log file            |
//! | [`FatalErrorObserver`] | fatal errors | console and log file |
//!
//! Sink failures never reach the notifying [`Observable`](crate::core::Observable).
//! Each observer counts the lines it had to drop and, with the `tracing`
//! feature, emits a warning event.

mod error;
mod fatal;
mod warning;

pub use error::ErrorObserver;
pub use fatal::FatalErrorObserver;
pub use warning::WarningObserver;

use crate::error::Result;
use std::cell::Cell;

/// Swallow a sink failure, recording it in `dropped`.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn absorb(result: Result<()>, dropped: &Cell<usize>) {
    if let Err(err) = result {
        dropped.set(dropped.get() + 1);
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %err, "notification sink unavailable, line dropped");
    }
}
