//! Core observer and notification hub types.

mod observable;
mod observer;

pub use observable::Observable;
pub use observer::{Observer, Severity};
