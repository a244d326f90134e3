//! The notification hub.

use crate::core::{Observer, Severity};

/// Registry of observers with synchronous fan-out dispatch.
///
/// The registry borrows its observers: each one must outlive the `Observable`
/// it is registered with, and the compiler enforces it through `'a`.
/// Observers are invoked in registration order. The same observer may be
/// registered more than once, in which case it is notified once per entry.
///
/// Dispatch takes `&self` while registration takes `&mut self`, so an observer
/// cannot add or remove entries from inside its own handler.
///
/// # Examples
///
/// ```rust,no_run
/// use severity_notify::prelude::*;
///
/// let warnings = WarningObserver::new();
/// let errors = ErrorObserver::new("errors.log");
///
/// let mut observable = Observable::new();
/// observable.add_observer(&warnings);
/// observable.add_observer(&errors);
///
/// observable.warning("low disk space");
/// observable.error("write failed");
///
/// observable.remove_observer(&errors);
/// observable.error("not recorded");
/// ```
#[derive(Default)]
pub struct Observable<'a> {
    observers: Vec<&'a dyn Observer>,
}

impl<'a> Observable<'a> {
    /// Create an empty observable.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer at the end of the notification order.
    ///
    /// No uniqueness check is made; registering the same observer twice
    /// makes it receive every notification twice.
    pub fn add_observer(&mut self, observer: &'a dyn Observer) {
        self.observers.push(observer);
        #[cfg(feature = "tracing")]
        tracing::debug!(observers = self.observers.len(), "observer registered");
    }

    /// Remove every registration of `observer`.
    ///
    /// Entries are matched by identity (address), not by value. Removing an
    /// observer that was never registered is a no-op. Returns how many
    /// entries were removed.
    ///
    /// Zero-sized observers have no meaningful address, so for them the
    /// trait object's vtable is compared as well: two stateless observers of
    /// different types are never confused.
    pub fn remove_observer(&mut self, observer: &dyn Observer) -> usize {
        let before = self.observers.len();
        self.observers
            .retain(|registered| !same_observer(*registered, observer));
        let removed = before - self.observers.len();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            removed,
            observers = self.observers.len(),
            "observer deregistered"
        );
        removed
    }

    /// Whether `observer` is currently registered at least once.
    pub fn contains(&self, observer: &dyn Observer) -> bool {
        self.observers
            .iter()
            .any(|registered| same_observer(*registered, observer))
    }

    /// Number of registry entries, counting duplicates.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Drop every registration without notifying anyone.
    pub fn clear(&mut self) {
        self.observers.clear();
    }

    /// Deliver a warning to every registered observer.
    pub fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    /// Deliver an error to every registered observer.
    pub fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    /// Deliver a fatal error to every registered observer.
    pub fn fatal_error(&self, message: &str) {
        self.notify(Severity::Fatal, message);
    }

    /// Deliver a notification of the given severity to every registered
    /// observer, in registration order.
    ///
    /// Returns after the last handler has run.
    pub fn notify(&self, severity: Severity, message: &str) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            %severity,
            observers = self.observers.len(),
            "dispatching notification"
        );
        for observer in &self.observers {
            observer.notify(severity, message);
        }
    }
}

impl std::fmt::Debug for Observable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("observers", &self.observers.len())
            .finish()
    }
}

// Sized observers compare by data address only, since vtable pointers for the
// same type may differ between codegen units. Zero-sized values all share a
// dangling address, so those also need the vtable to match.
fn same_observer(a: &dyn Observer, b: &dyn Observer) -> bool {
    let zero_sized = std::mem::size_of_val(a) == 0;
    let (a, b) = (a as *const dyn Observer, b as *const dyn Observer);
    if zero_sized {
        std::ptr::eq(a, b)
    } else {
        std::ptr::addr_eq(a, b)
    }
}
