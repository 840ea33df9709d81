//! Shared callback handles for observer closures.
//!
//! ## Usage
//!
//! Wrap closures in [`Callback`] or [`CallbackWith`] when a level switch
//! observer should be a pair of functions instead of a trait object. See
//! [`crate::LevelSwitchCallbacks`].

use std::{fmt, sync::Arc};

/// Stable, comparable callback handle for `Fn()`.
///
/// Clones share the same closure; equality compares identity
/// (`Arc::ptr_eq`) rather than behavior.
#[derive(Clone)]
pub struct Callback {
    handler: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.handler)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Stable, comparable callback handle for `Fn(T)`.
///
/// Used for value-change handlers such as level notifications.
pub struct CallbackWith<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) {
        (self.handler)(value);
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T: 'static> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T> Eq for CallbackWith<T> {}

impl<T> fmt::Debug for CallbackWith<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn callback_with_forwards_value() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);
        let on_change = CallbackWith::new(move |level: usize| {
            sink.store(level, Ordering::SeqCst);
        });
        on_change.call(3);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn clones_compare_by_identity() {
        let a = Callback::new(|| {});
        let b = a.clone();
        let c = Callback::new(|| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
