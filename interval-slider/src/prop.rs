//! Shared callback handles.
//!
//! ## Usage
//!
//! The slider notifies its host through a [`CallbackWith<f32>`] once per
//! completed drag. Closures convert into the handle with `.into()`.

use std::{fmt, sync::Arc};

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// `CallbackWith` compares by identity (`Arc::ptr_eq`), so two handles are
/// equal only when they were cloned from the same closure.
pub struct CallbackWith<T, R = ()> {
    inner: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.inner)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn clones_share_identity() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let callback = CallbackWith::new(move |step: usize| {
            counter.fetch_add(step, Ordering::SeqCst);
        });
        let clone = callback.clone();

        callback.call(2);
        clone.call(3);

        assert_eq!(calls.load(Ordering::SeqCst), 5);
        assert_eq!(callback, clone);
        assert_ne!(callback, CallbackWith::new(|_: usize| {}));
    }
}
