//! Pooled resource facade handed to callers

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Internal owning record for one pooled resource.
///
/// A handle lives in exactly one place at a time: the available set, the
/// active set (as an id marker, with the resource travelling inside the
/// caller's [`Pooled`] facade), or a prune/shutdown path about to destroy it.
pub(crate) struct Handle<T> {
    pub(crate) id: u64,
    pub(crate) resource: T,
}

pub(crate) type ReturnFn<T> = Arc<dyn Fn(T, u64) + Send + Sync>;

/// Facade over a borrowed resource.
///
/// Dereferences to the underlying resource, so every operation the resource
/// exposes is forwarded untouched. The one intercepted operation is the
/// done-signal: dropping the facade (or calling [`Pooled::release`]) hands
/// the resource back to the owning pool instead of tearing it down. Real
/// teardown only ever happens inside the pool's prune and shutdown paths.
pub struct Pooled<T> {
    resource: Option<T>,
    id: u64,
    return_fn: ReturnFn<T>,
}

impl<T> Pooled<T> {
    pub(crate) fn new(resource: T, id: u64, return_fn: ReturnFn<T>) -> Self {
        Self {
            resource: Some(resource),
            id,
            return_fn,
        }
    }

    /// Identity of the underlying handle, stable for its whole lifetime.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Explicitly return the resource to the pool.
    ///
    /// Equivalent to dropping the facade.
    pub fn release(self) {}
}

impl<T> Deref for Pooled<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.resource
            .as_ref()
            .expect("resource already returned to the pool")
    }
}

impl<T> DerefMut for Pooled<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.resource
            .as_mut()
            .expect("resource already returned to the pool")
    }
}

impl<T> Drop for Pooled<T> {
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            (self.return_fn)(resource, self.id);
        }
    }
}

impl<T> fmt::Debug for Pooled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pooled").field("id", &self.id).finish()
    }
}
