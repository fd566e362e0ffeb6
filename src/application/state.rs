//! Session-scoped shared state holders.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Mutable state shared by every consumer within one session.
///
/// Clones share the same value. Updates run to completion under the lock,
/// so no reader observes a partially applied change. Never hold a closure
/// across an `.await`; copy out what you need first.
pub struct SessionState<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> SessionState<T> {
    /// Wraps an initial value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Reads the state through `f`.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Mutates the state through `f`.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Returns whether both handles refer to the same session state.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> SessionState<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.inner.read().clone()
    }
}

impl<T: Default> Default for SessionState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for SessionState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SessionState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionState").field(&*self.inner.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AppState;

    #[test]
    fn test_clones_share_updates() {
        let state = SessionState::<AppState>::default();
        let other = state.clone();

        other.update(|s| s.current_page = Some("coupons".to_string()));

        assert_eq!(state.snapshot().current_page.as_deref(), Some("coupons"));
        assert!(state.same_as(&other));
    }

    #[test]
    fn test_independent_states_are_distinct() {
        let a = SessionState::<AppState>::default();
        let b = SessionState::<AppState>::default();

        a.update(|s| s.is_loading = true);

        assert!(!b.read(|s| s.is_loading));
        assert!(!a.same_as(&b));
    }
}
