use std::sync::{Arc, RwLock};

/// Shared state behind a lock; the single writer replaces or edits it in
/// place, readers take snapshots.
///
/// The lock is never held across an `.await`.
#[derive(Debug)]
pub struct StateCell<S>(Arc<RwLock<S>>);

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<S> StateCell<S> {
    pub fn new(state: S) -> Self {
        Self(Arc::new(RwLock::new(state)))
    }

    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self
            .0
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self
            .0
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl<S: Clone> StateCell<S> {
    pub fn snapshot(&self) -> S {
        self.read(S::clone)
    }
}

impl<S: Default> Default for StateCell<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
