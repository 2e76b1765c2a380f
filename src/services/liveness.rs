use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether the view that started a request still exists.
///
/// Views call [`Liveness::shut_down`] when they are torn down; responses
/// that resolve afterwards are dropped instead of being written into state
/// nobody renders any more.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn shut_down(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Awaits `fut`; yields `None` if the owner shut down in the meantime.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        let output = fut.await;
        if self.is_alive() {
            Some(output)
        } else {
            log::debug!("dropping response for a view that was torn down");
            None
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
