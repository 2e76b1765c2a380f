use std::sync::{Arc, OnceLock};

use crate::api::ApiClient;
use crate::common::ApiError;
use crate::models::{Contacts, Packages, SiteContent};

use super::StateCell;

static FALLBACK: OnceLock<Arc<SiteContent>> = OnceLock::new();

/// Shared handle to the built-in fallback document.
pub fn fallback_content() -> Arc<SiteContent> {
    Arc::clone(FALLBACK.get_or_init(|| Arc::new(SiteContent::fallback())))
}

/// What a single [`ContentProvider::load`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The backend document replaced the current one.
    Loaded,
    /// The request failed and the fallback document was installed.
    FellBack,
    /// A newer load started while this one was in flight; its result was
    /// discarded.
    Superseded,
}

#[derive(Debug, Clone)]
pub struct ContentState {
    pub content: Arc<SiteContent>,
    pub loading: bool,
    pub error: Option<Arc<ApiError>>,
    latest_ticket: u64,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            content: fallback_content(),
            loading: false,
            error: None,
            latest_ticket: 0,
        }
    }
}

/// Owns the site content document and hands out read-only snapshots.
///
/// Readers always get a complete document: the fallback until the first
/// load finishes, then either the backend's answer or the fallback again.
#[derive(Clone, Debug)]
pub struct ContentProvider {
    api: ApiClient,
    state: StateCell<ContentState>,
}

impl ContentProvider {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: StateCell::default(),
        }
    }

    /// Fetches `GET /content` once. Never fails: errors install the
    /// fallback document and are kept in [`ContentProvider::error`].
    pub async fn load(&self) -> LoadOutcome {
        let ticket = self.state.update(|s| {
            s.latest_ticket += 1;
            s.loading = true;
            s.error = None;
            s.latest_ticket
        });

        let result = self.api.fetch_content().await;

        self.state.update(|s| {
            if s.latest_ticket != ticket {
                log::debug!("content load #{ticket} superseded by #{}", s.latest_ticket);
                return LoadOutcome::Superseded;
            }

            s.loading = false;
            match result {
                Ok(content) => {
                    log::debug!("site content loaded from the backend");
                    s.content = Arc::new(content);
                    LoadOutcome::Loaded
                }
                Err(err) => {
                    log::warn!("site content unavailable, using built-in fallback: {err}");
                    s.content = fallback_content();
                    s.error = Some(Arc::new(err));
                    LoadOutcome::FellBack
                }
            }
        })
    }

    /// Same as [`ContentProvider::load`]; meant for user-triggered reloads.
    pub async fn refresh(&self) -> LoadOutcome {
        self.load().await
    }

    pub fn state(&self) -> ContentState {
        self.state.snapshot()
    }

    pub fn snapshot(&self) -> Arc<SiteContent> {
        self.state.read(|s| Arc::clone(&s.content))
    }

    pub fn contacts(&self) -> Contacts {
        self.state.read(|s| s.content.contacts.clone())
    }

    pub fn packages(&self) -> Packages {
        self.state.read(|s| s.content.packages.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.read(|s| s.loading)
    }

    pub fn error(&self) -> Option<Arc<ApiError>> {
        self.state.read(|s| s.error.clone())
    }
}
