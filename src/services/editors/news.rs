use crate::api::AdminClient;
use crate::common::ApiError;
use crate::models::{NewsArticle, NewsDraft};
use crate::services::{Liveness, StateCell};

use super::LIST_FETCH_FAILED;

pub const NEWS_SAVE_FAILED: &str = "Ошибка сохранения новости";
pub const NEWS_DELETE_FAILED: &str = "Ошибка удаления новости";
pub const NEWS_DELETE_CONFIRM: &str = "Вы уверены, что хотите удалить эту новость?";

/// The create/edit modal. `editing` is the id of the article being
/// updated, `None` for a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsForm {
    pub editing: Option<String>,
    pub draft: NewsDraft,
}

#[derive(Debug, Clone, Default)]
pub struct NewsEditorState {
    pub items: Vec<NewsArticle>,
    pub loading: bool,
    pub error: Option<String>,
    pub form: Option<NewsForm>,
    pub saving: bool,
    /// Message for a blocking alert; the view shows it once and clears it.
    pub alert: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NewsEditor {
    client: AdminClient,
    state: StateCell<NewsEditorState>,
    liveness: Liveness,
}

impl NewsEditor {
    pub fn new(client: AdminClient, liveness: Liveness) -> Self {
        Self {
            client,
            state: StateCell::default(),
            liveness,
        }
    }

    pub fn state(&self) -> NewsEditorState {
        self.state.snapshot()
    }

    /// `GET /admin/news`. On failure the previous list stays on screen.
    pub async fn fetch(&self) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let Some(result) = self.liveness.guard(self.client.list_news()).await else {
            return Ok(());
        };

        self.state.update(|s| {
            s.loading = false;
            match result {
                Ok(items) => {
                    s.items = items;
                    Ok(())
                }
                Err(e) => {
                    log::warn!("failed to fetch admin news: {e}");
                    s.error = Some(e.user_message(LIST_FETCH_FAILED));
                    Err(e)
                }
            }
        })
    }

    pub fn open_create(&self) {
        self.state.update(|s| {
            s.form = Some(NewsForm {
                editing: None,
                draft: NewsDraft::new(),
            });
        });
    }

    /// Opens the form pre-filled from the listed article. False if the id
    /// is not in the current list.
    pub fn open_edit(&self, id: &str) -> bool {
        self.state.update(|s| {
            let Some(article) = s.items.iter().find(|a| a.id == id) else {
                return false;
            };
            s.form = Some(NewsForm {
                editing: Some(article.id.clone()),
                draft: NewsDraft::from(article),
            });
            true
        })
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut NewsDraft)) {
        self.state.update(|s| {
            if let Some(form) = s.form.as_mut() {
                edit(&mut form.draft);
            }
        });
    }

    pub fn close_form(&self) {
        self.state.update(|s| s.form = None);
    }

    pub fn take_alert(&self) -> Option<String> {
        self.state.update(|s| s.alert.take())
    }

    /// Sends the open form: `PUT /news/{id}` when editing, `POST /news`
    /// otherwise. Success closes the form and reloads the list.
    pub async fn submit(&self) -> Result<(), ApiError> {
        let Some(form) = self.state.read(|s| s.form.clone()) else {
            return Err(ApiError::InvalidRequest("no news form is open".into()));
        };

        self.state.update(|s| {
            s.saving = true;
            s.alert = None;
        });

        let save = async {
            match &form.editing {
                Some(id) => self.client.update_news(id, &form.draft).await,
                None => self.client.create_news(&form.draft).await,
            }
        };
        let Some(result) = self.liveness.guard(save).await else {
            return Ok(());
        };

        match result {
            Ok(()) => {
                self.state.update(|s| {
                    s.saving = false;
                    s.form = None;
                });
                if let Err(e) = self.fetch().await {
                    log::debug!("saved, but reloading news failed: {e}");
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to save news: {e}");
                self.state.update(|s| {
                    s.saving = false;
                    s.alert = Some(e.user_message(NEWS_SAVE_FAILED));
                });
                Err(e)
            }
        }
    }

    /// Asks `confirm` first; `Ok(false)` means the user backed out and
    /// nothing was sent.
    pub async fn delete(
        &self,
        id: &str,
        confirm: impl FnOnce(&NewsArticle) -> bool,
    ) -> Result<bool, ApiError> {
        let Some(article) = self.state.read(|s| s.items.iter().find(|a| a.id == id).cloned())
        else {
            return Err(ApiError::InvalidRequest(format!("unknown news id {id}")));
        };

        if !confirm(&article) {
            return Ok(false);
        }

        let Some(result) = self.liveness.guard(self.client.delete_news(id)).await else {
            return Ok(true);
        };

        match result {
            Ok(()) => {
                if let Err(e) = self.fetch().await {
                    log::debug!("deleted, but reloading news failed: {e}");
                }
                Ok(true)
            }
            Err(e) => {
                log::warn!("failed to delete news {id}: {e}");
                self.state
                    .update(|s| s.alert = Some(e.user_message(NEWS_DELETE_FAILED)));
                Err(e)
            }
        }
    }
}
