use crate::api::AdminClient;
use crate::common::ApiError;
use crate::models::{ContactSubmission, SubmissionStatus};
use crate::services::{Liveness, StateCell};

use super::LIST_FETCH_FAILED;

pub const STATUS_UPDATE_FAILED: &str = "Ошибка обновления статуса";

#[derive(Debug, Clone, Default)]
pub struct SubmissionsState {
    pub items: Vec<ContactSubmission>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Lead list with per-record status buttons.
///
/// Status changes are not applied optimistically: the list shows the old
/// status until the re-fetch after the `PUT` lands.
#[derive(Clone, Debug)]
pub struct SubmissionsEditor {
    client: AdminClient,
    state: StateCell<SubmissionsState>,
    liveness: Liveness,
}

impl SubmissionsEditor {
    pub fn new(client: AdminClient, liveness: Liveness) -> Self {
        Self {
            client,
            state: StateCell::default(),
            liveness,
        }
    }

    pub fn state(&self) -> SubmissionsState {
        self.state.snapshot()
    }

    pub async fn fetch(&self) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let Some(result) = self.liveness.guard(self.client.list_submissions()).await else {
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
                    log::warn!("failed to fetch submissions: {e}");
                    s.error = Some(e.user_message(LIST_FETCH_FAILED));
                    Err(e)
                }
            }
        })
    }

    /// Any status can be set from any other.
    pub async fn update_status(&self, id: &str, status: SubmissionStatus) -> Result<(), ApiError> {
        let update = self.client.update_submission_status(id, status);
        let Some(result) = self.liveness.guard(update).await else {
            return Ok(());
        };

        if let Err(e) = result {
            log::warn!("failed to set submission {id} to {status}: {e}");
            self.state
                .update(|s| s.error = Some(e.user_message(STATUS_UPDATE_FAILED)));
            return Err(e);
        }

        self.fetch().await
    }
}
