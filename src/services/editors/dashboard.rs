use crate::api::AdminClient;
use crate::common::ApiError;
use crate::models::AdminStats;
use crate::services::{Liveness, StateCell};

use super::LIST_FETCH_FAILED;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub stats: AdminStats,
    pub loading: bool,
    pub error: Option<String>,
}

/// Counters on the dashboard tab.
#[derive(Clone, Debug)]
pub struct Dashboard {
    client: AdminClient,
    state: StateCell<DashboardState>,
    liveness: Liveness,
}

impl Dashboard {
    pub fn new(client: AdminClient, liveness: Liveness) -> Self {
        Self {
            client,
            state: StateCell::default(),
            liveness,
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state.snapshot()
    }

    pub async fn fetch(&self) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let Some(result) = self.liveness.guard(self.client.stats()).await else {
            return Ok(());
        };

        self.state.update(|s| {
            s.loading = false;
            match &result {
                Ok(stats) => s.stats = *stats,
                Err(e) => s.error = Some(e.user_message(LIST_FETCH_FAILED)),
            }
        });

        result.map(|_| ())
    }
}
