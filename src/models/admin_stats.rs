use serde::{Deserialize, Serialize};

/// Dashboard counters served by `GET /admin/stats`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    pub total_news: u64,
    pub published_news: u64,
    pub total_contact_submissions: u64,
    /// Submissions received during the last seven days.
    pub recent_submissions: u64,
}
