use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SubmissionStatus, wire_time};

/// A lead left through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(deserialize_with = "wire_time::datetime")]
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn display_created_at(&self) -> String {
        self.created_at.format("%d.%m.%Y %H:%M").to_string()
    }
}
