pub use admin_stats::*;
pub use content::*;
pub use news::*;
pub use submission::*;
pub use submission_status::*;

mod admin_stats;
mod content;
mod news;
mod submission;
mod submission_status;
pub(crate) mod wire_time;
