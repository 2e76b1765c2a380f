pub use contact_form::*;
pub use content::*;
pub use liveness::*;
pub use news_feed::*;
pub use session::*;
pub use state::*;
pub use storage::*;

pub mod editors;

mod contact_form;
mod content;
mod liveness;
mod news_feed;
mod session;
mod state;
mod storage;
