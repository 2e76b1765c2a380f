//! Admin panel editors.
//!
//! Each editor is a read-list/write-one loop over one admin resource: it
//! fetches its list, edits a form copy, sends the whole record, and
//! re-fetches after every successful mutation. A failed save leaves the
//! form open and raises a blocking alert.

pub use contacts::*;
pub use dashboard::*;
pub use news::*;
pub use packages::*;
pub use submissions::*;

mod contacts;
mod dashboard;
mod news;
mod packages;
mod submissions;

pub const LIST_FETCH_FAILED: &str = "Не удалось загрузить данные";
