//! Typed client for the site backend. Every path lives under `/api`.

mod admin;
mod client;

pub use admin::{AdminClient, Credential};
pub use client::{API_PREFIX, ApiClient, PUBLIC_NEWS_LIMIT};
