use std::path::PathBuf;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings for the shell server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin of the content backend, without a trailing `/`. The browser
    /// client talks to `{backend_url}/api`.
    pub backend_url: String,
    pub bind_addr: String,
    /// Directory holding `pkg/` and `static/`.
    pub site_root: PathBuf,
}

impl SiteConfig {
    /// Reads `BACKEND_URL`, `BIND_ADDR` and `SITE_ROOT` from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend_url = get("BACKEND_URL").ok_or(ConfigError::Missing("BACKEND_URL"))?;
        let backend_url = normalize_origin(&backend_url)?;

        Ok(Self {
            backend_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            site_root: get("SITE_ROOT").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

fn normalize_origin(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &'static str| ConfigError::Invalid {
        key: "BACKEND_URL",
        value: raw.to_string(),
        reason,
    };

    let url = reqwest::Url::parse(raw).map_err(|_| invalid("not an absolute URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
