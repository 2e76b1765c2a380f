use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::common::ApiError;
use crate::models::{NewsArticle, SiteContent};
use crate::types::{
    ContactRequest, ContactResponse, ErrorBody, LoginRequest, LoginResponse, NewsListResponse,
};

use super::{AdminClient, Credential};

pub const API_PREFIX: &str = "api";

/// How many articles the public news section asks for.
pub const PUBLIC_NEWS_LIMIT: u32 = 50;

/// Unauthenticated client for the public endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// `origin` is the backend origin, e.g. `https://silis.example`; the
    /// `/api` prefix is appended here.
    pub fn new(origin: &str) -> Result<Self, ApiError> {
        Self::with_http(reqwest::Client::new(), origin)
    }

    pub fn with_http(http: reqwest::Client, origin: &str) -> Result<Self, ApiError> {
        let origin = origin.trim().trim_end_matches('/');
        let mut base = Url::parse(origin)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid backend URL {origin:?}: {e}")))?;

        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::InvalidRequest(format!(
                "backend URL must be http(s): {origin:?}"
            )));
        }

        base.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("invalid backend URL {origin:?}")))?
            .pop_if_empty()
            .push(API_PREFIX);

        Ok(Self { http, base })
    }

    /// Base of every request, ending in `/api`.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Builds `{base}/{segments...}`; each segment is percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }

    pub(crate) fn request(
        &self,
        method: Method,
        url: Url,
        credential: Option<&Credential>,
    ) -> RequestBuilder {
        log::debug!("{method} {url}");
        let builder = self.http.request(method, url);
        match credential {
            Some(credential) => builder.bearer_auth(credential.expose()),
            None => builder,
        }
    }

    /// Sends the request and decodes a JSON body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Sends the request; only the status matters.
    pub(crate) async fn execute_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        read_body(response).await?;
        Ok(())
    }

    pub async fn fetch_content(&self) -> Result<SiteContent, ApiError> {
        let url = self.endpoint(&["content"]);
        self.execute(self.request(Method::GET, url, None)).await
    }

    /// Published news, newest first.
    pub async fn list_news(&self, limit: u32) -> Result<Vec<NewsArticle>, ApiError> {
        let url = self.endpoint(&["news"]);
        let request = self
            .request(Method::GET, url, None)
            .query(&[("limit", limit)]);
        let list: NewsListResponse = self.execute(request).await?;
        Ok(list.news)
    }

    pub async fn submit_contact_form(
        &self,
        form: &ContactRequest,
    ) -> Result<ContactResponse, ApiError> {
        let url = self.endpoint(&["contact-form"]);
        self.execute(self.request(Method::POST, url, None).json(form))
            .await
    }

    /// Exchanges the admin password for a bearer token.
    pub async fn login(&self, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint(&["admin", "login"]);
        let body = LoginRequest {
            password: password.to_string(),
        };
        self.execute(self.request(Method::POST, url, None).json(&body))
            .await
    }

    /// Wraps this client with a bearer credential for the admin endpoints.
    pub fn authenticated(&self, credential: Credential) -> AdminClient {
        AdminClient::new(self.clone(), credential)
    }
}

async fn read_body(response: Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    let body = response.bytes().await?.to_vec();

    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_default();

    log::debug!("request failed with {status}: {message}");

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
