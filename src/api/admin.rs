use reqwest::Method;

use crate::common::ApiError;
use crate::models::{
    AdminStats, ContactSubmission, Contacts, NewsArticle, NewsDraft, Packages, SiteContent,
    SubmissionStatus,
};
use crate::types::{NewsListResponse, SubmissionListResponse};

use super::ApiClient;

/// Opaque bearer token issued by `POST /admin/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Client for the admin endpoints.
///
/// The credential is attached to each request it builds; nothing is set on
/// the shared `reqwest::Client`, so dropping an `AdminClient` is all it
/// takes to stop sending the token.
#[derive(Clone, Debug)]
pub struct AdminClient {
    api: ApiClient,
    credential: Credential,
}

impl AdminClient {
    pub fn new(api: ApiClient, credential: Credential) -> Self {
        Self { api, credential }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    fn request(&self, method: Method, segments: &[&str]) -> reqwest::RequestBuilder {
        let url = self.api.endpoint(segments);
        self.api.request(method, url, Some(&self.credential))
    }

    pub async fn stats(&self) -> Result<AdminStats, ApiError> {
        self.api
            .execute(self.request(Method::GET, &["admin", "stats"]))
            .await
    }

    /// The public content document; the package and contact editors start
    /// from it.
    pub async fn content(&self) -> Result<SiteContent, ApiError> {
        self.api
            .execute(self.request(Method::GET, &["content"]))
            .await
    }

    /// All news including unpublished drafts.
    pub async fn list_news(&self) -> Result<Vec<NewsArticle>, ApiError> {
        let list: NewsListResponse = self
            .api
            .execute(self.request(Method::GET, &["admin", "news"]))
            .await?;
        Ok(list.news)
    }

    pub async fn create_news(&self, draft: &NewsDraft) -> Result<(), ApiError> {
        self.api
            .execute_unit(self.request(Method::POST, &["news"]).json(draft))
            .await
    }

    pub async fn update_news(&self, id: &str, draft: &NewsDraft) -> Result<(), ApiError> {
        self.api
            .execute_unit(self.request(Method::PUT, &["news", id]).json(draft))
            .await
    }

    pub async fn delete_news(&self, id: &str) -> Result<(), ApiError> {
        self.api
            .execute_unit(self.request(Method::DELETE, &["news", id]))
            .await
    }

    pub async fn list_submissions(&self) -> Result<Vec<ContactSubmission>, ApiError> {
        let list: SubmissionListResponse = self
            .api
            .execute(self.request(Method::GET, &["admin", "submissions"]))
            .await?;
        Ok(list.submissions)
    }

    pub async fn update_submission_status(
        &self,
        id: &str,
        status: SubmissionStatus,
    ) -> Result<(), ApiError> {
        let request = self
            .request(Method::PUT, &["admin", "submissions", id, "status"])
            .query(&[("new_status", status.as_str())]);
        self.api.execute_unit(request).await
    }

    /// Replaces both package lists at once.
    pub async fn update_packages(&self, packages: &Packages) -> Result<(), ApiError> {
        self.api
            .execute_unit(self.request(Method::PUT, &["admin", "packages"]).json(packages))
            .await
    }

    /// Replaces the whole contacts block.
    pub async fn update_contacts(&self, contacts: &Contacts) -> Result<(), ApiError> {
        self.api
            .execute_unit(self.request(Method::PUT, &["admin", "contacts"]).json(contacts))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_is_redacted() {
        let credential = Credential::new("secret-token");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
        assert_eq!(credential.expose(), "secret-token");
    }
}
