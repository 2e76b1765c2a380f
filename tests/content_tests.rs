mod common;

#[cfg(test)]
pub mod content_tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::common::*;

    use silis_site::api::ApiClient;
    use silis_site::services::*;

    #[tokio::test]
    async fn test_content_load_success() {
        let backend = FakeBackend::start().await;
        let provider = ContentProvider::new(backend.api());

        assert_eq!(provider.snapshot(), fallback_content());
        assert_eq!(provider.load().await, LoadOutcome::Loaded);

        let state = provider.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.content.contacts.email, "info@silis.test");
        assert_eq!(provider.packages().b2b[0].name, "Старт");
    }

    #[tokio::test]
    async fn test_content_refresh_idempotent() {
        let backend = FakeBackend::start().await;
        let provider = ContentProvider::new(backend.api());

        assert_eq!(provider.refresh().await, LoadOutcome::Loaded);
        let first = provider.snapshot();

        assert_eq!(provider.refresh().await, LoadOutcome::Loaded);
        let state = provider.state();

        assert_eq!(state.content, first);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_content_load_falls_back_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let provider = ContentProvider::new(ApiClient::new(&server.uri()).unwrap());
        assert_eq!(provider.load().await, LoadOutcome::FellBack);

        assert_eq!(provider.snapshot(), fallback_content());
        assert!(!provider.loading());
        assert_eq!(provider.error().and_then(|e| e.status()), Some(500));
    }

    #[tokio::test]
    async fn test_content_load_falls_back_on_unreachable_backend() {
        let provider = ContentProvider::new(ApiClient::new("http://127.0.0.1:9").unwrap());

        assert_eq!(provider.load().await, LoadOutcome::FellBack);
        assert_eq!(provider.contacts(), fallback_content().contacts);
        assert!(provider.error().is_some());
    }

    #[tokio::test]
    async fn test_content_load_falls_back_on_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let provider = ContentProvider::new(ApiClient::new(&server.uri()).unwrap());
        assert_eq!(provider.load().await, LoadOutcome::FellBack);
        assert_eq!(provider.snapshot(), fallback_content());
    }

    #[tokio::test]
    async fn test_content_latest_load_wins() {
        let server = MockServer::start().await;

        let mut stale = content_json();
        stale["contacts"]["email"] = json!("stale@silis.test");
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(stale)
                    .set_delay(Duration::from_millis(500)),
            )
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&server)
            .await;

        let mut fresh = content_json();
        fresh["contacts"]["email"] = json!("fresh@silis.test");
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fresh))
            .mount(&server)
            .await;

        let provider = ContentProvider::new(ApiClient::new(&server.uri()).unwrap());
        let slow = provider.load();
        let fast = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            provider.refresh().await
        };
        let (first, second) = tokio::join!(slow, fast);

        assert_eq!(first, LoadOutcome::Superseded);
        assert_eq!(second, LoadOutcome::Loaded);
        assert_eq!(provider.contacts().email, "fresh@silis.test");
        assert!(!provider.loading());
    }

    #[tokio::test]
    async fn test_news_feed_shows_only_published() {
        let backend = FakeBackend::start().await;

        let feed = NewsFeed::fetch(&backend.api()).await;

        assert_eq!(feed.articles.len(), 1);
        assert_eq!(feed.articles[0].id, NEWS_PUBLISHED_ID);
        assert_eq!(feed.articles[0].display_date(), "01.09.2024");
        assert!(!feed.has_more());
    }

    #[tokio::test]
    async fn test_news_feed_empty_on_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/news"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let feed = NewsFeed::fetch(&ApiClient::new(&server.uri()).unwrap()).await;
        assert!(feed.articles.is_empty());
        assert!(feed.visible().is_empty());
    }
}
