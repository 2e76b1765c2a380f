mod common;

#[cfg(test)]
pub mod session_tests {
    use std::sync::Arc;

    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::common::*;

    use silis_site::api::ApiClient;
    use silis_site::common::*;
    use silis_site::services::*;

    fn memory_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn test_login_success_persists_session() {
        let backend = FakeBackend::start().await;
        let store = memory_store();
        let session = AdminSession::restore(backend.api(), store.clone());
        assert!(!session.is_logged_in());

        let client = session.login(ADMIN_PASSWORD).await.unwrap();

        assert_eq!(client.credential().expose(), ADMIN_TOKEN);
        assert!(session.is_logged_in());
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some(ADMIN_TOKEN));
        assert_eq!(store.get(LOGGED_IN_KEY).unwrap().as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_login_fails_on_wrong_password() {
        let backend = FakeBackend::start().await;
        let store = memory_store();
        let session = AdminSession::restore(backend.api(), store.clone());

        let err = session.login("wrong").await.unwrap_err();

        assert!(matches!(&err, SessionError::Rejected(m) if m == "Неверный пароль"));
        assert_eq!(err.user_message(), "Неверный пароль");
        assert!(!session.is_logged_in());
        assert!(session.client().is_none());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(LOGGED_IN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_fails_on_empty_password_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/login"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session =
            AdminSession::restore(ApiClient::new(&server.uri()).unwrap(), memory_store());
        let err = session.login("   ").await.unwrap_err();

        assert!(matches!(err, SessionError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_login_fails_on_missing_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": false, "token": "" })),
            )
            .mount(&server)
            .await;

        let store = memory_store();
        let session = AdminSession::restore(ApiClient::new(&server.uri()).unwrap(), store.clone());
        let err = session.login(ADMIN_PASSWORD).await.unwrap_err();

        assert_eq!(err.user_message(), LOGIN_FAILED);
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_session_restored_from_file_store() {
        let backend = FakeBackend::start().await;
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("admin").join("session.json");

        let first = AdminSession::restore(backend.api(), Arc::new(FileStore::new(&file)));
        first.login(ADMIN_PASSWORD).await.unwrap();

        let second = AdminSession::restore(backend.api(), Arc::new(FileStore::new(&file)));
        assert!(second.is_logged_in());
        assert!(second.verify().await.unwrap());
    }

    #[tokio::test]
    async fn test_restore_ignores_token_without_flag() {
        let backend = FakeBackend::start().await;
        let store = memory_store();
        store.set(TOKEN_KEY, ADMIN_TOKEN).unwrap();

        let session = AdminSession::restore(backend.api(), store);
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let backend = FakeBackend::start().await;
        let store = memory_store();
        let session = AdminSession::restore(backend.api(), store.clone());
        session.login(ADMIN_PASSWORD).await.unwrap();

        session.logout().unwrap();

        assert!(!session.is_logged_in());
        assert!(session.client().is_none());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(LOGGED_IN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_verify_rejects_stale_token() {
        let backend = FakeBackend::start().await;
        let store = memory_store();
        store.set(TOKEN_KEY, "stale-token").unwrap();
        store.set(LOGGED_IN_KEY, "true").unwrap();

        let session = AdminSession::restore(backend.api(), store.clone());
        assert!(session.is_logged_in());

        assert!(!session.verify().await.unwrap());
        assert!(!session.is_logged_in());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_public_requests_carry_no_token() {
        let backend = FakeBackend::start().await;
        for route in ["/api/content", "/api/news"] {
            Mock::given(path(route))
                .and(header_exists("authorization"))
                .respond_with(ResponseTemplate::new(500))
                .with_priority(1)
                .expect(0)
                .mount(&backend.server)
                .await;
        }

        let api = backend.api();
        let session = AdminSession::restore(api.clone(), memory_store());
        let admin = session.login(ADMIN_PASSWORD).await.unwrap();
        admin.stats().await.unwrap();

        api.fetch_content().await.unwrap();
        api.list_news(10).await.unwrap();
    }

    #[tokio::test]
    async fn test_expire_if_unauthorized() {
        let backend = FakeBackend::start().await;
        let store = memory_store();
        let session = AdminSession::restore(backend.api(), store.clone());
        session.login(ADMIN_PASSWORD).await.unwrap();

        let server_error = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert!(!session.expire_if_unauthorized(&server_error));
        assert!(session.is_logged_in());

        let forbidden = ApiError::Status {
            status: 403,
            message: "Неверный токен".into(),
        };
        assert!(session.expire_if_unauthorized(&forbidden));
        assert!(!session.is_logged_in());
        assert_eq!(store.get(LOGGED_IN_KEY).unwrap(), None);

        assert!(!session.expire_if_unauthorized(&forbidden));
    }
}
