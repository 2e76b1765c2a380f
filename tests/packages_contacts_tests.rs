mod common;

#[cfg(test)]
pub mod packages_contacts_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::common::*;

    use silis_site::api::{ApiClient, Credential};
    use silis_site::models::*;
    use silis_site::services::Liveness;
    use silis_site::services::editors::*;

    #[tokio::test]
    async fn test_packages_add_to_one_segment() {
        let backend = FakeBackend::start().await;
        let before_b2c = backend.store().content["packages"]["b2c"].clone();
        let packages = PackagesEditor::new(backend.admin(), Liveness::new());
        packages.fetch().await.unwrap();

        packages.open_segment(PackageSegment::B2b);
        packages.add_package();
        packages.update_package(1, |p| {
            p.name = "Премиум".into();
            p.features[0] = "Выездные занятия".into();
            p.popular = true;
        });

        let form = packages.state().form.unwrap();
        assert_eq!(form.segment, PackageSegment::B2b);
        assert_eq!(form.items[1].id, 5);

        packages.submit().await.unwrap();

        let state = packages.state();
        assert!(state.form.is_none());
        assert_eq!(state.packages.b2b.len(), 2);
        assert_eq!(state.packages.b2b[1].name, "Премиум");
        assert_eq!(state.packages.b2b[1].features, vec!["Выездные занятия"]);
        assert_eq!(backend.store().content["packages"]["b2c"], before_b2c);
    }

    #[tokio::test]
    async fn test_packages_feature_rows() {
        let backend = FakeBackend::start().await;
        let packages = PackagesEditor::new(backend.admin(), Liveness::new());
        packages.fetch().await.unwrap();

        packages.open_segment(PackageSegment::B2c);
        packages.add_feature(0);
        packages.add_feature(0);
        packages.remove_feature(0, 0);
        packages.remove_feature(0, 10);
        packages.remove_package(3);

        let items = packages.state().form.unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].features, vec![String::new(), String::new()]);
    }

    #[tokio::test]
    async fn test_packages_close_form_discards_edits() {
        let backend = FakeBackend::start().await;
        let packages = PackagesEditor::new(backend.admin(), Liveness::new());
        packages.fetch().await.unwrap();

        packages.open_segment(PackageSegment::B2c);
        packages.remove_package(0);
        packages.close_form();

        let state = packages.state();
        assert!(state.form.is_none());
        assert_eq!(state.packages.b2c.len(), 1);
    }

    #[tokio::test]
    async fn test_packages_save_fails_on_rejected_token() {
        let backend = FakeBackend::start().await;
        let client = backend.api().authenticated(Credential::new("expired"));
        let packages = PackagesEditor::new(client, Liveness::new());
        packages.fetch().await.unwrap();

        packages.open_segment(PackageSegment::B2c);
        packages.update_package(0, |p| p.name = "Интенсивы+".into());
        let err = packages.submit().await.unwrap_err();

        assert!(err.is_unauthorized());
        let state = packages.state();
        assert!(!state.saving);
        let form = state.form.unwrap();
        assert_eq!(form.segment, PackageSegment::B2c);
        assert_eq!(form.items[0].name, "Интенсивы+");
        assert_eq!(packages.take_alert().as_deref(), Some("Неверный токен"));
        assert!(packages.take_alert().is_none());
        assert_eq!(
            backend.store().content["packages"]["b2c"][0]["name"],
            json!("Интенсивы")
        );
    }

    #[tokio::test]
    async fn test_contacts_saved_even_if_reload_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(content_json()))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/admin/contacts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri())
            .unwrap()
            .authenticated(Credential::new(ADMIN_TOKEN));
        let contacts = ContactsEditor::new(client, Liveness::new());
        contacts.fetch().await.unwrap();

        contacts.open_form();
        contacts.submit().await.unwrap();

        let state = contacts.state();
        assert!(state.form.is_none());
        assert!(state.alert.is_none());
        assert_eq!(state.error.as_deref(), Some(LIST_FETCH_FAILED));
        assert_eq!(state.contacts.email, "info@silis.test");
    }

    #[tokio::test]
    async fn test_contacts_update_success() {
        let backend = FakeBackend::start().await;
        let contacts = ContactsEditor::new(backend.admin(), Liveness::new());
        contacts.fetch().await.unwrap();

        contacts.open_form();
        contacts.add_phone();
        contacts.update_form(|c| {
            c.email = "hello@silis.test".into();
            c.social.vk = "https://vk.com/silis_test".into();
        });
        contacts.submit().await.unwrap();

        let state = contacts.state();
        assert!(state.form.is_none());
        assert_eq!(state.contacts.email, "hello@silis.test");
        assert_eq!(state.contacts.phones, vec!["8 900 000 0001"]);

        let stored = backend.store().content["contacts"].clone();
        assert_eq!(stored["phones"], json!(["8 900 000 0001"]));
        assert_eq!(stored["social"]["vk"], json!("https://vk.com/silis_test"));
    }

    #[tokio::test]
    async fn test_contacts_remove_phone() {
        let backend = FakeBackend::start().await;
        let contacts = ContactsEditor::new(backend.admin(), Liveness::new());
        contacts.fetch().await.unwrap();

        contacts.open_form();
        contacts.remove_phone(0);
        contacts.remove_phone(0);
        contacts.submit().await.unwrap();

        assert!(contacts.state().contacts.phones.is_empty());
    }

    #[tokio::test]
    async fn test_contacts_save_fails_on_rejected_token() {
        let backend = FakeBackend::start().await;
        let client = backend.api().authenticated(Credential::new("expired"));
        let contacts = ContactsEditor::new(client, Liveness::new());
        contacts.fetch().await.unwrap();

        contacts.open_form();
        contacts.update_form(|c| c.address = "г. Якутск".into());
        let err = contacts.submit().await.unwrap_err();

        assert!(err.is_unauthorized());
        let state = contacts.state();
        assert_eq!(state.form.map(|c| c.address).as_deref(), Some("г. Якутск"));
        assert_eq!(state.alert.as_deref(), Some("Неверный токен"));
        assert_eq!(
            backend.store().content["contacts"]["address"],
            json!("г. Якутск, ул. Тестовая 1")
        );
    }
}
