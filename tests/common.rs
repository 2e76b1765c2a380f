#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use silis_site::api::{AdminClient, ApiClient, Credential};

pub const ADMIN_PASSWORD: &str = "silis-admin";
pub const ADMIN_TOKEN: &str = "token-0001";

pub const NEWS_PUBLISHED_ID: &str = "6f1c0a52-4b8e-4c59-9f0e-0d6b1f6a9a01";
pub const NEWS_DRAFT_ID: &str = "6f1c0a52-4b8e-4c59-9f0e-0d6b1f6a9a02";
pub const SUBMISSION_ID: &str = "0b7e2d1a-3c4f-4e5a-8b9c-1d2e3f4a5b6c";

/// Backend state the fake endpoints read and write.
pub struct Store {
    pub content: Value,
    pub news: Vec<Value>,
    pub submissions: Vec<Value>,
}

impl Store {
    fn seeded() -> Self {
        Self {
            content: content_json(),
            news: vec![
                json!({
                    "id": NEWS_PUBLISHED_ID,
                    "title": "Открыт набор в группы",
                    "excerpt": "Стартуют осенние интенсивы",
                    "content": "Запись открыта до конца месяца.",
                    "date": "2024-09-01T00:00:00",
                    "published": true
                }),
                json!({
                    "id": NEWS_DRAFT_ID,
                    "title": "Черновик",
                    "excerpt": "",
                    "content": "",
                    "date": "2024-09-05T00:00:00",
                    "published": false
                }),
            ],
            submissions: vec![json!({
                "id": SUBMISSION_ID,
                "name": "Иван",
                "phone": "+7 914 000 0000",
                "email": "ivan@example.com",
                "organization": "Школа №1",
                "comment": null,
                "status": "new",
                "created_at": "2024-09-02T10:30:00.123456"
            })],
        }
    }
}

/// Content document served by `GET /api/content`; differs from the
/// built-in fallback so tests can tell them apart.
pub fn content_json() -> Value {
    json!({
        "contacts": {
            "email": "info@silis.test",
            "phones": ["8 900 000 0001"],
            "address": "г. Якутск, ул. Тестовая 1",
            "social": {
                "instagram": "silis_test",
                "telegram": "https://t.me/silis_test",
                "vk": ""
            }
        },
        "packages": {
            "b2c": [
                {
                    "id": 1,
                    "name": "Интенсивы",
                    "description": "Быстрое погружение",
                    "features": ["3 раза в неделю"],
                    "popular": false,
                    "freeLesson": true
                }
            ],
            "b2b": [
                {
                    "id": 4,
                    "name": "Старт",
                    "description": "Базовое сопровождение",
                    "features": ["Консультация"],
                    "popular": false
                }
            ]
        }
    })
}

fn detail(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "detail": message }))
}

fn last_segment(req: &Request, from_end: usize) -> String {
    req.url
        .path_segments()
        .and_then(|segments| segments.rev().nth(from_end))
        .unwrap_or_default()
        .to_string()
}

/// A wiremock server that behaves like the content backend, including a
/// stateful news and submission store.
pub struct FakeBackend {
    pub server: MockServer,
    pub store: Arc<Mutex<Store>>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let store = Arc::new(Mutex::new(Store::seeded()));
        let backend = Self { server, store };
        backend.mount().await;
        backend
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.server.uri()).unwrap()
    }

    pub fn admin(&self) -> AdminClient {
        self.api().authenticated(Credential::new(ADMIN_TOKEN))
    }

    pub fn store(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().unwrap()
    }

    async fn mount(&self) {
        let bearer = format!("Bearer {ADMIN_TOKEN}");

        // Public endpoints.
        let store = self.store.clone();
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(move |_: &Request| {
                ResponseTemplate::new(200).set_body_json(store.lock().unwrap().content.clone())
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("GET"))
            .and(path("/api/news"))
            .respond_with(move |_: &Request| {
                let news: Vec<Value> = store
                    .lock()
                    .unwrap()
                    .news
                    .iter()
                    .filter(|n| n["published"] == json!(true))
                    .cloned()
                    .collect();
                ResponseTemplate::new(200).set_body_json(json!({ "news": news }))
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("POST"))
            .and(path("/api/contact-form"))
            .respond_with(move |req: &Request| {
                let Ok(mut body) = req.body_json::<Value>() else {
                    return detail(422, "Некорректный запрос");
                };
                if body["agree"] != json!(true) {
                    return detail(400, "Необходимо согласие на обработку данных");
                }
                let id = uuid::Uuid::new_v4().to_string();
                body["id"] = json!(id);
                body["status"] = json!("new");
                body["created_at"] = json!("2024-09-10T12:00:00");
                store.lock().unwrap().submissions.push(body);
                ResponseTemplate::new(200).set_body_json(json!({
                    "success": true,
                    "message": "Заявка успешно отправлена",
                    "id": id
                }))
            })
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/admin/login"))
            .respond_with(|req: &Request| {
                let password = req
                    .body_json::<Value>()
                    .ok()
                    .and_then(|b| b["password"].as_str().map(str::to_string));
                if password.as_deref() == Some(ADMIN_PASSWORD) {
                    ResponseTemplate::new(200).set_body_json(json!({
                        "success": true,
                        "token": ADMIN_TOKEN,
                        "message": "Успешный вход"
                    }))
                } else {
                    detail(401, "Неверный пароль")
                }
            })
            .mount(&self.server)
            .await;

        // Admin endpoints, only with the right bearer token.
        let store = self.store.clone();
        Mock::given(method("GET"))
            .and(path("/api/admin/stats"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |_: &Request| {
                let store = store.lock().unwrap();
                let published = store
                    .news
                    .iter()
                    .filter(|n| n["published"] == json!(true))
                    .count();
                let recent = store
                    .submissions
                    .iter()
                    .filter(|s| s["status"] == json!("new"))
                    .count();
                ResponseTemplate::new(200).set_body_json(json!({
                    "total_news": store.news.len(),
                    "published_news": published,
                    "total_contact_submissions": store.submissions.len(),
                    "recent_submissions": recent
                }))
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("GET"))
            .and(path("/api/admin/news"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |_: &Request| {
                let news = store.lock().unwrap().news.clone();
                ResponseTemplate::new(200).set_body_json(json!({ "news": news }))
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("POST"))
            .and(path("/api/news"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |req: &Request| {
                let Ok(mut body) = req.body_json::<Value>() else {
                    return detail(422, "Некорректный запрос");
                };
                let id = uuid::Uuid::new_v4().to_string();
                body["id"] = json!(id);
                if let Some(date) = body["date"].as_str().map(|d| format!("{d}T00:00:00")) {
                    body["date"] = json!(date);
                }
                store.lock().unwrap().news.insert(0, body);
                ResponseTemplate::new(200).set_body_json(json!({ "success": true, "id": id }))
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("PUT"))
            .and(path_regex(r"^/api/news/[^/]+$"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |req: &Request| {
                let id = last_segment(req, 0);
                let Ok(mut body) = req.body_json::<Value>() else {
                    return detail(422, "Некорректный запрос");
                };
                let mut store = store.lock().unwrap();
                let Some(slot) = store.news.iter_mut().find(|n| n["id"] == json!(id)) else {
                    return detail(404, "Новость не найдена");
                };
                body["id"] = json!(id);
                *slot = body;
                ResponseTemplate::new(200).set_body_json(json!({ "success": true }))
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("DELETE"))
            .and(path_regex(r"^/api/news/[^/]+$"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |req: &Request| {
                let id = last_segment(req, 0);
                let mut store = store.lock().unwrap();
                let before = store.news.len();
                store.news.retain(|n| n["id"] != json!(id));
                if store.news.len() == before {
                    return detail(404, "Новость не найдена");
                }
                ResponseTemplate::new(200).set_body_json(json!({ "success": true }))
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("GET"))
            .and(path("/api/admin/submissions"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |_: &Request| {
                let submissions = store.lock().unwrap().submissions.clone();
                ResponseTemplate::new(200).set_body_json(json!({ "submissions": submissions }))
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("PUT"))
            .and(path_regex(r"^/api/admin/submissions/[^/]+/status$"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |req: &Request| {
                let id = last_segment(req, 1);
                let status = req
                    .url
                    .query_pairs()
                    .find(|(k, _)| k == "new_status")
                    .map(|(_, v)| v.into_owned());
                let Some(status) = status.filter(|s| ["new", "processed", "replied"].contains(&s.as_str()))
                else {
                    return detail(400, "Недопустимый статус");
                };
                let mut store = store.lock().unwrap();
                let Some(slot) = store.submissions.iter_mut().find(|s| s["id"] == json!(id)) else {
                    return detail(404, "Заявка не найдена");
                };
                slot["status"] = json!(status);
                ResponseTemplate::new(200).set_body_json(json!({ "success": true }))
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("PUT"))
            .and(path("/api/admin/packages"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |req: &Request| match req.body_json::<Value>() {
                Ok(packages) => {
                    store.lock().unwrap().content["packages"] = packages;
                    ResponseTemplate::new(200).set_body_json(json!({ "success": true }))
                }
                Err(_) => detail(422, "Некорректный запрос"),
            })
            .mount(&self.server)
            .await;

        let store = self.store.clone();
        Mock::given(method("PUT"))
            .and(path("/api/admin/contacts"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(move |req: &Request| match req.body_json::<Value>() {
                Ok(contacts) => {
                    store.lock().unwrap().content["contacts"] = contacts;
                    ResponseTemplate::new(200).set_body_json(json!({ "success": true }))
                }
                Err(_) => detail(422, "Некорректный запрос"),
            })
            .mount(&self.server)
            .await;

        // Anything protected without a valid token.
        Mock::given(path_regex(
            r"^/api/(admin/(stats|news|submissions|packages|contacts)|news)(/.*)?$",
        ))
        .respond_with(detail(401, "Неверный токен"))
        .with_priority(10)
        .mount(&self.server)
        .await;
    }
}
