//! Request and response envelopes exchanged with the backend API.

use serde::{Deserialize, Serialize};

use crate::models::{ContactSubmission, NewsArticle};

/// Login request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Login response; `token` is empty when `success` is false
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Public lead form payload for `POST /contact-form`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub agree: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewsListResponse {
    #[serde(default)]
    pub news: Vec<NewsArticle>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubmissionListResponse {
    #[serde(default)]
    pub submissions: Vec<ContactSubmission>,
}

/// Error body of a non-2xx response.
///
/// `detail` is usually a string, but request validation failures carry a
/// list of field errors there instead.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        let detail = match self.detail {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Array(items)) => {
                let msgs: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .map(str::to_string)
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            _ => None,
        };

        detail
            .or(self.message)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Неверный пароль", "message": "x"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Неверный пароль"));
    }

    #[test]
    fn error_body_joins_validation_errors() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "phone"], "msg": "too short"}, {"msg": "bad email"}]}"#,
        )
        .unwrap();
        assert_eq!(body.into_message().as_deref(), Some("too short; bad email"));
    }

    #[test]
    fn error_body_without_text_yields_none() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "  "}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }

    #[test]
    fn contact_request_omits_empty_optionals() {
        let req = ContactRequest {
            name: "A".into(),
            phone: "+7900".into(),
            email: "a@b.com".into(),
            agree: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("organization").is_none());
        assert_eq!(json["agree"], true);
    }
}
