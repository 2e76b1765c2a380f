use thiserror::Error;

/// Generic text shown when the backend gave no usable message.
pub const GENERIC_REQUEST_ERROR: &str = "Произошла ошибка. Попробуйте позже.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// True for 401/403, i.e. a missing, expired or rejected bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Text suitable for an inline message or alert.
    ///
    /// Backend messages are passed through; everything else collapses into
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::InvalidRequest(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    /// The backend (or the local pre-check) refused the password.
    #[error("Login rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Api(e) => e.user_message(LOGIN_FAILED),
            Self::Storage(_) => LOGIN_FAILED.to_string(),
        }
    }
}

pub const LOGIN_FAILED: &str = "Ошибка входа в систему";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Необходимо согласие на обработку данных")]
    ConsentRequired,

    #[error("Заполните обязательное поле: {0}")]
    MissingField(&'static str),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_covers_401_and_403() {
        for status in [401, 403] {
            let err = ApiError::Status {
                status,
                message: String::new(),
            };
            assert!(err.is_unauthorized());
        }
        let err = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn user_message_passes_backend_text_through() {
        let err = ApiError::Status {
            status: 401,
            message: "Неверный пароль".into(),
        };
        assert_eq!(err.user_message("fallback"), "Неверный пароль");

        let err = ApiError::Status {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message("fallback"), "fallback");
    }
}
