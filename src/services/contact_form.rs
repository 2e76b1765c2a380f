use crate::api::ApiClient;
use crate::common::{ApiError, FormError};
use crate::types::{ContactRequest, ContactResponse};

pub const SUBMIT_SUCCESS: &str = "Заявка отправлена! Мы свяжемся с вами в ближайшее время.";
pub const SUBMIT_FAILED: &str = "Произошла ошибка при отправке заявки. Попробуйте позже.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// State of the public "get an offer" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub organization: String,
    pub comment: String,
    pub agree: bool,
    pub submitting: bool,
    pub banner: Option<Banner>,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ContactForm {
    /// Builds the request, or says why it must not be sent.
    pub fn validate(&self) -> Result<ContactRequest, FormError> {
        for (value, label) in [
            (&self.name, "Имя"),
            (&self.phone, "Телефон"),
            (&self.email, "Email"),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(label));
            }
        }

        if !self.agree {
            return Err(FormError::ConsentRequired);
        }

        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            organization: optional(&self.organization),
            comment: optional(&self.comment),
            agree: true,
        })
    }

    /// Starts a submission. Returns the request to send, or `None` after
    /// putting the validation message in the banner.
    pub fn begin(&mut self) -> Option<ContactRequest> {
        match self.validate() {
            Ok(request) => {
                self.submitting = true;
                self.banner = None;
                Some(request)
            }
            Err(e) => {
                self.banner = Some(Banner::Error(e.to_string()));
                None
            }
        }
    }

    /// Applies the backend's answer. Success clears every field.
    pub fn finish(&mut self, result: Result<ContactResponse, ApiError>) {
        self.submitting = false;

        let banner = match result {
            Ok(reply) if reply.success => {
                *self = Self::default();
                Banner::Success(reply.message.unwrap_or_else(|| SUBMIT_SUCCESS.to_string()))
            }
            Ok(reply) => Banner::Error(reply.message.unwrap_or_else(|| SUBMIT_FAILED.to_string())),
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                Banner::Error(e.user_message(SUBMIT_FAILED))
            }
        };
        self.banner = Some(banner);
    }

    /// Validates, posts to `/contact-form` and applies the result.
    /// Returns true on success.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        let Some(request) = self.begin() else {
            return false;
        };
        let result = api.submit_contact_form(&request).await;
        self.finish(result);
        self.banner.as_ref().is_some_and(Banner::is_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " A ".into(),
            phone: "+7900".into(),
            email: "a@b.com".into(),
            agree: true,
            ..Default::default()
        }
    }

    #[test]
    fn consent_is_required() {
        let form = ContactForm {
            agree: false,
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::ConsentRequired));
    }

    #[test]
    fn required_fields_are_checked_first() {
        let form = ContactForm {
            phone: "  ".into(),
            agree: false,
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("Телефон")));
    }

    #[test]
    fn blank_optionals_are_omitted() {
        let request = filled().validate().unwrap();
        assert_eq!(request.name, "A");
        assert_eq!(request.organization, None);
        assert_eq!(request.comment, None);
    }

    #[test]
    fn begin_sets_banner_on_refusal() {
        let mut form = ContactForm {
            agree: false,
            ..filled()
        };
        assert!(form.begin().is_none());
        assert!(!form.submitting);
        assert_eq!(
            form.banner,
            Some(Banner::Error("Необходимо согласие на обработку данных".into()))
        );
    }

    #[test]
    fn success_clears_fields() {
        let mut form = filled();
        form.organization = "School".into();
        assert!(form.begin().is_some());

        form.finish(Ok(ContactResponse {
            success: true,
            message: None,
            id: Some("1".into()),
        }));

        assert_eq!(form.name, "");
        assert_eq!(form.organization, "");
        assert!(!form.agree);
        assert!(!form.submitting);
        assert_eq!(form.banner, Some(Banner::Success(SUBMIT_SUCCESS.into())));
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.begin();
        form.finish(Err(ApiError::Status {
            status: 422,
            message: "Некорректный номер телефона".into(),
        }));

        assert_eq!(form.phone, "+7900");
        assert_eq!(
            form.banner,
            Some(Banner::Error("Некорректный номер телефона".into()))
        );
    }
}
