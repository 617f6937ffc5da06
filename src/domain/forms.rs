//! Forms that gate submission to the API
//!
//! Each form lists its fields and the kind of input each one must hold.
//! Checking a payload reports every rejected field at once, so the caller
//! can show all messages together instead of one per attempt.

use crate::domain::coercion::coerce_to_text;
use crate::domain::fields::{Content, EmailAddress, FieldKind, Name, Password, Title};
use crate::domain::routes::ApiEndpoints;
use crate::error::{Error, Result};
use crate::infrastructure::log_messages::forms as messages;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, instrument};

/// A field that failed its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRejection {
    pub field: &'static str,
    pub kind: FieldKind,
}

impl FieldRejection {
    pub fn message(&self) -> &'static str {
        self.kind.rejection_message()
    }
}

impl fmt::Display for FieldRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// The forms of the web client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Login,
    Register,
    News,
    Comment,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Register => "register",
            FormKind::News => "news",
            FormKind::Comment => "comment",
        }
    }

    /// Field names and the rule each must satisfy, in display order
    pub fn schema(&self) -> &'static [(&'static str, FieldKind)] {
        match self {
            FormKind::Login => &[
                ("username", FieldKind::Name),
                ("password", FieldKind::Password),
            ],
            FormKind::Register => &[
                ("username", FieldKind::Name),
                ("email", FieldKind::Email),
                ("password", FieldKind::Password),
            ],
            FormKind::News => &[("title", FieldKind::Title), ("content", FieldKind::Content)],
            FormKind::Comment => &[("content", FieldKind::Content)],
        }
    }

    /// Every field of `fields` that fails its rule. Missing fields are rejected.
    #[instrument(skip(fields), fields(form = %self))]
    pub fn check(&self, fields: &Map<String, Value>) -> Vec<FieldRejection> {
        let rejections: Vec<FieldRejection> = self
            .schema()
            .iter()
            .filter(|(field, kind)| !kind.accepts_value(fields.get(*field)))
            .map(|&(field, kind)| FieldRejection { field, kind })
            .collect();

        for rejection in &rejections {
            debug!(field = rejection.field, rule = %rejection.kind, "{}", messages::FIELD_REJECTED);
        }
        if rejections.is_empty() {
            debug!("{}", messages::FORM_ACCEPTED);
        }

        rejections
    }

    /// Checks a whole JSON payload, which must be an object
    pub fn validate(&self, payload: &Value) -> Result<()> {
        let fields = as_object(payload)?;
        reject_if_any(self.check(fields))
    }

    /// Where this form is submitted; comments need the news item they belong to
    pub fn endpoint(&self, api: &ApiEndpoints, news_id: Option<u64>) -> Option<String> {
        match self {
            FormKind::Login => Some(api.login()),
            FormKind::Register => Some(api.register()),
            FormKind::News => Some(api.news_list()),
            FormKind::Comment => news_id.map(|id| api.comments(id)),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "login" => Ok(FormKind::Login),
            "register" => Ok(FormKind::Register),
            "news" => Ok(FormKind::News),
            "comment" => Ok(FormKind::Comment),
            _ => Err(format!("Invalid form: {s}")),
        }
    }
}

/// A form whose every field has been accepted
pub trait Form: Sized + Serialize {
    const KIND: FormKind;

    /// Builds the form from fields that already passed `FormKind::check`
    fn from_checked(fields: &Map<String, Value>) -> Result<Self>;

    fn from_payload(payload: &Value) -> Result<Self> {
        let fields = as_object(payload)?;
        reject_if_any(Self::KIND.check(fields))?;
        Self::from_checked(fields)
    }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| Error::malformed_payload(messages::PAYLOAD_NOT_OBJECT))
}

fn reject_if_any(rejections: Vec<FieldRejection>) -> Result<()> {
    if rejections.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidForm { rejections })
    }
}

/// Reads an accepted field into its validated type
fn field<T, E>(
    fields: &Map<String, Value>,
    name: &'static str,
    kind: FieldKind,
    build: impl FnOnce(String) -> std::result::Result<T, E>,
) -> Result<T> {
    build(coerce_to_text(fields.get(name)).into_owned()).map_err(|_| Error::InvalidForm {
        rejections: vec![FieldRejection { field: name, kind }],
    })
}

/// Credentials sent to `login/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginForm {
    pub username: Name,
    pub password: Password,
}

impl Form for LoginForm {
    const KIND: FormKind = FormKind::Login;

    fn from_checked(fields: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            username: field(fields, "username", FieldKind::Name, Name::try_new)?,
            password: field(fields, "password", FieldKind::Password, Password::try_new)?,
        })
    }
}

/// New account sent to `register/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterForm {
    pub username: Name,
    pub email: EmailAddress,
    pub password: Password,
}

impl Form for RegisterForm {
    const KIND: FormKind = FormKind::Register;

    fn from_checked(fields: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            username: field(fields, "username", FieldKind::Name, Name::try_new)?,
            email: field(fields, "email", FieldKind::Email, EmailAddress::try_new)?,
            password: field(fields, "password", FieldKind::Password, Password::try_new)?,
        })
    }
}

/// News post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsForm {
    pub title: Title,
    pub content: Content,
}

impl Form for NewsForm {
    const KIND: FormKind = FormKind::News;

    fn from_checked(fields: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            title: field(fields, "title", FieldKind::Title, Title::try_new)?,
            content: field(fields, "content", FieldKind::Content, Content::try_new)?,
        })
    }
}

/// Comment on a news post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentForm {
    pub content: Content,
}

impl Form for CommentForm {
    const KIND: FormKind = FormKind::Comment;

    fn from_checked(fields: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            content: field(fields, "content", FieldKind::Content, Content::try_new)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_valid_register_form() {
        let payload = json!({
            "username": "ivan",
            "email": "ivan@elsys-bg.org",
            "password": "secret1",
        });

        let form = RegisterForm::from_payload(&payload).unwrap();
        assert_eq!(form.username.as_ref(), "ivan");
        assert_eq!(form.email.as_ref(), "ivan@elsys-bg.org");
        assert_eq!(form.password.as_ref(), "secret1");
    }

    #[test]
    fn test_all_rejections_are_reported() {
        let payload = json!({
            "username": "iv",
            "email": "not-an-email",
            "password": "short",
        });

        let err = RegisterForm::from_payload(&payload).unwrap_err();
        let fields: Vec<_> = err.rejections().iter().map(|r| r.field).collect();
        assert_eq!(fields, vec!["username", "email", "password"]);
        assert_eq!(err.to_string(), "Invalid form: username, email, password");
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let rejections = FormKind::News.check(&Map::new());
        assert_eq!(
            rejections,
            vec![
                FieldRejection {
                    field: "title",
                    kind: FieldKind::Title,
                },
                FieldRejection {
                    field: "content",
                    kind: FieldKind::Content,
                },
            ]
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let payload = json!({"content": "Great news!", "posted_by": 7});
        assert!(CommentForm::from_payload(&payload).is_ok());
    }

    #[test]
    fn test_non_object_payload_is_malformed() {
        for payload in [json!(null), json!("text"), json!([1, 2]), json!(42)] {
            let err = NewsForm::from_payload(&payload).unwrap_err();
            assert!(matches!(err, Error::MalformedPayload(_)));
            assert!(matches!(
                FormKind::News.validate(&payload),
                Err(Error::MalformedPayload(_))
            ));
        }
    }

    #[test]
    fn test_numeric_password_is_coerced() {
        let payload = json!({"username": "ivan", "password": 123456});
        let form = LoginForm::from_payload(&payload).unwrap();
        assert_eq!(form.password.as_ref(), "123456");
    }

    #[test]
    fn test_numeric_username_is_rejected() {
        let payload = json!({"username": 123456, "password": "abc123"});
        let err = LoginForm::from_payload(&payload).unwrap_err();
        assert_eq!(
            err.rejections(),
            &[FieldRejection {
                field: "username",
                kind: FieldKind::Name,
            }]
        );
    }

    #[test]
    fn test_serialized_form_is_the_request_body() {
        let form = NewsForm::from_payload(&json!({
            "title": "Exam schedule",
            "content": "Math exam moved to Friday.",
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"title": "Exam schedule", "content": "Math exam moved to Friday."})
        );
    }

    #[test]
    fn test_endpoints_per_form() {
        let api = ApiEndpoints::new("http://127.0.0.1:8000/api");
        assert_eq!(
            FormKind::Login.endpoint(&api, None).as_deref(),
            Some("http://127.0.0.1:8000/api/login/")
        );
        assert_eq!(
            FormKind::Register.endpoint(&api, None).as_deref(),
            Some("http://127.0.0.1:8000/api/register/")
        );
        assert_eq!(
            FormKind::News.endpoint(&api, None).as_deref(),
            Some("http://127.0.0.1:8000/api/news/")
        );
        assert_eq!(FormKind::Comment.endpoint(&api, None), None);
        assert_eq!(
            FormKind::Comment.endpoint(&api, Some(4)).as_deref(),
            Some("http://127.0.0.1:8000/api/news/4/comments/")
        );
    }

    #[test]
    fn test_form_kind_parsing() {
        assert_eq!(FormKind::from_str("Register").unwrap(), FormKind::Register);
        assert!(FormKind::from_str("grades").is_err());
    }

    #[test]
    fn test_rejection_display_includes_message() {
        let rejection = FieldRejection {
            field: "title",
            kind: FieldKind::Title,
        };
        assert_eq!(
            rejection.to_string(),
            "title: Titles must be between 3 and 60 characters long!"
        );
    }
}
