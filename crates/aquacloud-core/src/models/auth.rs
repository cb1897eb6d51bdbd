//! Identity session state.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Minimal shape check; the identity service does the real validation.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^ \t\r\n@]+@[^ \t\r\n@]+\.[^ \t\r\n@]+$").expect("email pattern is valid")
});

/// A signed-in account as returned by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "localId")]
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl User {
    /// Name shown in headers: display name, else the email's local part.
    pub fn short_name(&self) -> String {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        self.email
            .split_once('@')
            .map(|(local, _)| local.to_string())
            .unwrap_or_else(|| self.email.clone())
    }
}

/// Process-wide authentication state.
///
/// Starts as `Loading` until a persisted session has been checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Loading,
    SignedOut,
    SignedIn(User),
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::SignedIn(user) => user.short_name(),
            Self::Loading => "loading...".to_string(),
            Self::SignedOut => "guest".to_string(),
        }
    }
}

/// Email/password pair entered in the auth form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Reject obviously incomplete input before calling the identity service.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(AuthError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(display_name: Option<&str>) -> User {
        User {
            uid: "uid-1".to_string(),
            email: "aqua@example.com".to_string(),
            display_name: display_name.map(str::to_string),
            id_token: String::new(),
            refresh_token: String::new(),
        }
    }

    #[test]
    fn test_default_is_loading() {
        let state = AuthState::default();
        assert!(state.is_loading());
        assert!(state.user().is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(AuthState::SignedOut.display_name(), "guest");
        assert_eq!(AuthState::SignedIn(user(None)).display_name(), "aqua");
        assert_eq!(
            AuthState::SignedIn(user(Some("Aqua Customer"))).display_name(),
            "Aqua Customer"
        );
        assert_eq!(AuthState::SignedIn(user(Some(""))).display_name(), "aqua");
    }

    #[test]
    fn test_user_from_rest_payload() {
        let json = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "abc123",
            "email": "aqua@example.com",
            "displayName": "",
            "idToken": "tok",
            "registered": true,
            "refreshToken": "ref",
            "expiresIn": "3600"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.uid, "abc123");
        assert_eq!(user.id_token, "tok");
        assert_eq!(user.refresh_token, "ref");
        assert_eq!(user.short_name(), "aqua");
    }

    #[test]
    fn test_user_roundtrips_through_storage_format() {
        let original = user(Some("Aqua"));
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"localId\""));
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_credentials_validation() {
        assert_eq!(
            Credentials::new("", "pw").validate(),
            Err(AuthError::MissingEmail)
        );
        assert_eq!(
            Credentials::new("not-an-email", "pw").validate(),
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            Credentials::new("a@b.io", "").validate(),
            Err(AuthError::MissingPassword)
        );
        assert!(Credentials::new("  a@b.io ", "secret").validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(Credentials::new("first.last@mail.example.com", "pw").validate().is_ok());
        assert_eq!(
            Credentials::new("a b@c.io", "pw").validate(),
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            Credentials::new("a@b\tc.io", "pw").validate(),
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            Credentials::new("a@@b.io", "pw").validate(),
            Err(AuthError::InvalidEmail)
        );
    }
}
