//! Error types for the core domains.
//!
//! - [`BrowseError`] - rejected file-browser navigation
//! - [`CatalogError`] - malformed listing tables
//! - [`AuthError`] - identity service failures, shown verbatim to the user

use serde::Deserialize;
use thiserror::Error;

/// Navigation request that cannot be applied to the current pane state.
///
/// A failed operation leaves the pane untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error("no provider selected")]
    NoProvider,
    #[error("entry {0} is not in the current listing")]
    EntryNotFound(String),
    #[error("{0} is a file, not a folder")]
    NotAFolder(String),
}

/// Listing table could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid listing table: {0}")]
    InvalidTable(#[from] serde_json::Error),
    #[error("listing key {0:?} has no provider")]
    EmptyKey(String),
}

/// Authentication failure.
///
/// The `Display` text is the message rendered under the auth form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter your password.")]
    MissingPassword,
    #[error("The email address is badly formatted.")]
    InvalidEmail,
    #[error("There is no account for this email address.")]
    UserNotFound,
    #[error("The password is incorrect.")]
    WrongPassword,
    #[error("The email or password is incorrect.")]
    InvalidCredentials,
    #[error("An account already exists for this email address.")]
    EmailInUse,
    #[error("{0}")]
    WeakPassword(String),
    #[error("Too many attempts. Please try again later.")]
    TooManyAttempts,
    #[error("This account has been disabled.")]
    UserDisabled,
    #[error("The sign-in popup was closed before completing.")]
    PopupClosed,
    #[error("{0} is not available right now.")]
    Unavailable(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication failed: {0}")]
    Service(String),
}

const DEFAULT_WEAK_PASSWORD: &str = "Password should be at least 6 characters.";

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl AuthError {
    /// Map an identity-service error code to a user-facing error.
    ///
    /// Accepts both REST codes (`EMAIL_NOT_FOUND`, `WEAK_PASSWORD : detail`)
    /// and web SDK codes (`auth/popup-closed-by-user`).
    pub fn from_code(raw: &str) -> Self {
        let (code, detail) = match raw.split_once(" : ") {
            Some((code, detail)) => (code.trim(), Some(detail.trim())),
            None => (raw.trim(), None),
        };

        match code {
            "EMAIL_NOT_FOUND" | "auth/user-not-found" => Self::UserNotFound,
            "INVALID_PASSWORD" | "auth/wrong-password" => Self::WrongPassword,
            "INVALID_LOGIN_CREDENTIALS" | "auth/invalid-credential" => Self::InvalidCredentials,
            "EMAIL_EXISTS" | "auth/email-already-in-use" => Self::EmailInUse,
            "INVALID_EMAIL" | "auth/invalid-email" => Self::InvalidEmail,
            "MISSING_PASSWORD" | "auth/missing-password" => Self::MissingPassword,
            "TOO_MANY_ATTEMPTS_TRY_LATER" | "auth/too-many-requests" => Self::TooManyAttempts,
            "USER_DISABLED" | "auth/user-disabled" => Self::UserDisabled,
            "auth/popup-closed-by-user" | "auth/cancelled-popup-request" => Self::PopupClosed,
            "auth/network-request-failed" => Self::Network("request failed".to_string()),
            c if c.starts_with("WEAK_PASSWORD") || c == "auth/weak-password" => {
                let detail = detail.unwrap_or(DEFAULT_WEAK_PASSWORD);
                let mut message = detail.to_string();
                if !message.ends_with('.') {
                    message.push('.');
                }
                Self::WeakPassword(message)
            }
            other => Self::Service(other.to_string()),
        }
    }

    /// Parse the JSON error envelope returned by the identity REST API.
    pub fn from_response_body(body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::from_code(&envelope.error.message),
            Err(_) => Self::Service("unexpected response from identity service".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_codes() {
        assert_eq!(AuthError::from_code("EMAIL_NOT_FOUND"), AuthError::UserNotFound);
        assert_eq!(AuthError::from_code("INVALID_PASSWORD"), AuthError::WrongPassword);
        assert_eq!(AuthError::from_code("EMAIL_EXISTS"), AuthError::EmailInUse);
        assert_eq!(
            AuthError::from_code("INVALID_LOGIN_CREDENTIALS"),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn test_sdk_codes() {
        assert_eq!(
            AuthError::from_code("auth/popup-closed-by-user"),
            AuthError::PopupClosed
        );
        assert_eq!(
            AuthError::from_code("auth/too-many-requests"),
            AuthError::TooManyAttempts
        );
    }

    #[test]
    fn test_weak_password_detail() {
        let err = AuthError::from_code("WEAK_PASSWORD : Password should be at least 6 characters");
        assert_eq!(
            err.to_string(),
            "Password should be at least 6 characters."
        );

        let err = AuthError::from_code("auth/weak-password");
        assert_eq!(err.to_string(), DEFAULT_WEAK_PASSWORD);
    }

    #[test]
    fn test_unknown_code_is_surfaced() {
        let err = AuthError::from_code("OPERATION_NOT_ALLOWED");
        assert_eq!(err.to_string(), "Authentication failed: OPERATION_NOT_ALLOWED");
    }

    #[test]
    fn test_response_body() {
        let body = r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND","errors":[]}}"#;
        assert_eq!(AuthError::from_response_body(body), AuthError::UserNotFound);

        let err = AuthError::from_response_body("<html>bad gateway</html>");
        assert!(matches!(err, AuthError::Service(_)));
    }

    #[test]
    fn test_browse_error_display() {
        assert_eq!(
            BrowseError::NotAFolder("Backup.zip".to_string()).to_string(),
            "Backup.zip is a file, not a folder"
        );
    }
}
