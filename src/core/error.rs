//! Browser-side error types.
//!
//! Domain errors (browsing, catalog, identity) live in `aquacloud_core`.
//! These cover the browser plumbing underneath them:
//!
//! - [`FetchError`] - HTTP requests to the identity service
//! - [`StorageError`] - localStorage persistence
//! - [`BridgeError`] - calls into the injected JavaScript auth bridge

use std::fmt;

use aquacloud_core::AuthError;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Request could not be built or sent (offline, CORS, DNS)
    NetworkError(String),
    /// Non-2xx response, with the raw body for error-code extraction
    HttpError { status: u16, body: String },
    /// Failed to read response body
    ResponseReadFailed,
    /// JSON parsing error
    JsonParseError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError { status, .. } => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for AuthError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NetworkError(msg) => AuthError::Network(msg),
            FetchError::HttpError { body, .. } => AuthError::from_response_body(&body),
            other => AuthError::Service(other.to_string()),
        }
    }
}

/// localStorage errors.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed iframe).
    Unavailable,
    /// Failed to serialize value to JSON.
    SerializationFailed(String),
    /// Failed to write to localStorage (quota).
    WriteFailed,
    /// Failed to remove from localStorage.
    RemoveFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "localStorage not available"),
            Self::SerializationFailed(msg) => write!(f, "failed to serialize: {}", msg),
            Self::WriteFailed => write!(f, "failed to save to localStorage"),
            Self::RemoveFailed => write!(f, "failed to remove from localStorage"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Errors from the `window.aquaAuth` bridge.
#[derive(Debug, Clone)]
pub enum BridgeError {
    /// Browser window not available
    NoWindow,
    /// Bridge script not loaded
    NotInstalled,
    /// Bridge object present but the method is missing or not callable
    CallFailed,
    /// The returned promise rejected; carries the error code if one was given
    Rejected(Option<String>),
    /// The resolved value did not match the expected shape
    InvalidResponse(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NotInstalled => write!(f, "Sign-in bridge not loaded"),
            Self::CallFailed => write!(f, "Failed to call sign-in bridge"),
            Self::Rejected(Some(code)) => write!(f, "Sign-in rejected: {}", code),
            Self::Rejected(None) => write!(f, "Sign-in rejected"),
            Self::InvalidResponse(msg) => write!(f, "Unexpected sign-in response: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<BridgeError> for AuthError {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::Rejected(Some(code)) => AuthError::from_code(&code),
            BridgeError::NoWindow | BridgeError::NotInstalled | BridgeError::CallFailed => {
                AuthError::Unavailable("Google sign-in".to_string())
            }
            other => AuthError::Service(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_maps_service_code() {
        let err = FetchError::HttpError {
            status: 400,
            body: r#"{"error":{"code":400,"message":"EMAIL_EXISTS"}}"#.to_string(),
        };
        assert_eq!(AuthError::from(err), AuthError::EmailInUse);
    }

    #[test]
    fn test_network_error_is_retryable_message() {
        let err = AuthError::from(FetchError::NetworkError("offline".to_string()));
        assert!(matches!(err, AuthError::Network(_)));
    }

    #[test]
    fn test_bridge_rejection_uses_code() {
        let err = BridgeError::Rejected(Some("auth/popup-closed-by-user".to_string()));
        assert_eq!(AuthError::from(err), AuthError::PopupClosed);

        let err = AuthError::from(BridgeError::NotInstalled);
        assert_eq!(err.to_string(), "Google sign-in is not available right now.");
    }

    #[test]
    fn test_display() {
        assert_eq!(StorageError::Unavailable.to_string(), "localStorage not available");
        assert_eq!(
            FetchError::HttpError {
                status: 503,
                body: String::new()
            }
            .to_string(),
            "HTTP error: 503"
        );
    }
}
