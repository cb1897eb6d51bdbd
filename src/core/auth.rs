//! Identity service client.
//!
//! Email/password accounts go through the Identity Toolkit REST API.
//! Google sign-in needs a popup, which only the vendor's JavaScript SDK can
//! drive, so it is delegated to the `window.aquaAuth` bridge via the
//! Reflect API.
//!
//! The signed-in [`User`] is persisted in localStorage and restored (with a
//! token refresh) on the next page load.

use aquacloud_core::{AuthError, Credentials, User};
use js_sys::{Function, Object, Promise, Reflect};
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::{
    AUTH_BRIDGE_GLOBAL, FIREBASE_API_KEY, FIREBASE_AUTH_DOMAIN, FIREBASE_PROJECT_ID,
    IDENTITY_ENDPOINT, TOKEN_ENDPOINT, USER_SESSION_KEY,
};
use crate::core::error::BridgeError;
use crate::utils::{dom, fetch, log, storage};

// ============================================================================
// REST Payloads
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    user_id: String,
}

fn api_key(feature: &str) -> Result<&'static str, AuthError> {
    FIREBASE_API_KEY.ok_or_else(|| AuthError::Unavailable(feature.to_string()))
}

fn accounts_url(method: &str) -> Result<String, AuthError> {
    let key = api_key("Email sign-in")?;
    Ok(format!("{}/accounts:{}?key={}", IDENTITY_ENDPOINT, method, key))
}

// ============================================================================
// Email / Password
// ============================================================================

/// Sign in an existing account.
pub async fn sign_in(credentials: &Credentials) -> Result<User, AuthError> {
    password_request("signInWithPassword", credentials).await
}

/// Create an account and sign it in.
pub async fn sign_up(credentials: &Credentials) -> Result<User, AuthError> {
    password_request("signUp", credentials).await
}

async fn password_request(method: &str, credentials: &Credentials) -> Result<User, AuthError> {
    credentials.validate()?;

    let url = accounts_url(method)?;
    let body = PasswordRequest {
        email: &credentials.email,
        password: &credentials.password,
        return_secure_token: true,
    };
    let user: User = fetch::post_json(&url, &body).await?;

    remember(&user);
    Ok(user)
}

/// Exchange the refresh token for a fresh ID token.
async fn refresh(user: User) -> Result<User, AuthError> {
    let key = api_key("Session refresh")?;
    let url = format!("{}?key={}", TOKEN_ENDPOINT, key);
    let body = RefreshRequest {
        grant_type: "refresh_token",
        refresh_token: &user.refresh_token,
    };
    let fresh: RefreshResponse = fetch::post_json(&url, &body).await?;

    if fresh.user_id != user.uid {
        return Err(AuthError::Service("token belongs to another account".to_string()));
    }

    Ok(User {
        id_token: fresh.id_token,
        refresh_token: fresh.refresh_token,
        ..user
    })
}

// ============================================================================
// Google (JavaScript bridge)
// ============================================================================

/// Firebase web config handed to `aquaAuth.signInWithGoogle`.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct BridgeConfig {
    api_key: String,
    auth_domain: String,
    project_id: String,
}

impl BridgeConfig {
    /// Build from the compile-time settings. Key and project id are required.
    fn from_parts(
        api_key: Option<&str>,
        project_id: Option<&str>,
        auth_domain: Option<&str>,
    ) -> Result<Self, AuthError> {
        let unavailable = || AuthError::Unavailable("Google sign-in".to_string());
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(unavailable)?;
        let project_id = project_id.filter(|p| !p.is_empty()).ok_or_else(unavailable)?;
        let auth_domain = auth_domain
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}.firebaseapp.com", project_id));

        Ok(Self {
            api_key: api_key.to_string(),
            auth_domain,
            project_id: project_id.to_string(),
        })
    }

    fn from_build() -> Result<Self, AuthError> {
        Self::from_parts(FIREBASE_API_KEY, FIREBASE_PROJECT_ID, FIREBASE_AUTH_DOMAIN)
    }
}

fn bridge() -> Result<Object, BridgeError> {
    let window = dom::window().ok_or(BridgeError::NoWindow)?;
    Reflect::get(&window, &AUTH_BRIDGE_GLOBAL.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(BridgeError::NotInstalled)
}

fn bridge_method(bridge: &Object, method: &str) -> Result<Function, BridgeError> {
    Reflect::get(bridge, &method.into())
        .map_err(|_| BridgeError::CallFailed)?
        .dyn_into::<Function>()
        .map_err(|_| BridgeError::CallFailed)
}

/// Call `aquaAuth.<method>(arg)` and await the returned promise.
async fn call_bridge(method: &str, arg: &JsValue) -> Result<JsValue, BridgeError> {
    let bridge = bridge()?;
    let func = bridge_method(&bridge, method)?;

    let promise: Promise = func
        .call1(&bridge, arg)
        .map_err(|_| BridgeError::CallFailed)?
        .dyn_into()
        .map_err(|_| BridgeError::CallFailed)?;

    JsFuture::from(promise)
        .await
        .map_err(|e| BridgeError::Rejected(error_code(&e)))
}

/// SDK errors carry their code (`auth/popup-closed-by-user`) on `.code`.
fn error_code(err: &JsValue) -> Option<String> {
    Reflect::get(err, &"code".into())
        .ok()
        .and_then(|code| code.as_string())
}

/// Sign in through the Google popup.
pub async fn sign_in_with_google() -> Result<User, AuthError> {
    let config = BridgeConfig::from_build()?;
    let config = serde_wasm_bindgen::to_value(&config)
        .map_err(|e| BridgeError::InvalidResponse(e.to_string()))?;

    let value = call_bridge("signInWithGoogle", &config).await?;
    let user: User = serde_wasm_bindgen::from_value(value)
        .map_err(|e| BridgeError::InvalidResponse(e.to_string()))?;

    remember(&user);
    Ok(user)
}

// ============================================================================
// Session
// ============================================================================

/// Restore the persisted session, if any.
///
/// A session the service rejects is dropped. When the service cannot be
/// reached the stored user is kept as-is.
pub async fn restore() -> Option<User> {
    let user: User = storage::get(USER_SESSION_KEY)?;

    match refresh(user.clone()).await {
        Ok(fresh) => {
            remember(&fresh);
            Some(fresh)
        }
        Err(AuthError::Network(msg)) => {
            log::warn(&format!("Session not refreshed, keeping it: {}", msg));
            Some(user)
        }
        Err(AuthError::Unavailable(_)) => Some(user),
        Err(e) => {
            log::warn(&format!("Stored session rejected: {}", e));
            forget();
            None
        }
    }
}

/// Sign out locally and in the bridge.
pub fn logout() {
    forget();

    if let Ok(bridge) = bridge()
        && let Ok(sign_out) = bridge_method(&bridge, "signOut")
    {
        let _ = sign_out.call0(&bridge);
    }
}

fn remember(user: &User) {
    if let Err(e) = storage::set(USER_SESSION_KEY, user) {
        log::warn(&format!("Session not persisted: {}", e));
    }
}

fn forget() {
    if let Err(e) = storage::remove(USER_SESSION_KEY) {
        log::warn(&format!("Session not cleared: {}", e));
    }
}
