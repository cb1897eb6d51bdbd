//! JSON requests over `gloo-net`.
//!
//! Error bodies are kept on [`FetchError::HttpError`] because the identity
//! service reports failures as a JSON envelope with a non-2xx status.

use gloo_net::http::{Request, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::FetchError;

/// POST `body` as JSON and parse a JSON response.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = Request::post(url)
        .json(body)
        .map_err(|e| FetchError::JsonParseError(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::NetworkError(e.to_string()))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    if !response.ok() {
        return Err(FetchError::HttpError { status, body: text });
    }

    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}
