//! HTTP API Client Plumbing
//!
//! Base URL handling, bearer auth, and shared response decoding for the
//! LECATS REST API.

use gloo_net::http::{RequestBuilder, Response};

use crate::state::session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("lecats_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// URL an uploaded excuse file is served from
pub fn upload_url(filename: &str) -> String {
    format!("{}/uploads/{}", get_api_base(), filename)
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    msg: Option<String>,
}

/// Attach the bearer token to an outbound request, when one is stored
pub(crate) fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Pull the server's `msg` out of an error body, falling back to a
/// per-operation message when the body is empty or not JSON.
pub(crate) fn extract_msg(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .and_then(|e| e.msg)
        .unwrap_or_else(|| fallback.to_string())
}

/// Turn a non-2xx response into a user-displayable message.
///
/// A 401 on any endpoint ends the session: the token is dropped and the
/// browser is sent back to the public root.
pub(crate) async fn error_for(response: Response, fallback: &str) -> String {
    if response.status() == 401 {
        expire_session();
        return "Session expired. Please log in again.".to_string();
    }

    let body = response.text().await.unwrap_or_default();
    extract_msg(&body, fallback)
}

/// Decode a JSON response body, routing failures through [`error_for`]
pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, String> {
    if !response.ok() {
        return Err(error_for(response, fallback).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check a response for success, discarding the body
pub(crate) async fn decode_empty(response: Response, fallback: &str) -> Result<(), String> {
    if !response.ok() {
        return Err(error_for(response, fallback).await);
    }
    Ok(())
}

/// Decode a plain-text response body (CSV export)
pub(crate) async fn decode_text(response: Response, fallback: &str) -> Result<String, String> {
    if !response.ok() {
        return Err(error_for(response, fallback).await);
    }

    response
        .text()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

fn expire_session() {
    session::clear_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_msg_prefers_server_text() {
        let body = r#"{"msg": "Email already exists"}"#;
        assert_eq!(extract_msg(body, "Failed to register"), "Email already exists");
    }

    #[test]
    fn test_extract_msg_falls_back_on_garbage() {
        assert_eq!(extract_msg("<html>502</html>", "Failed to register"), "Failed to register");
        assert_eq!(extract_msg("", "Failed to register"), "Failed to register");
        assert_eq!(extract_msg(r#"{"other": 1}"#, "Failed to register"), "Failed to register");
    }
}
