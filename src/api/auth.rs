//! Auth Endpoints
//!
//! Login, registration, and the public department list for the register form.

use gloo_net::http::Request;

use crate::api::client::{decode_empty, decode_json, extract_msg, get_api_base};
use crate::api::types::Department;

#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, serde::Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub department_id: u32,
}

/// Log in and return the issued token
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    // Bad credentials come back as 401 too; this is the one place that
    // must not be treated as an expired session.
    if response.status() == 401 {
        return Err("Invalid email or password".to_string());
    }

    let result: LoginResponse = decode_json(response, "Invalid email or password").await?;
    Ok(result.token)
}

/// Register a new account
pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/register", api_base))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    // Registration is unauthenticated; a 401 here is a plain rejection and
    // must not end a session that may be open in another tab.
    if response.status() == 401 {
        let body = response.text().await.unwrap_or_default();
        return Err(extract_msg(&body, "Registration failed"));
    }

    decode_empty(response, "Registration failed").await
}

/// Fetch departments from the public endpoint (no auth required)
pub async fn fetch_departments() -> Result<Vec<Department>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/departments", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    // Same carve-out as register: this endpoint is public
    if response.status() == 401 {
        let body = response.text().await.unwrap_or_default();
        return Err(extract_msg(&body, "Could not load departments"));
    }

    decode_json(response, "Could not load departments").await
}
