//! Lecturer Endpoints
//!
//! Read-only dashboard data and excuse PDF uploads.

use gloo_net::http::Request;

use crate::api::client::{authorized, decode_empty, decode_json, get_api_base};
use crate::api::types::LecturerDashboardData;

/// Weekly schedule (with attendance history) plus upcoming special classes
pub async fn fetch_dashboard_data() -> Result<LecturerDashboardData, String> {
    let response = authorized(Request::get(&format!(
        "{}/api/lecturer/dashboard-data",
        get_api_base()
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch dashboard data").await
}

/// Upload an excuse PDF for an absence, with an optional comment.
///
/// Sent as multipart form data; the server rejects non-PDF files and
/// records older than 24 hours.
pub async fn upload_excuse(
    attendance_id: u32,
    file: &web_sys::File,
    comment: &str,
) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "Could not build upload form".to_string())?;
    form.append_with_blob("file", file)
        .map_err(|_| "Could not attach file".to_string())?;
    if !comment.is_empty() {
        form.append_with_str("comment", comment)
            .map_err(|_| "Could not attach comment".to_string())?;
    }

    let response = authorized(Request::post(&format!(
        "{}/api/lecturer/attendance/{}/excuse",
        get_api_base(),
        attendance_id
    )))
    .body(form)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to upload excuse").await
}
