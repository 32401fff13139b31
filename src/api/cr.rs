//! CR Endpoints
//!
//! Today's schedule and one-shot attendance submission.

use gloo_net::http::Request;

use crate::api::client::{authorized, decode_empty, decode_json, get_api_base};
use crate::api::types::TodayClass;

/// Today's regular and special classes for the CR's department. The server
/// marks classes whose attendance was already submitted today.
pub async fn fetch_todays_schedule() -> Result<Vec<TodayClass>, String> {
    let response = authorized(Request::get(&format!(
        "{}/api/cr/todays-schedule",
        get_api_base()
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch today's schedule").await
}

/// Submit a present/absent mark for one of today's classes. The server
/// answers 409 when attendance for the slot was already submitted today.
pub async fn submit_attendance(class_schedule_id: u32, present: bool) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct AttendanceRequest {
        class_schedule_id: u32,
        present: bool,
    }

    let response = authorized(Request::post(&format!("{}/api/attendance", get_api_base())))
        .json(&AttendanceRequest {
            class_schedule_id,
            present,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to submit attendance").await
}
