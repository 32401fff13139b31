//! HOD Endpoints
//!
//! Timetable management and attendance verification for heads of department.

use gloo_net::http::Request;

use crate::api::client::{authorized, decode_empty, decode_json, get_api_base};
use crate::api::types::{AttendanceRecord, HodSchedules, TimetableData};

#[derive(Clone, Debug, serde::Serialize)]
pub struct ScheduleDraft {
    pub subject_id: u32,
    pub lecturer_id: u32,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SpecialScheduleDraft {
    pub subject_id: u32,
    pub lecturer_id: u32,
    pub class_date: String,
    pub start_time: String,
    pub end_time: String,
    pub target_department_id: u32,
}

/// Weekly and upcoming special schedules for the HOD's department
pub async fn fetch_schedules() -> Result<HodSchedules, String> {
    let response = authorized(Request::get(&format!("{}/api/hod/schedules", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch schedules").await
}

/// Lecturer and subject options for the timetable forms
pub async fn fetch_timetable_data() -> Result<TimetableData, String> {
    let response = authorized(Request::get(&format!(
        "{}/api/hod/data-for-timetable",
        get_api_base()
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch timetable data").await
}

pub async fn create_schedule(draft: &ScheduleDraft) -> Result<(), String> {
    let response = authorized(Request::post(&format!("{}/api/hod/schedules", get_api_base())))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to schedule class").await
}

pub async fn delete_schedule(id: u32) -> Result<(), String> {
    let response = authorized(Request::delete(&format!(
        "{}/api/hod/schedules/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to delete schedule").await
}

pub async fn create_special_schedule(draft: &SpecialScheduleDraft) -> Result<(), String> {
    let response = authorized(Request::post(&format!(
        "{}/api/hod/special-schedules",
        get_api_base()
    )))
    .json(draft)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to schedule special class").await
}

pub async fn delete_special_schedule(id: u32) -> Result<(), String> {
    let response = authorized(Request::delete(&format!(
        "{}/api/hod/special-schedules/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to delete special schedule").await
}

/// Attendance records awaiting verification, newest first
pub async fn fetch_pending_attendance() -> Result<Vec<AttendanceRecord>, String> {
    let response = authorized(Request::get(&format!(
        "{}/api/hod/attendance/pending",
        get_api_base()
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch pending attendance").await
}

/// One-way transition; verified records leave the pending list
pub async fn verify_attendance(id: u32) -> Result<(), String> {
    let response = authorized(Request::post(&format!(
        "{}/api/hod/attendance/verify/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to verify attendance").await
}
