//! Admin Endpoints
//!
//! CRUD over the master-data collections, semester activation, and report
//! generation.

use gloo_net::http::Request;

use crate::api::client::{authorized, decode_empty, decode_json, decode_text, get_api_base};
use crate::api::types::{Department, Program, Report, Semester, Subject, User};

#[derive(Clone, Debug, serde::Serialize)]
pub struct DepartmentDraft {
    pub name: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SemesterDraft {
    pub year: i32,
    pub semester_number: u8,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ProgramDraft {
    pub name: String,
    pub level: String,
    pub department_id: u32,
    pub duration_in_years: u8,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SubjectDraft {
    pub name: String,
    pub code: String,
    pub program_id: u32,
    pub year_of_study: u8,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct UserDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub department_id: u32,
}

/// Update payload for a user; the password is never edited here
#[derive(Clone, Debug, serde::Serialize)]
pub struct UserUpdate {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub department_id: Option<u32>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ReportFilters {
    pub department_id: u32,
    pub start_date: String,
    pub end_date: String,
}

// ============ Departments ============

pub async fn fetch_departments() -> Result<Vec<Department>, String> {
    let response = authorized(Request::get(&format!("{}/api/admin/departments", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch departments").await
}

pub async fn create_department(draft: &DepartmentDraft) -> Result<(), String> {
    let response = authorized(Request::post(&format!("{}/api/admin/departments", get_api_base())))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to add department").await
}

pub async fn update_department(id: u32, draft: &DepartmentDraft) -> Result<(), String> {
    let response = authorized(Request::put(&format!(
        "{}/api/admin/departments/{}",
        get_api_base(),
        id
    )))
    .json(draft)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to update department").await
}

pub async fn delete_department(id: u32) -> Result<(), String> {
    let response = authorized(Request::delete(&format!(
        "{}/api/admin/departments/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to delete department").await
}

// ============ Semesters ============

pub async fn fetch_semesters() -> Result<Vec<Semester>, String> {
    let response = authorized(Request::get(&format!("{}/api/admin/semesters", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch semesters").await
}

pub async fn create_semester(draft: &SemesterDraft) -> Result<(), String> {
    let response = authorized(Request::post(&format!("{}/api/admin/semesters", get_api_base())))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to add semester").await
}

pub async fn update_semester(id: u32, draft: &SemesterDraft) -> Result<(), String> {
    let response = authorized(Request::put(&format!(
        "{}/api/admin/semesters/{}",
        get_api_base(),
        id
    )))
    .json(draft)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to update semester").await
}

pub async fn delete_semester(id: u32) -> Result<(), String> {
    let response = authorized(Request::delete(&format!(
        "{}/api/admin/semesters/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to delete semester").await
}

/// Activate one semester; the server deactivates any other
pub async fn activate_semester(id: u32) -> Result<(), String> {
    let response = authorized(Request::post(&format!(
        "{}/api/admin/semesters/activate/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to activate semester").await
}

/// Deactivate whichever semester is currently active
pub async fn deactivate_semester() -> Result<(), String> {
    let response = authorized(Request::post(&format!(
        "{}/api/admin/semesters/deactivate",
        get_api_base()
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to deactivate semester").await
}

// ============ Programs ============

pub async fn fetch_programs() -> Result<Vec<Program>, String> {
    let response = authorized(Request::get(&format!("{}/api/admin/programs", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch programs").await
}

pub async fn create_program(draft: &ProgramDraft) -> Result<(), String> {
    let response = authorized(Request::post(&format!("{}/api/admin/programs", get_api_base())))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to add program").await
}

pub async fn update_program(id: u32, draft: &ProgramDraft) -> Result<(), String> {
    let response = authorized(Request::put(&format!(
        "{}/api/admin/programs/{}",
        get_api_base(),
        id
    )))
    .json(draft)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to update program").await
}

pub async fn delete_program(id: u32) -> Result<(), String> {
    let response = authorized(Request::delete(&format!(
        "{}/api/admin/programs/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to delete program").await
}

// ============ Subjects ============

pub async fn fetch_subjects() -> Result<Vec<Subject>, String> {
    let response = authorized(Request::get(&format!("{}/api/admin/subjects", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch subjects").await
}

pub async fn create_subject(draft: &SubjectDraft) -> Result<(), String> {
    let response = authorized(Request::post(&format!("{}/api/admin/subjects", get_api_base())))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to add subject").await
}

pub async fn update_subject(id: u32, draft: &SubjectDraft) -> Result<(), String> {
    let response = authorized(Request::put(&format!(
        "{}/api/admin/subjects/{}",
        get_api_base(),
        id
    )))
    .json(draft)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to update subject").await
}

pub async fn delete_subject(id: u32) -> Result<(), String> {
    let response = authorized(Request::delete(&format!(
        "{}/api/admin/subjects/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to delete subject").await
}

// ============ Users ============

pub async fn fetch_users() -> Result<Vec<User>, String> {
    let response = authorized(Request::get(&format!("{}/api/admin/users", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to fetch users").await
}

pub async fn create_user(draft: &UserDraft) -> Result<(), String> {
    let response = authorized(Request::post(&format!("{}/api/admin/users", get_api_base())))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to add user").await
}

pub async fn update_user(id: u32, update: &UserUpdate) -> Result<(), String> {
    let response = authorized(Request::put(&format!(
        "{}/api/admin/users/{}",
        get_api_base(),
        id
    )))
    .json(update)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to update user").await
}

pub async fn delete_user(id: u32) -> Result<(), String> {
    let response = authorized(Request::delete(&format!(
        "{}/api/admin/users/{}",
        get_api_base(),
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_empty(response, "Failed to delete user").await
}

// ============ Reports ============

pub async fn generate_report(filters: &ReportFilters) -> Result<Report, String> {
    let response = authorized(Request::post(&format!("{}/api/reports/generate", get_api_base())))
        .json(filters)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode_json(response, "Failed to generate report").await
}

/// Same filters as [`generate_report`], but the body comes back as CSV text
pub async fn generate_report_csv(filters: &ReportFilters) -> Result<String, String> {
    let response = authorized(Request::post(&format!(
        "{}/api/reports/generate-csv",
        get_api_base()
    )))
    .json(filters)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    decode_text(response, "Failed to generate CSV report").await
}
