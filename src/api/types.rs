//! Wire Types
//!
//! JSON shapes exchanged with the LECATS backend.

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Semester {
    pub id: u32,
    pub year: i32,
    pub semester_number: u8,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Program {
    pub id: u32,
    pub name: String,
    pub level: String,
    pub department_id: u32,
    #[serde(default)]
    pub department_name: Option<String>,
    pub duration_in_years: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Subject {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub program_id: u32,
    #[serde(default)]
    pub program_name: Option<String>,
    pub year_of_study: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: u32,
    pub full_name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub department_id: Option<u32>,
    #[serde(default)]
    pub department_name: Option<String>,
}

/// Recurring weekly class slot (denormalized for display)
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClassSchedule {
    pub id: u32,
    pub subject_name: String,
    pub lecturer_name: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

/// One-off class on a specific date
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SpecialSchedule {
    pub id: u32,
    pub subject_name: String,
    #[serde(default)]
    pub lecturer_name: Option<String>,
    pub class_date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Attendance record as returned to HODs and lecturers. `course` and
/// `lecturer_name` are only present on some endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AttendanceRecord {
    pub id: u32,
    pub present: bool,
    pub timestamp: String,
    pub verified: bool,
    pub cr_name: String,
    #[serde(default)]
    pub excuse_comment: Option<String>,
    #[serde(default)]
    pub excuse_file: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub lecturer_name: Option<String>,
}

impl AttendanceRecord {
    /// An excuse can be filed only for an absence that has none yet
    pub fn can_file_excuse(&self) -> bool {
        !self.present && self.excuse_file.is_none()
    }
}

/// HOD timetable view: recurring slots plus upcoming one-offs
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HodSchedules {
    #[serde(default)]
    pub weekly_schedules: Vec<ClassSchedule>,
    #[serde(default)]
    pub special_schedules: Vec<SpecialSchedule>,
}

/// Select options for the HOD timetable forms. Subject labels arrive
/// pre-composed as `Program: CODE - Name`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TimetableData {
    #[serde(default)]
    pub lecturers: Vec<LecturerRef>,
    #[serde(default)]
    pub subjects: Vec<SubjectRef>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LecturerRef {
    pub id: u32,
    pub full_name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubjectRef {
    pub id: u32,
    pub name: String,
}

/// A lecturer's weekly slot with its attendance history
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LecturerClass {
    pub id: u32,
    pub subject_name: String,
    pub day_of_week: String,
    pub program_name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub attendance_history: Vec<AttendanceRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LecturerDashboardData {
    #[serde(default)]
    pub weekly_schedule: Vec<LecturerClass>,
    #[serde(default)]
    pub special_schedules: Vec<SpecialSchedule>,
}

/// One of today's classes from the CR's perspective. Special classes have
/// a " (Special)" suffix already applied to `subject_name` by the server.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TodayClass {
    pub schedule_id: u32,
    pub subject_name: String,
    pub lecturer_name: String,
    pub start_time: String,
    pub end_time: String,
    pub submitted: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub highlights: ReportHighlights,
    pub breakdown: Vec<LecturerBreakdown>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReportSummary {
    pub department_name: String,
    pub period: String,
    pub total_classes_recorded: u32,
    pub overall_attendance_rate: f64,
}

/// Pre-formatted highlight strings, absent when the breakdown is empty
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReportHighlights {
    #[serde(default)]
    pub most_present_lecturer: Option<String>,
    #[serde(default)]
    pub highest_absence_lecturer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LecturerBreakdown {
    pub lecturer_name: String,
    pub total_classes: u32,
    pub classes_attended: u32,
    pub classes_missed: u32,
    pub attendance_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(present: bool, excuse_file: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: 1,
            present,
            timestamp: "2026-03-02T08:15:00".to_string(),
            verified: false,
            cr_name: "CR".to_string(),
            excuse_comment: None,
            excuse_file: excuse_file.map(str::to_string),
            course: None,
            lecturer_name: None,
        }
    }

    #[test]
    fn test_excuse_only_for_unexcused_absence() {
        assert!(record(false, None).can_file_excuse());
        assert!(!record(true, None).can_file_excuse());
        assert!(!record(false, Some("excuse_1_note.pdf")).can_file_excuse());
    }

    #[test]
    fn test_attendance_record_decodes_without_optional_fields() {
        let json = r#"{
            "id": 4, "present": false, "timestamp": "2026-03-02T08:15:00",
            "verified": false, "cr_name": "Amina",
            "excuse_comment": null, "excuse_file": null
        }"#;
        let rec: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(rec.can_file_excuse());
        assert_eq!(rec.course, None);
    }

    #[test]
    fn test_highlights_decode_when_null() {
        let json = r#"{"most_present_lecturer": null, "highest_absence_lecturer": null}"#;
        let h: ReportHighlights = serde_json::from_str(json).unwrap();
        assert_eq!(h.most_present_lecturer, None);
    }
}
