//! Report Derivations
//!
//! Pure transforms from a generated report to chart geometry. The server
//! computes the report; nothing here touches the network.

use crate::api::types::{LecturerBreakdown, Report};

/// Two-slice proportion for the pie chart
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttendanceSplit {
    pub attended: u32,
    pub missed: u32,
}

impl AttendanceSplit {
    pub fn total(&self) -> u32 {
        self.attended + self.missed
    }
}

/// Attended vs missed, summed across the breakdown. Attended is derived
/// from the recorded total so the two slices always sum to it.
pub fn attendance_split(report: &Report) -> AttendanceSplit {
    let missed: u32 = report.breakdown.iter().map(|b| b.classes_missed).sum();
    let attended = report.summary.total_classes_recorded.saturating_sub(missed);
    AttendanceSplit { attended, missed }
}

/// One bar group per lecturer
#[derive(Clone, Debug, PartialEq)]
pub struct LecturerBars {
    pub lecturer_name: String,
    pub attended: u32,
    pub missed: u32,
}

pub fn lecturer_bars(breakdown: &[LecturerBreakdown]) -> Vec<LecturerBars> {
    breakdown
        .iter()
        .map(|b| LecturerBars {
            lecturer_name: b.lecturer_name.clone(),
            attended: b.classes_attended,
            missed: b.classes_missed,
        })
        .collect()
}

/// Largest count across all bars, clamped to 1 so the y-scale stays finite
pub fn max_bar_value(bars: &[LecturerBars]) -> u32 {
    bars.iter()
        .map(|b| b.attended.max(b.missed))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Download name for the CSV export
pub fn csv_filename(department_name: &str) -> String {
    format!("attendance-report-{}.csv", department_name.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{ReportHighlights, ReportSummary};

    fn breakdown(name: &str, attended: u32, missed: u32) -> LecturerBreakdown {
        let total = attended + missed;
        LecturerBreakdown {
            lecturer_name: name.to_string(),
            total_classes: total,
            classes_attended: attended,
            classes_missed: missed,
            attendance_rate: if total > 0 {
                attended as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        }
    }

    fn report(entries: Vec<LecturerBreakdown>) -> Report {
        let total: u32 = entries.iter().map(|b| b.total_classes).sum();
        let attended: u32 = entries.iter().map(|b| b.classes_attended).sum();
        Report {
            summary: ReportSummary {
                department_name: "Computer Science".to_string(),
                period: "2026-01-01 to 2026-01-31".to_string(),
                total_classes_recorded: total,
                overall_attendance_rate: if total > 0 {
                    attended as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            },
            highlights: ReportHighlights {
                most_present_lecturer: None,
                highest_absence_lecturer: None,
            },
            breakdown: entries,
        }
    }

    #[test]
    fn test_split_sums_missed_across_lecturers() {
        let report = report(vec![breakdown("A", 8, 2), breakdown("B", 5, 5)]);
        let split = attendance_split(&report);
        assert_eq!(split.missed, 7);
        assert_eq!(split.attended, 13);
        assert_eq!(split.total(), report.summary.total_classes_recorded);
    }

    #[test]
    fn test_split_on_empty_report() {
        let split = attendance_split(&report(vec![]));
        assert_eq!(split, AttendanceSplit { attended: 0, missed: 0 });
        assert_eq!(split.total(), 0);
    }

    #[test]
    fn test_bars_mirror_breakdown() {
        let bars = lecturer_bars(&[breakdown("A", 8, 2), breakdown("B", 5, 5)]);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].lecturer_name, "A");
        assert_eq!(bars[0].attended, 8);
        assert_eq!(bars[1].missed, 5);
    }

    #[test]
    fn test_max_bar_value_never_zero() {
        assert_eq!(max_bar_value(&[]), 1);
        let bars = lecturer_bars(&[breakdown("A", 8, 2), breakdown("B", 5, 12)]);
        assert_eq!(max_bar_value(&bars), 12);
    }

    #[test]
    fn test_csv_filename_replaces_spaces() {
        assert_eq!(
            csv_filename("Computer Science"),
            "attendance-report-Computer_Science.csv"
        );
        assert_eq!(csv_filename("Law"), "attendance-report-Law.csv");
        assert_eq!(
            csv_filename("Arts and Social Sciences"),
            "attendance-report-Arts_and_Social_Sciences.csv"
        );
    }
}
