//! Lecturer Dashboard
//!
//! Read-only weekly schedule grouped by day-of-week tabs, attendance history
//! per class, and excuse PDF uploads for unexcused absences.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::types::{AttendanceRecord, LecturerClass, LecturerDashboardData};
use crate::components::ListSkeleton;
use crate::state::global::GlobalState;

const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Lecturer dashboard
#[component]
pub fn LecturerDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let data = create_rw_signal(LecturerDashboardData::default());
    let (loaded, set_loaded) = create_signal(false);
    let (active_day, set_active_day) = create_signal(default_day(
        &chrono::Local::now().format("%A").to_string(),
    ));

    // Attendance record an excuse is being filed for
    let excuse_target = create_rw_signal(None::<AttendanceRecord>);

    let state_for_fetch = state.clone();
    let fetch_data = move || {
        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::lecturer::fetch_dashboard_data().await {
                Ok(dashboard) => {
                    data.set(dashboard);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_loaded.set(true);
        });
    };

    let fetch_on_mount = fetch_data.clone();
    create_effect(move |_| {
        fetch_on_mount();
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"My Schedule"</h1>
                <p class="text-gray-400 mt-1">"Weekly classes and attendance history"</p>
            </div>

            // Day tabs
            <div class="flex flex-wrap gap-2">
                {DAYS_OF_WEEK.iter().map(|day| {
                    let day = *day;
                    view! {
                        <button
                            on:click=move |_| set_active_day.set(day.to_string())
                            class=move || {
                                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                                if active_day.get() == day {
                                    format!("{} bg-primary-600 text-white", base)
                                } else {
                                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                                }
                            }
                        >
                            {day}
                        </button>
                    }
                }).collect_view()}
            </div>

            // Classes for the selected day
            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count=3 /> }.into_view();
                }

                let day = active_day.get();
                let classes = classes_for_day(&data.get().weekly_schedule, &day);
                if classes.is_empty() {
                    view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <p class="text-gray-400">{format!("No classes on {}.", day)}</p>
                        </div>
                    }.into_view()
                } else {
                    classes.into_iter().map(|class| {
                        view! { <ClassCard class=class excuse_target=excuse_target /> }
                    }).collect_view()
                }
            }}

            // Upcoming special classes
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Upcoming Special Classes"</h2>
                {move || {
                    let specials = data.get().special_schedules;
                    if specials.is_empty() {
                        view! {
                            <p class="text-gray-400">"No special classes scheduled."</p>
                        }.into_view()
                    } else {
                        specials.into_iter().map(|special| {
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <span>{format!("{} (Special)", special.subject_name)}</span>
                                    <span class="text-gray-400 text-sm">
                                        {format!("{} {} - {}", special.class_date, special.start_time, special.end_time)}
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </section>

            // Excuse upload modal
            {move || {
                excuse_target.get().map(|record| {
                    let on_uploaded = fetch_data.clone();
                    view! {
                        <ExcuseModal
                            record=record
                            on_close=move || excuse_target.set(None)
                            on_uploaded=on_uploaded
                        />
                    }
                })
            }}
        </div>
    }
}

/// One weekly class with its attendance history
#[component]
fn ClassCard(
    class: LecturerClass,
    excuse_target: RwSignal<Option<AttendanceRecord>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 mb-4">
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="font-semibold">{class.subject_name.clone()}</h3>
                    <p class="text-gray-400 text-sm">{class.program_name.clone()}</p>
                </div>
                <span class="text-gray-400 text-sm">
                    {format!("{} - {}", class.start_time, class.end_time)}
                </span>
            </div>

            {if class.attendance_history.is_empty() {
                view! {
                    <p class="text-gray-500 text-sm mt-4">"No attendance recorded yet."</p>
                }.into_view()
            } else {
                view! {
                    <table class="w-full text-sm mt-4">
                        <thead>
                            <tr class="text-left text-gray-400 border-b border-gray-700">
                                <th class="py-2">"Date"</th>
                                <th>"Status"</th>
                                <th>"Verified"</th>
                                <th>"Recorded by"</th>
                                <th>"Excuse"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {class.attendance_history.iter().cloned().map(|att| {
                                view! { <HistoryRow record=att excuse_target=excuse_target /> }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn HistoryRow(
    record: AttendanceRecord,
    excuse_target: RwSignal<Option<AttendanceRecord>>,
) -> impl IntoView {
    let can_file = record.can_file_excuse();
    let record_for_modal = record.clone();

    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="py-2">{record.timestamp.clone()}</td>
            <td>
                {if record.present {
                    view! { <span class="text-green-400">"Present"</span> }
                } else {
                    view! { <span class="text-red-400">"Absent"</span> }
                }}
            </td>
            <td>{if record.verified { "✓" } else { "Pending" }}</td>
            <td>{record.cr_name.clone()}</td>
            <td>
                {match record.excuse_file.clone() {
                    Some(filename) => view! {
                        <a
                            href=api::upload_url(&filename)
                            target="_blank"
                            class="text-primary-400 hover:underline"
                        >
                            "View PDF"
                        </a>
                    }.into_view(),
                    None => view! { <span class="text-gray-500">"-"</span> }.into_view(),
                }}
            </td>
            <td class="text-right">
                {if can_file {
                    view! {
                        <button
                            on:click=move |_| excuse_target.set(Some(record_for_modal.clone()))
                            class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded-lg text-xs font-medium transition-colors"
                        >
                            "Submit Excuse"
                        </button>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }}
            </td>
        </tr>
    }
}

/// Excuse upload modal: required PDF, optional comment
#[component]
fn ExcuseModal(
    record: AttendanceRecord,
    on_close: impl Fn() + 'static + Clone,
    on_uploaded: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let selected_file = create_rw_signal(None::<web_sys::File>);
    let (comment, set_comment) = create_signal(String::new());
    let (uploading, set_uploading) = create_signal(false);

    let on_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        selected_file.set(file);
    };

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let attendance_id = record.id;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(file) = selected_file.get() else {
            state.show_warning("Please select a PDF file to upload.");
            return;
        };

        set_uploading.set(true);

        let state_clone = state.clone();
        let on_close_inner = on_close_for_submit.clone();
        let on_uploaded_inner = on_uploaded.clone();
        let comment_text = comment.get();
        spawn_local(async move {
            match api::lecturer::upload_excuse(attendance_id, &file, &comment_text).await {
                Ok(()) => {
                    state_clone.show_success("Excuse uploaded successfully");
                    on_close_inner();
                    on_uploaded_inner();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Submit Excuse"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <div class="bg-yellow-600/20 text-yellow-300 text-sm rounded-lg px-4 py-3 mb-4">
                    "Excuse must be a PDF and submitted within 24 hours of the missed class."
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Excuse PDF"</label>
                        <input
                            type="file"
                            accept="application/pdf"
                            on:change=on_file_change
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Optional Comment"</label>
                        <textarea
                            placeholder="Provide a brief reason..."
                            prop:value=move || comment.get()
                            on:input=move |ev| set_comment.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="flex space-x-3 pt-2">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || uploading.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Today's weekday when it names a valid tab, Monday otherwise
fn default_day(today: &str) -> String {
    if DAYS_OF_WEEK.contains(&today) {
        today.to_string()
    } else {
        "Monday".to_string()
    }
}

/// Weekly slots for one day, in start-time order
fn classes_for_day(schedule: &[LecturerClass], day: &str) -> Vec<LecturerClass> {
    let mut classes: Vec<LecturerClass> = schedule
        .iter()
        .filter(|c| c.day_of_week == day)
        .cloned()
        .collect();
    classes.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(day: &str, start: &str) -> LecturerClass {
        LecturerClass {
            id: 1,
            subject_name: "Networks".to_string(),
            day_of_week: day.to_string(),
            program_name: "BSc CS".to_string(),
            start_time: start.to_string(),
            end_time: "10:00".to_string(),
            attendance_history: Vec::new(),
        }
    }

    #[test]
    fn test_default_day_falls_back_to_monday() {
        assert_eq!(default_day("Wednesday"), "Wednesday");
        assert_eq!(default_day("Sunday"), "Sunday");
        assert_eq!(default_day("Yesterday"), "Monday");
    }

    #[test]
    fn test_classes_for_day_filters_and_sorts() {
        let schedule = vec![
            class("Monday", "14:00"),
            class("Tuesday", "08:00"),
            class("Monday", "08:00"),
        ];
        let monday = classes_for_day(&schedule, "Monday");
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].start_time, "08:00");
        assert!(classes_for_day(&schedule, "Friday").is_empty());
    }
}
