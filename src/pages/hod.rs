//! HOD Dashboard
//!
//! Timetable management (weekly and special classes) and pending attendance
//! verification. Deletes and verifications are gated behind a confirmation
//! dialog.

use leptos::*;

use crate::api;
use crate::api::hod::{ScheduleDraft, SpecialScheduleDraft};
use crate::api::types::{AttendanceRecord, HodSchedules, TimetableData};
use crate::components::{ConfirmDialog, ListSkeleton};
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

/// Confirmation-gated actions; the request is only issued from the dialog
#[derive(Clone, Copy, PartialEq)]
enum PendingAction {
    DeleteSchedule(u32),
    DeleteSpecial(u32),
    Verify(u32),
}

impl PendingAction {
    fn message(&self) -> &'static str {
        match self {
            PendingAction::DeleteSchedule(_) => "This scheduled class will be removed from the timetable.",
            PendingAction::DeleteSpecial(_) => "This special class will be cancelled.",
            PendingAction::Verify(_) => "This attendance record will be marked as verified.",
        }
    }
}

/// Head of department dashboard
#[component]
pub fn HodDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let schedules = create_rw_signal(HodSchedules::default());
    let timetable_data = create_rw_signal(TimetableData::default());
    let pending = create_rw_signal(Vec::<AttendanceRecord>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (active_view, set_active_view) = create_signal("timetable");
    let pending_action = create_rw_signal(None::<PendingAction>);

    let state_for_schedules = state.clone();
    let fetch_schedules = move || {
        let state = state_for_schedules.clone();
        spawn_local(async move {
            match api::hod::fetch_schedules().await {
                Ok(data) => {
                    schedules.set(data);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_loaded.set(true);
        });
    };

    let state_for_pending = state.clone();
    let fetch_pending = move || {
        let state = state_for_pending.clone();
        spawn_local(async move {
            match api::hod::fetch_pending_attendance().await {
                Ok(list) => {
                    pending.set(list);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    // Independent fetches on mount; one failing does not block the others
    let state_for_mount = state.clone();
    let schedules_on_mount = fetch_schedules.clone();
    let pending_on_mount = fetch_pending.clone();
    create_effect(move |_| {
        schedules_on_mount();
        pending_on_mount();

        let state = state_for_mount.clone();
        spawn_local(async move {
            match api::hod::fetch_timetable_data().await {
                Ok(data) => {
                    timetable_data.set(data);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    });

    let state_for_confirm = state.clone();
    let fetch_schedules_after = fetch_schedules.clone();
    let fetch_pending_after = fetch_pending.clone();
    let on_confirm = move || {
        let Some(action) = pending_action.get_untracked() else {
            return;
        };
        pending_action.set(None);

        let state = state_for_confirm.clone();
        let fetch_schedules = fetch_schedules_after.clone();
        let fetch_pending = fetch_pending_after.clone();
        spawn_local(async move {
            let result = match action {
                PendingAction::DeleteSchedule(id) => api::hod::delete_schedule(id).await,
                PendingAction::DeleteSpecial(id) => api::hod::delete_special_schedule(id).await,
                PendingAction::Verify(id) => api::hod::verify_attendance(id).await,
            };

            match result {
                Ok(()) => {
                    match action {
                        PendingAction::Verify(_) => {
                            state.show_success("Attendance verified");
                            fetch_pending();
                        }
                        _ => {
                            state.show_success("Schedule removed");
                            fetch_schedules();
                        }
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"HOD Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Timetable and attendance verification"</p>
                </div>

                // View pills
                <div class="flex space-x-2">
                    <ViewButton label="Timetable" tab="timetable" active_view=active_view set_active_view=set_active_view />
                    <ViewButton label="Verification" tab="verification" active_view=active_view set_active_view=set_active_view />
                    <span class="bg-red-600 text-white text-xs px-2 py-1 rounded-full self-center">
                        {move || pending.get().len()}
                    </span>
                </div>
            </div>

            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count=5 /> }.into_view();
                }

                if active_view.get() == "timetable" {
                    let on_created = fetch_schedules.clone();
                    view! {
                        <TimetableView
                            schedules=schedules
                            timetable_data=timetable_data
                            pending_action=pending_action
                            on_created=on_created
                        />
                    }.into_view()
                } else {
                    view! {
                        <VerificationView pending=pending pending_action=pending_action />
                    }.into_view()
                }
            }}

            // Confirmation dialog for deletes and verifications
            {move || {
                pending_action.get().map(|action| {
                    let on_confirm = on_confirm.clone();
                    view! {
                        <ConfirmDialog
                            message=action.message()
                            on_confirm=on_confirm
                            on_cancel=move || pending_action.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ViewButton(
    label: &'static str,
    tab: &'static str,
    active_view: ReadSignal<&'static str>,
    set_active_view: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_active_view.set(tab)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if active_view.get() == tab {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Weekly and special schedules plus the two create forms
#[component]
fn TimetableView(
    schedules: RwSignal<HodSchedules>,
    timetable_data: RwSignal<TimetableData>,
    pending_action: RwSignal<Option<PendingAction>>,
    on_created: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let on_created_for_weekly = on_created.clone();
    let on_created_for_special = on_created;

    view! {
        <div class="space-y-8">
            <div class="grid lg:grid-cols-2 gap-6">
                <ScheduleForm timetable_data=timetable_data on_created=on_created_for_weekly />
                <SpecialScheduleForm timetable_data=timetable_data on_created=on_created_for_special />
            </div>

            // Weekly timetable
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Weekly Timetable"</h2>
                {move || {
                    let weekly = schedules.get().weekly_schedules;
                    if weekly.is_empty() {
                        view! {
                            <p class="text-gray-400">"No classes scheduled for the active semester."</p>
                        }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left text-gray-400 border-b border-gray-700">
                                        <th class="py-2">"Subject"</th>
                                        <th>"Lecturer"</th>
                                        <th>"Day"</th>
                                        <th>"Time"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {weekly.into_iter().map(|schedule| {
                                        let id = schedule.id;
                                        view! {
                                            <tr class="border-b border-gray-700 last:border-0">
                                                <td class="py-2">{schedule.subject_name}</td>
                                                <td>{schedule.lecturer_name}</td>
                                                <td>{schedule.day_of_week}</td>
                                                <td>{format!("{} - {}", schedule.start_time, schedule.end_time)}</td>
                                                <td class="text-right">
                                                    <button
                                                        on:click=move |_| pending_action.set(Some(PendingAction::DeleteSchedule(id)))
                                                        class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view()
                    }
                }}
            </section>

            // Upcoming special classes
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Upcoming Special Classes"</h2>
                {move || {
                    let specials = schedules.get().special_schedules;
                    if specials.is_empty() {
                        view! {
                            <p class="text-gray-400">"No upcoming special classes."</p>
                        }.into_view()
                    } else {
                        specials.into_iter().map(|special| {
                            let id = special.id;
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div>
                                        <span>{special.subject_name}</span>
                                        <span class="text-gray-400 text-sm ml-2">
                                            {special.lecturer_name.unwrap_or_else(|| "-".to_string())}
                                        </span>
                                    </div>
                                    <div class="flex items-center space-x-4">
                                        <span class="text-gray-400 text-sm">
                                            {format!("{} {} - {}", special.class_date, special.start_time, special.end_time)}
                                        </span>
                                        <button
                                            on:click=move |_| pending_action.set(Some(PendingAction::DeleteSpecial(id)))
                                            class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded-lg text-xs font-medium transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Create form for a recurring weekly class
#[component]
fn ScheduleForm(
    timetable_data: RwSignal<TimetableData>,
    on_created: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (subject_id, set_subject_id) = create_signal(String::new());
    let (lecturer_id, set_lecturer_id) = create_signal(String::new());
    let (day_of_week, set_day_of_week) = create_signal("Monday".to_string());
    let (start_time, set_start_time) = create_signal(String::new());
    let (end_time, set_end_time) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let (Ok(subject), Ok(lecturer)) = (
            subject_id.get().parse::<u32>(),
            lecturer_id.get().parse::<u32>(),
        ) else {
            state.show_warning("Please select a subject and a lecturer");
            return;
        };
        let start = start_time.get();
        let end = end_time.get();
        if start.is_empty() || end.is_empty() {
            state.show_warning("Start and end times are required");
            return;
        }

        set_submitting.set(true);

        let draft = ScheduleDraft {
            subject_id: subject,
            lecturer_id: lecturer,
            day_of_week: day_of_week.get(),
            start_time: start,
            end_time: end,
        };

        let state_clone = state.clone();
        let on_created = on_created.clone();
        spawn_local(async move {
            match api::hod::create_schedule(&draft).await {
                Ok(()) => {
                    state_clone.show_success("Class scheduled successfully");
                    set_subject_id.set(String::new());
                    set_lecturer_id.set(String::new());
                    set_start_time.set(String::new());
                    set_end_time.set(String::new());
                    on_created();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Schedule Weekly Class"</h2>
            <form on:submit=on_submit class="space-y-4">
                <SubjectSelect timetable_data=timetable_data value=subject_id on_change=set_subject_id />
                <LecturerSelect timetable_data=timetable_data value=lecturer_id on_change=set_lecturer_id />

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Day of Week"</label>
                    <select
                        on:change=move |ev| set_day_of_week.set(event_target_value(&ev))
                        prop:value=move || day_of_week.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {DAYS_OF_WEEK.iter().map(|day| {
                            let day = *day;
                            view! { <option value=day>{day}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <TimeRangeInputs
                    start_time=start_time set_start_time=set_start_time
                    end_time=end_time set_end_time=set_end_time
                />

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Scheduling..." } else { "Schedule Class" }}
                </button>
            </form>
        </section>
    }
}

/// Create form for a one-off class on a specific date
#[component]
fn SpecialScheduleForm(
    timetable_data: RwSignal<TimetableData>,
    on_created: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (subject_id, set_subject_id) = create_signal(String::new());
    let (lecturer_id, set_lecturer_id) = create_signal(String::new());
    let (class_date, set_class_date) = create_signal(String::new());
    let (start_time, set_start_time) = create_signal(String::new());
    let (end_time, set_end_time) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let (Ok(subject), Ok(lecturer)) = (
            subject_id.get().parse::<u32>(),
            lecturer_id.get().parse::<u32>(),
        ) else {
            state.show_warning("Please select a subject and a lecturer");
            return;
        };
        let date = class_date.get();
        let start = start_time.get();
        let end = end_time.get();
        if date.is_empty() || start.is_empty() || end.is_empty() {
            state.show_warning("Date, start, and end times are required");
            return;
        }
        // Special classes target the HOD's own department
        let Some(department_id) = state
            .session
            .get_untracked()
            .and_then(|user| user.department_id)
        else {
            state.show_error("Your session carries no department");
            return;
        };

        set_submitting.set(true);

        let draft = SpecialScheduleDraft {
            subject_id: subject,
            lecturer_id: lecturer,
            class_date: date,
            start_time: start,
            end_time: end,
            target_department_id: department_id,
        };

        let state_clone = state.clone();
        let on_created = on_created.clone();
        spawn_local(async move {
            match api::hod::create_special_schedule(&draft).await {
                Ok(()) => {
                    state_clone.show_success("Special class scheduled successfully");
                    set_subject_id.set(String::new());
                    set_lecturer_id.set(String::new());
                    set_class_date.set(String::new());
                    set_start_time.set(String::new());
                    set_end_time.set(String::new());
                    on_created();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Schedule Special Class"</h2>
            <form on:submit=on_submit class="space-y-4">
                <SubjectSelect timetable_data=timetable_data value=subject_id on_change=set_subject_id />
                <LecturerSelect timetable_data=timetable_data value=lecturer_id on_change=set_lecturer_id />

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Date"</label>
                    <input
                        type="date"
                        prop:value=move || class_date.get()
                        on:input=move |ev| set_class_date.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <TimeRangeInputs
                    start_time=start_time set_start_time=set_start_time
                    end_time=end_time set_end_time=set_end_time
                />

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Scheduling..." } else { "Schedule Special Class" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn SubjectSelect(
    timetable_data: RwSignal<TimetableData>,
    value: ReadSignal<String>,
    on_change: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Subject"</label>
            <select
                on:change=move |ev| on_change.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">"-- Select Subject --"</option>
                {move || {
                    timetable_data.get().subjects.into_iter().map(|subject| {
                        view! { <option value=subject.id.to_string()>{subject.name}</option> }
                    }).collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
fn LecturerSelect(
    timetable_data: RwSignal<TimetableData>,
    value: ReadSignal<String>,
    on_change: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Lecturer"</label>
            <select
                on:change=move |ev| on_change.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">"-- Select Lecturer --"</option>
                {move || {
                    timetable_data.get().lecturers.into_iter().map(|lecturer| {
                        view! { <option value=lecturer.id.to_string()>{lecturer.full_name}</option> }
                    }).collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
fn TimeRangeInputs(
    start_time: ReadSignal<String>,
    set_start_time: WriteSignal<String>,
    end_time: ReadSignal<String>,
    set_end_time: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-3">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Start Time"</label>
                <input
                    type="time"
                    prop:value=move || start_time.get()
                    on:input=move |ev| set_start_time.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-2">"End Time"</label>
                <input
                    type="time"
                    prop:value=move || end_time.get()
                    on:input=move |ev| set_end_time.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>
        </div>
    }
}

/// Pending attendance records with per-row verify actions
#[component]
fn VerificationView(
    pending: RwSignal<Vec<AttendanceRecord>>,
    pending_action: RwSignal<Option<PendingAction>>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Pending Attendance Verification"</h2>
                <span class="bg-yellow-600 text-white text-xs px-2 py-1 rounded-full">
                    {move || format!("{} Pending", pending.get().len())}
                </span>
            </div>

            {move || {
                let records = pending.get();
                if records.is_empty() {
                    view! {
                        <div class="text-center py-12">
                            <div class="text-4xl mb-3">"✅"</div>
                            <h3 class="font-semibold">"All Caught Up!"</h3>
                            <p class="text-gray-400">"No pending records to verify."</p>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-gray-400 border-b border-gray-700">
                                    <th class="py-2">"Course"</th>
                                    <th>"Lecturer"</th>
                                    <th>"CR"</th>
                                    <th>"Status"</th>
                                    <th>"Submitted"</th>
                                    <th>"Excuse"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {records.into_iter().map(|att| {
                                    let id = att.id;
                                    view! {
                                        <tr class="border-b border-gray-700 last:border-0">
                                            <td class="py-2 font-medium">
                                                {att.course.clone().unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td>{att.lecturer_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{att.cr_name.clone()}</td>
                                            <td>
                                                {if att.present {
                                                    view! { <span class="text-green-400">"Present"</span> }
                                                } else {
                                                    view! { <span class="text-red-400">"Absent"</span> }
                                                }}
                                            </td>
                                            <td>{att.timestamp.clone()}</td>
                                            <td>
                                                {match att.excuse_file.clone() {
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
                                                {att.excuse_comment.clone().map(|comment| view! {
                                                    <p class="text-gray-500 text-xs mt-1">{comment}</p>
                                                })}
                                            </td>
                                            <td class="text-right">
                                                <button
                                                    on:click=move |_| pending_action.set(Some(PendingAction::Verify(id)))
                                                    class="px-3 py-1 bg-green-600 hover:bg-green-700 rounded-lg text-xs font-medium transition-colors"
                                                >
                                                    "Verify"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_view()
                }
            }}
        </section>
    }
}
