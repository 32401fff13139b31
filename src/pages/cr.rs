//! CR Dashboard
//!
//! Today's classes with one-shot present/absent submission. Once a class is
//! submitted the buttons are not rendered again, so a second submission for
//! the same slot cannot be issued from here.

use leptos::*;

use crate::api;
use crate::api::types::TodayClass;
use crate::components::ListSkeleton;
use crate::state::global::GlobalState;

/// Class representative dashboard
#[component]
pub fn CrDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let classes = create_rw_signal(Vec::<TodayClass>::new());
    let (loaded, set_loaded) = create_signal(false);

    let state_for_fetch = state.clone();
    let fetch_today = move || {
        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::cr::fetch_todays_schedule().await {
                Ok(mut list) => {
                    sort_by_start_time(&mut list);
                    classes.set(list);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_loaded.set(true);
        });
    };

    let fetch_on_mount = fetch_today.clone();
    create_effect(move |_| {
        fetch_on_mount();
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Today's Classes"</h1>
                <p class="text-gray-400 mt-1">
                    {chrono::Local::now().format("%A, %e %B %Y").to_string()}
                </p>
            </div>

            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count=4 /> }.into_view();
                }

                let list = classes.get();
                if list.is_empty() {
                    view! {
                        <div class="text-center py-12 bg-gray-800 rounded-xl">
                            <div class="text-4xl mb-3">"🎉"</div>
                            <p class="text-gray-400">"No classes scheduled for today."</p>
                        </div>
                    }.into_view()
                } else {
                    let fetch_today = fetch_today.clone();
                    list.into_iter().map(|class| {
                        let on_submitted = fetch_today.clone();
                        view! { <TodayClassCard class=class on_submitted=on_submitted /> }
                    }).collect_view()
                }
            }}
        </div>
    }
}

/// One of today's classes with its submission controls
#[component]
fn TodayClassCard(
    class: TodayClass,
    on_submitted: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (submitting, set_submitting) = create_signal(false);

    let schedule_id = class.schedule_id;
    let submit = move |present: bool| {
        set_submitting.set(true);

        let state = state.clone();
        let on_submitted = on_submitted.clone();
        spawn_local(async move {
            match api::cr::submit_attendance(schedule_id, present).await {
                Ok(()) => {
                    state.show_success("Attendance recorded successfully");
                    on_submitted();
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let submit_present = submit.clone();
    let submit_absent = submit;

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex items-center justify-between">
            <div>
                <h3 class="font-semibold">{class.subject_name.clone()}</h3>
                <p class="text-gray-400 text-sm mt-1">{class.lecturer_name.clone()}</p>
                <p class="text-gray-500 text-sm">
                    {format!("{} - {}", class.start_time, class.end_time)}
                </p>
            </div>

            {if class.submitted {
                view! {
                    <span class="bg-gray-700 text-gray-300 text-sm px-3 py-1 rounded-full">
                        "✓ Submitted"
                    </span>
                }.into_view()
            } else {
                view! {
                    <div class="flex space-x-2">
                        <button
                            on:click=move |_| submit_present(true)
                            disabled=move || submitting.get()
                            class="px-4 py-2 bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                                   rounded-lg text-sm font-medium transition-colors"
                        >
                            "Present"
                        </button>
                        <button
                            on:click=move |_| submit_absent(false)
                            disabled=move || submitting.get()
                            class="px-4 py-2 bg-red-600 hover:bg-red-700 disabled:bg-gray-600
                                   rounded-lg text-sm font-medium transition-colors"
                        >
                            "Absent"
                        </button>
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Regular and special classes arrive merged; keep them ordered by start time
fn sort_by_start_time(classes: &mut [TodayClass]) {
    classes.sort_by(|a, b| a.start_time.cmp(&b.start_time));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(subject: &str, start: &str, submitted: bool) -> TodayClass {
        TodayClass {
            schedule_id: 1,
            subject_name: subject.to_string(),
            lecturer_name: "Dr. X".to_string(),
            start_time: start.to_string(),
            end_time: "10:00".to_string(),
            submitted,
        }
    }

    #[test]
    fn test_sorted_by_start_time() {
        let mut list = vec![
            class("Databases (Special)", "14:00", false),
            class("Networks", "08:00", true),
            class("Compilers", "10:00", false),
        ];
        sort_by_start_time(&mut list);
        let starts: Vec<&str> = list.iter().map(|c| c.start_time.as_str()).collect();
        assert_eq!(starts, vec!["08:00", "10:00", "14:00"]);
    }
}
