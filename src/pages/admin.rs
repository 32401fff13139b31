//! Admin Dashboard
//!
//! Master-data CRUD (departments, semesters, programs, subjects, users),
//! semester activation, and attendance report generation with CSV export.
//!
//! Collections are cached in signals and refetched per collection. An update
//! to a collection that other collections denormalize from (departments feed
//! programs and users, programs feed subjects) refetches the dependents too,
//! instead of refetching everything.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::admin::{
    DepartmentDraft, ProgramDraft, ReportFilters, SemesterDraft, SubjectDraft, UserDraft,
    UserUpdate,
};
use crate::api::types::{Department, Program, Report, Semester, Subject, User};
use crate::components::{ConfirmDialog, ListSkeleton, ReportCharts};
use crate::report;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Collection {
    Departments,
    Semesters,
    Programs,
    Subjects,
    Users,
}

const ALL_COLLECTIONS: [Collection; 5] = [
    Collection::Departments,
    Collection::Semesters,
    Collection::Programs,
    Collection::Subjects,
    Collection::Users,
];

/// Collections to refetch after a create. A fresh row has no dependents yet,
/// so only the owning collection changes.
fn affected_by_create(collection: Collection) -> &'static [Collection] {
    match collection {
        Collection::Departments => &[Collection::Departments],
        Collection::Semesters => &[Collection::Semesters],
        Collection::Programs => &[Collection::Programs],
        Collection::Subjects => &[Collection::Subjects],
        Collection::Users => &[Collection::Users],
    }
}

/// Collections to refetch after an update or delete of `collection`. Rows in
/// dependent collections carry denormalized names from their parent.
fn affected_by_update(collection: Collection) -> &'static [Collection] {
    match collection {
        Collection::Departments => &[
            Collection::Departments,
            Collection::Programs,
            Collection::Users,
        ],
        Collection::Programs => &[Collection::Programs, Collection::Subjects],
        Collection::Semesters => &[Collection::Semesters],
        Collection::Subjects => &[Collection::Subjects],
        Collection::Users => &[Collection::Users],
    }
}

/// Destructive or state-switching actions that go through the confirm dialog
#[derive(Clone, Copy, PartialEq)]
enum AdminAction {
    Delete(Collection, u32),
    Activate(u32),
    Deactivate,
}

impl AdminAction {
    fn message(&self) -> &'static str {
        match self {
            AdminAction::Delete(Collection::Departments, _) => {
                "This department and anything referencing it may be affected."
            }
            AdminAction::Delete(Collection::Semesters, _) => "This semester will be deleted.",
            AdminAction::Delete(Collection::Programs, _) => "This program will be deleted.",
            AdminAction::Delete(Collection::Subjects, _) => "This subject will be deleted.",
            AdminAction::Delete(Collection::Users, _) => "This user account will be deleted.",
            AdminAction::Activate(_) => {
                "Activating this semester deactivates any currently active one."
            }
            AdminAction::Deactivate => "The active semester will be deactivated.",
        }
    }
}

/// Cached collections plus the toast handle, shared across the sections
#[derive(Clone)]
struct AdminData {
    state: GlobalState,
    departments: RwSignal<Vec<Department>>,
    semesters: RwSignal<Vec<Semester>>,
    programs: RwSignal<Vec<Program>>,
    subjects: RwSignal<Vec<Subject>>,
    users: RwSignal<Vec<User>>,
}

impl AdminData {
    fn new(state: GlobalState) -> Self {
        Self {
            state,
            departments: create_rw_signal(Vec::new()),
            semesters: create_rw_signal(Vec::new()),
            programs: create_rw_signal(Vec::new()),
            subjects: create_rw_signal(Vec::new()),
            users: create_rw_signal(Vec::new()),
        }
    }

    fn refetch(&self, collection: Collection) {
        let data = self.clone();
        spawn_local(async move {
            let result = match collection {
                Collection::Departments => api::admin::fetch_departments()
                    .await
                    .map(|list| data.departments.set(list)),
                Collection::Semesters => api::admin::fetch_semesters()
                    .await
                    .map(|list| data.semesters.set(list)),
                Collection::Programs => api::admin::fetch_programs()
                    .await
                    .map(|list| data.programs.set(list)),
                Collection::Subjects => api::admin::fetch_subjects()
                    .await
                    .map(|list| data.subjects.set(list)),
                Collection::Users => api::admin::fetch_users()
                    .await
                    .map(|list| data.users.set(list)),
            };
            if let Err(e) = result {
                data.state.show_error(&e);
            }
        });
    }

    fn refetch_all(&self) {
        for collection in ALL_COLLECTIONS {
            self.refetch(collection);
        }
    }

    /// Scoped invalidation after a create
    fn refetch_for_create(&self, collection: Collection) {
        for affected in affected_by_create(collection) {
            self.refetch(*affected);
        }
    }

    /// Scoped invalidation after an update or delete
    fn refetch_for_update(&self, collection: Collection) {
        for affected in affected_by_update(collection) {
            self.refetch(*affected);
        }
    }
}

/// Administrator dashboard
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let data = AdminData::new(state.clone());
    let (active_tab, set_active_tab) = create_signal("departments");
    let (loaded, set_loaded) = create_signal(false);
    let pending_action = create_rw_signal(None::<AdminAction>);

    let data_for_mount = data.clone();
    create_effect(move |_| {
        data_for_mount.refetch_all();
        set_loaded.set(true);
    });

    let data_for_confirm = data.clone();
    let state_for_confirm = state.clone();
    let on_confirm = move || {
        let Some(action) = pending_action.get_untracked() else {
            return;
        };
        pending_action.set(None);

        let data = data_for_confirm.clone();
        let state = state_for_confirm.clone();
        spawn_local(async move {
            let result = match action {
                AdminAction::Delete(Collection::Departments, id) => {
                    api::admin::delete_department(id).await
                }
                AdminAction::Delete(Collection::Semesters, id) => {
                    api::admin::delete_semester(id).await
                }
                AdminAction::Delete(Collection::Programs, id) => {
                    api::admin::delete_program(id).await
                }
                AdminAction::Delete(Collection::Subjects, id) => {
                    api::admin::delete_subject(id).await
                }
                AdminAction::Delete(Collection::Users, id) => api::admin::delete_user(id).await,
                AdminAction::Activate(id) => api::admin::activate_semester(id).await,
                AdminAction::Deactivate => api::admin::deactivate_semester().await,
            };

            match result {
                Ok(()) => match action {
                    AdminAction::Delete(collection, _) => {
                        state.show_success("Deleted successfully");
                        data.refetch_for_update(collection);
                    }
                    AdminAction::Activate(_) => {
                        state.show_success("Semester activated");
                        data.refetch(Collection::Semesters);
                    }
                    AdminAction::Deactivate => {
                        state.show_success("Semester deactivated");
                        data.refetch(Collection::Semesters);
                    }
                },
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Admin Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Master data, users, and attendance reports"</p>
            </div>

            // Tab bar
            <div class="flex flex-wrap gap-2 border-b border-gray-700 pb-3">
                <AdminTabButton label="Departments" tab="departments" active_tab=active_tab set_active_tab=set_active_tab />
                <AdminTabButton label="Semesters" tab="semesters" active_tab=active_tab set_active_tab=set_active_tab />
                <AdminTabButton label="Programs" tab="programs" active_tab=active_tab set_active_tab=set_active_tab />
                <AdminTabButton label="Subjects" tab="subjects" active_tab=active_tab set_active_tab=set_active_tab />
                <AdminTabButton label="Users" tab="users" active_tab=active_tab set_active_tab=set_active_tab />
                <AdminTabButton label="Reports" tab="reports" active_tab=active_tab set_active_tab=set_active_tab />
            </div>

            {
                let data = data.clone();
                move || {
                    if !loaded.get() {
                        return view! { <ListSkeleton count=5 /> }.into_view();
                    }
                    let data = data.clone();
                    match active_tab.get() {
                        "departments" => view! {
                            <DepartmentsSection data=data pending_action=pending_action />
                        }.into_view(),
                        "semesters" => view! {
                            <SemestersSection data=data pending_action=pending_action />
                        }.into_view(),
                        "programs" => view! {
                            <ProgramsSection data=data pending_action=pending_action />
                        }.into_view(),
                        "subjects" => view! {
                            <SubjectsSection data=data pending_action=pending_action />
                        }.into_view(),
                        "users" => view! {
                            <UsersSection data=data pending_action=pending_action />
                        }.into_view(),
                        _ => view! { <ReportsSection data=data /> }.into_view(),
                    }
                }
            }

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
fn AdminTabButton(
    label: &'static str,
    tab: &'static str,
    active_tab: ReadSignal<&'static str>,
    set_active_tab: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_active_tab.set(tab)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if active_tab.get() == tab {
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

// ============ Departments ============

#[component]
fn DepartmentsSection(
    data: AdminData,
    pending_action: RwSignal<Option<AdminAction>>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let edit_target = create_rw_signal(None::<Department>);

    let data_for_create = data.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let value = name.get().trim().to_string();
        if value.is_empty() {
            data_for_create.state.show_warning("Department name is required");
            return;
        }

        set_submitting.set(true);

        let data = data_for_create.clone();
        spawn_local(async move {
            match api::admin::create_department(&DepartmentDraft { name: value }).await {
                Ok(()) => {
                    data.state.show_success("Department added");
                    set_name.set(String::new());
                    data.refetch_for_create(Collection::Departments);
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let data_for_modal = data.clone();
    view! {
        <div class="space-y-6">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add Department"</h2>
                <form on:submit=on_submit class="flex gap-3">
                    <input
                        type="text"
                        placeholder="e.g. Computer Science"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Add"
                    </button>
                </form>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Departments"</h2>
                {
                    let departments = data.departments;
                    move || {
                        let list = departments.get();
                        if list.is_empty() {
                            view! { <p class="text-gray-400">"No departments yet."</p> }.into_view()
                        } else {
                            list.into_iter().map(|dept| {
                                let id = dept.id;
                                let dept_for_edit = dept.clone();
                                view! {
                                    <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                        <span>{dept.name.clone()}</span>
                                        <div class="flex space-x-2">
                                            <EditButton on_click=move || edit_target.set(Some(dept_for_edit.clone())) />
                                            <DeleteButton on_click=move || {
                                                pending_action.set(Some(AdminAction::Delete(Collection::Departments, id)))
                                            } />
                                        </div>
                                    </div>
                                }
                            }).collect_view()
                        }
                    }
                }
            </section>

            {move || {
                edit_target.get().map(|dept| {
                    let data = data_for_modal.clone();
                    view! {
                        <DepartmentEditModal
                            target=dept
                            data=data
                            on_close=move || edit_target.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn DepartmentEditModal(
    target: Department,
    data: AdminData,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let (name, set_name) = create_signal(target.name.clone());
    let (saving, set_saving) = create_signal(false);
    let id = target.id;

    let on_close_for_save = on_close.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let value = name.get().trim().to_string();
        if value.is_empty() {
            data.state.show_warning("Department name is required");
            return;
        }

        set_saving.set(true);

        let data = data.clone();
        let on_close = on_close_for_save.clone();
        spawn_local(async move {
            match api::admin::update_department(id, &DepartmentDraft { name: value }).await {
                Ok(()) => {
                    data.state.show_success("Department updated");
                    data.refetch_for_update(Collection::Departments);
                    on_close();
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <ModalShell title="Edit Department" on_close=on_close>
            <form on:submit=on_save class="space-y-4">
                <TextField label="Name" value=name on_input=set_name />
                <SaveButton saving=saving />
            </form>
        </ModalShell>
    }
}

// ============ Semesters ============

#[component]
fn SemestersSection(
    data: AdminData,
    pending_action: RwSignal<Option<AdminAction>>,
) -> impl IntoView {
    let (year, set_year) = create_signal(String::new());
    let (semester_number, set_semester_number) = create_signal("1".to_string());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let edit_target = create_rw_signal(None::<Semester>);

    let data_for_create = data.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(draft) = semester_draft(
            &year.get(),
            &semester_number.get(),
            &start_date.get(),
            &end_date.get(),
        ) else {
            data_for_create
                .state
                .show_warning("Year, semester number, and both dates are required");
            return;
        };

        set_submitting.set(true);

        let data = data_for_create.clone();
        spawn_local(async move {
            match api::admin::create_semester(&draft).await {
                Ok(()) => {
                    data.state.show_success("Semester added");
                    set_year.set(String::new());
                    set_start_date.set(String::new());
                    set_end_date.set(String::new());
                    data.refetch_for_create(Collection::Semesters);
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let data_for_modal = data.clone();
    view! {
        <div class="space-y-6">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add Semester"</h2>
                <form on:submit=on_submit class="grid md:grid-cols-5 gap-3 items-end">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Year"</label>
                        <input
                            type="number"
                            placeholder="2026"
                            prop:value=move || year.get()
                            on:input=move |ev| set_year.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Semester"</label>
                        <select
                            on:change=move |ev| set_semester_number.set(event_target_value(&ev))
                            prop:value=move || semester_number.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="1">"Semester 1"</option>
                            <option value="2">"Semester 2"</option>
                        </select>
                    </div>
                    <DateField label="Start Date" value=start_date on_input=set_start_date />
                    <DateField label="End Date" value=end_date on_input=set_end_date />
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Add"
                    </button>
                </form>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Semesters"</h2>
                {
                    let semesters = data.semesters;
                    move || {
                        let list = semesters.get();
                        if list.is_empty() {
                            view! { <p class="text-gray-400">"No semesters yet."</p> }.into_view()
                        } else {
                            list.into_iter().map(|sem| {
                                let id = sem.id;
                                let is_active = sem.is_active;
                                let sem_for_edit = sem.clone();
                                view! {
                                    <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                        <div>
                                            <span>{format!("{} - Semester {}", sem.year, sem.semester_number)}</span>
                                            <span class="text-gray-400 text-sm ml-2">
                                                {format!("{} to {}", sem.start_date, sem.end_date)}
                                            </span>
                                            {is_active.then(|| view! {
                                                <span class="bg-green-600 text-white text-xs px-2 py-1 rounded-full ml-2">
                                                    "Active"
                                                </span>
                                            })}
                                        </div>
                                        <div class="flex space-x-2">
                                            {if is_active {
                                                view! {
                                                    <button
                                                        on:click=move |_| pending_action.set(Some(AdminAction::Deactivate))
                                                        class="px-3 py-1 bg-yellow-600 hover:bg-yellow-700 rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        "Deactivate"
                                                    </button>
                                                }.into_view()
                                            } else {
                                                view! {
                                                    <button
                                                        on:click=move |_| pending_action.set(Some(AdminAction::Activate(id)))
                                                        class="px-3 py-1 bg-green-600 hover:bg-green-700 rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        "Activate"
                                                    </button>
                                                }.into_view()
                                            }}
                                            <EditButton on_click=move || edit_target.set(Some(sem_for_edit.clone())) />
                                            <DeleteButton on_click=move || {
                                                pending_action.set(Some(AdminAction::Delete(Collection::Semesters, id)))
                                            } />
                                        </div>
                                    </div>
                                }
                            }).collect_view()
                        }
                    }
                }
            </section>

            {move || {
                edit_target.get().map(|sem| {
                    let data = data_for_modal.clone();
                    view! {
                        <SemesterEditModal
                            target=sem
                            data=data
                            on_close=move || edit_target.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn SemesterEditModal(
    target: Semester,
    data: AdminData,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let (year, set_year) = create_signal(target.year.to_string());
    let (semester_number, set_semester_number) = create_signal(target.semester_number.to_string());
    let (start_date, set_start_date) = create_signal(target.start_date.clone());
    let (end_date, set_end_date) = create_signal(target.end_date.clone());
    let (saving, set_saving) = create_signal(false);
    let id = target.id;

    let on_close_for_save = on_close.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(draft) = semester_draft(
            &year.get(),
            &semester_number.get(),
            &start_date.get(),
            &end_date.get(),
        ) else {
            data.state
                .show_warning("Year, semester number, and both dates are required");
            return;
        };

        set_saving.set(true);

        let data = data.clone();
        let on_close = on_close_for_save.clone();
        spawn_local(async move {
            match api::admin::update_semester(id, &draft).await {
                Ok(()) => {
                    data.state.show_success("Semester updated");
                    data.refetch(Collection::Semesters);
                    on_close();
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <ModalShell title="Edit Semester" on_close=on_close>
            <form on:submit=on_save class="space-y-4">
                <TextField label="Year" value=year on_input=set_year />
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Semester"</label>
                    <select
                        on:change=move |ev| set_semester_number.set(event_target_value(&ev))
                        prop:value=move || semester_number.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="1">"Semester 1"</option>
                        <option value="2">"Semester 2"</option>
                    </select>
                </div>
                <DateField label="Start Date" value=start_date on_input=set_start_date />
                <DateField label="End Date" value=end_date on_input=set_end_date />
                <SaveButton saving=saving />
            </form>
        </ModalShell>
    }
}

fn semester_draft(
    year: &str,
    semester_number: &str,
    start_date: &str,
    end_date: &str,
) -> Option<SemesterDraft> {
    if start_date.is_empty() || end_date.is_empty() {
        return None;
    }
    Some(SemesterDraft {
        year: year.parse().ok()?,
        semester_number: semester_number.parse().ok()?,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
    })
}

// ============ Programs ============

const PROGRAM_LEVELS: [&str; 4] = ["Certificate", "Diploma", "Degree", "Masters"];

#[component]
fn ProgramsSection(
    data: AdminData,
    pending_action: RwSignal<Option<AdminAction>>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (level, set_level) = create_signal("Degree".to_string());
    let (department_id, set_department_id) = create_signal(String::new());
    let (duration, set_duration) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let edit_target = create_rw_signal(None::<Program>);

    let data_for_create = data.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(draft) = program_draft(
            &name.get(),
            &level.get(),
            &department_id.get(),
            &duration.get(),
        ) else {
            data_for_create
                .state
                .show_warning("Name, department, and duration are required");
            return;
        };

        set_submitting.set(true);

        let data = data_for_create.clone();
        spawn_local(async move {
            match api::admin::create_program(&draft).await {
                Ok(()) => {
                    data.state.show_success("Program added");
                    set_name.set(String::new());
                    set_duration.set(String::new());
                    data.refetch_for_create(Collection::Programs);
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let data_for_modal = data.clone();
    let departments = data.departments;
    view! {
        <div class="space-y-6">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add Program"</h2>
                <form on:submit=on_submit class="grid md:grid-cols-5 gap-3 items-end">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            placeholder="e.g. Software Engineering"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <LevelSelect value=level on_change=set_level />
                    <DepartmentSelect departments=departments value=department_id on_change=set_department_id />
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Duration (years)"</label>
                        <input
                            type="number"
                            min="1"
                            max="8"
                            prop:value=move || duration.get()
                            on:input=move |ev| set_duration.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Add"
                    </button>
                </form>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Programs"</h2>
                {
                    let programs = data.programs;
                    move || {
                        let list = programs.get();
                        if list.is_empty() {
                            view! { <p class="text-gray-400">"No programs yet."</p> }.into_view()
                        } else {
                            view! {
                                <table class="w-full text-sm">
                                    <thead>
                                        <tr class="text-left text-gray-400 border-b border-gray-700">
                                            <th class="py-2">"Name"</th>
                                            <th>"Level"</th>
                                            <th>"Department"</th>
                                            <th>"Duration"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.into_iter().map(|program| {
                                            let id = program.id;
                                            let program_for_edit = program.clone();
                                            view! {
                                                <tr class="border-b border-gray-700 last:border-0">
                                                    <td class="py-2">{program.name.clone()}</td>
                                                    <td>{program.level.clone()}</td>
                                                    <td>{program.department_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>{format!("{} years", program.duration_in_years)}</td>
                                                    <td class="text-right">
                                                        <div class="flex justify-end space-x-2">
                                                            <EditButton on_click=move || edit_target.set(Some(program_for_edit.clone())) />
                                                            <DeleteButton on_click=move || {
                                                                pending_action.set(Some(AdminAction::Delete(Collection::Programs, id)))
                                                            } />
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            }.into_view()
                        }
                    }
                }
            </section>

            {move || {
                edit_target.get().map(|program| {
                    let data = data_for_modal.clone();
                    view! {
                        <ProgramEditModal
                            target=program
                            data=data
                            on_close=move || edit_target.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ProgramEditModal(
    target: Program,
    data: AdminData,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let (name, set_name) = create_signal(target.name.clone());
    let (level, set_level) = create_signal(target.level.clone());
    let (department_id, set_department_id) = create_signal(target.department_id.to_string());
    let (duration, set_duration) = create_signal(target.duration_in_years.to_string());
    let (saving, set_saving) = create_signal(false);
    let id = target.id;
    let departments = data.departments;

    let on_close_for_save = on_close.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(draft) = program_draft(
            &name.get(),
            &level.get(),
            &department_id.get(),
            &duration.get(),
        ) else {
            data.state
                .show_warning("Name, department, and duration are required");
            return;
        };

        set_saving.set(true);

        let data = data.clone();
        let on_close = on_close_for_save.clone();
        spawn_local(async move {
            match api::admin::update_program(id, &draft).await {
                Ok(()) => {
                    data.state.show_success("Program updated");
                    data.refetch_for_update(Collection::Programs);
                    on_close();
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <ModalShell title="Edit Program" on_close=on_close>
            <form on:submit=on_save class="space-y-4">
                <TextField label="Name" value=name on_input=set_name />
                <LevelSelect value=level on_change=set_level />
                <DepartmentSelect departments=departments value=department_id on_change=set_department_id />
                <TextField label="Duration (years)" value=duration on_input=set_duration />
                <SaveButton saving=saving />
            </form>
        </ModalShell>
    }
}

fn program_draft(
    name: &str,
    level: &str,
    department_id: &str,
    duration: &str,
) -> Option<ProgramDraft> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(ProgramDraft {
        name: name.to_string(),
        level: level.to_string(),
        department_id: department_id.parse().ok()?,
        duration_in_years: duration.parse().ok()?,
    })
}

// ============ Subjects ============

#[component]
fn SubjectsSection(
    data: AdminData,
    pending_action: RwSignal<Option<AdminAction>>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (code, set_code) = create_signal(String::new());
    let (program_id, set_program_id) = create_signal(String::new());
    let (year_of_study, set_year_of_study) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let edit_target = create_rw_signal(None::<Subject>);

    let data_for_create = data.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(draft) = subject_draft(
            &name.get(),
            &code.get(),
            &program_id.get(),
            &year_of_study.get(),
        ) else {
            data_for_create
                .state
                .show_warning("Name, code, program, and year of study are required");
            return;
        };

        set_submitting.set(true);

        let data = data_for_create.clone();
        spawn_local(async move {
            match api::admin::create_subject(&draft).await {
                Ok(()) => {
                    data.state.show_success("Subject added");
                    set_name.set(String::new());
                    set_code.set(String::new());
                    set_year_of_study.set(String::new());
                    data.refetch_for_create(Collection::Subjects);
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let data_for_modal = data.clone();
    let programs = data.programs;
    view! {
        <div class="space-y-6">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add Subject"</h2>
                <form on:submit=on_submit class="grid md:grid-cols-5 gap-3 items-end">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            placeholder="e.g. Operating Systems"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Code"</label>
                        <input
                            type="text"
                            placeholder="e.g. CS301"
                            prop:value=move || code.get()
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <ProgramSelect programs=programs value=program_id on_change=set_program_id />
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Year of Study"</label>
                        <input
                            type="number"
                            min="1"
                            max="8"
                            prop:value=move || year_of_study.get()
                            on:input=move |ev| set_year_of_study.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Add"
                    </button>
                </form>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Subjects"</h2>
                {
                    let subjects = data.subjects;
                    move || {
                        let list = subjects.get();
                        if list.is_empty() {
                            view! { <p class="text-gray-400">"No subjects yet."</p> }.into_view()
                        } else {
                            view! {
                                <table class="w-full text-sm">
                                    <thead>
                                        <tr class="text-left text-gray-400 border-b border-gray-700">
                                            <th class="py-2">"Code"</th>
                                            <th>"Name"</th>
                                            <th>"Program"</th>
                                            <th>"Year"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.into_iter().map(|subject| {
                                            let id = subject.id;
                                            let subject_for_edit = subject.clone();
                                            view! {
                                                <tr class="border-b border-gray-700 last:border-0">
                                                    <td class="py-2 font-mono">{subject.code.clone()}</td>
                                                    <td>{subject.name.clone()}</td>
                                                    <td>{subject.program_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>{format!("Year {}", subject.year_of_study)}</td>
                                                    <td class="text-right">
                                                        <div class="flex justify-end space-x-2">
                                                            <EditButton on_click=move || edit_target.set(Some(subject_for_edit.clone())) />
                                                            <DeleteButton on_click=move || {
                                                                pending_action.set(Some(AdminAction::Delete(Collection::Subjects, id)))
                                                            } />
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            }.into_view()
                        }
                    }
                }
            </section>

            {move || {
                edit_target.get().map(|subject| {
                    let data = data_for_modal.clone();
                    view! {
                        <SubjectEditModal
                            target=subject
                            data=data
                            on_close=move || edit_target.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn SubjectEditModal(
    target: Subject,
    data: AdminData,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let (name, set_name) = create_signal(target.name.clone());
    let (code, set_code) = create_signal(target.code.clone());
    let (program_id, set_program_id) = create_signal(target.program_id.to_string());
    let (year_of_study, set_year_of_study) = create_signal(target.year_of_study.to_string());
    let (saving, set_saving) = create_signal(false);
    let id = target.id;
    let programs = data.programs;

    let on_close_for_save = on_close.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(draft) = subject_draft(
            &name.get(),
            &code.get(),
            &program_id.get(),
            &year_of_study.get(),
        ) else {
            data.state
                .show_warning("Name, code, program, and year of study are required");
            return;
        };

        set_saving.set(true);

        let data = data.clone();
        let on_close = on_close_for_save.clone();
        spawn_local(async move {
            match api::admin::update_subject(id, &draft).await {
                Ok(()) => {
                    data.state.show_success("Subject updated");
                    data.refetch(Collection::Subjects);
                    on_close();
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <ModalShell title="Edit Subject" on_close=on_close>
            <form on:submit=on_save class="space-y-4">
                <TextField label="Name" value=name on_input=set_name />
                <TextField label="Code" value=code on_input=set_code />
                <ProgramSelect programs=programs value=program_id on_change=set_program_id />
                <TextField label="Year of Study" value=year_of_study on_input=set_year_of_study />
                <SaveButton saving=saving />
            </form>
        </ModalShell>
    }
}

fn subject_draft(
    name: &str,
    code: &str,
    program_id: &str,
    year_of_study: &str,
) -> Option<SubjectDraft> {
    let name = name.trim();
    let code = code.trim();
    if name.is_empty() || code.is_empty() {
        return None;
    }
    Some(SubjectDraft {
        name: name.to_string(),
        code: code.to_string(),
        program_id: program_id.parse().ok()?,
        year_of_study: year_of_study.parse().ok()?,
    })
}

// ============ Users ============

const USER_ROLES: [&str; 4] = ["CR", "Lecturer", "HOD", "Admin"];

#[component]
fn UsersSection(
    data: AdminData,
    pending_action: RwSignal<Option<AdminAction>>,
) -> impl IntoView {
    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal("CR".to_string());
    let (department_id, set_department_id) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let edit_target = create_rw_signal(None::<User>);

    let data_for_create = data.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = full_name.get().trim().to_string();
        let mail = email.get().trim().to_string();
        let pw = password.get();
        if name.is_empty() || mail.is_empty() || pw.is_empty() {
            data_for_create
                .state
                .show_warning("Full name, email, and password are required");
            return;
        }
        let Ok(dept_id) = department_id.get().parse::<u32>() else {
            data_for_create.state.show_warning("Please select a department");
            return;
        };

        set_submitting.set(true);

        let draft = UserDraft {
            full_name: name,
            email: mail,
            password: pw,
            role: role.get(),
            department_id: dept_id,
        };

        let data = data_for_create.clone();
        spawn_local(async move {
            match api::admin::create_user(&draft).await {
                Ok(()) => {
                    data.state.show_success("User added");
                    set_full_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_role.set("CR".to_string());
                    set_department_id.set(String::new());
                    data.refetch_for_create(Collection::Users);
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let data_for_modal = data.clone();
    let departments = data.departments;
    view! {
        <div class="space-y-6">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add User"</h2>
                <form on:submit=on_submit class="grid md:grid-cols-3 gap-3">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Full Name"</label>
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <RoleSelect value=role on_change=set_role />
                    <DepartmentSelect departments=departments value=department_id on_change=set_department_id />
                    <div class="flex items-end">
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            "Add User"
                        </button>
                    </div>
                </form>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Users"</h2>
                {
                    let users = data.users;
                    move || {
                        let list = users.get();
                        if list.is_empty() {
                            view! { <p class="text-gray-400">"No users yet."</p> }.into_view()
                        } else {
                            view! {
                                <table class="w-full text-sm">
                                    <thead>
                                        <tr class="text-left text-gray-400 border-b border-gray-700">
                                            <th class="py-2">"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                            <th>"Department"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.into_iter().map(|user| {
                                            let id = user.id;
                                            let user_for_edit = user.clone();
                                            view! {
                                                <tr class="border-b border-gray-700 last:border-0">
                                                    <td class="py-2">{user.full_name.clone()}</td>
                                                    <td>{user.email.clone()}</td>
                                                    <td>{user.role.clone()}</td>
                                                    <td>{user.department_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td class="text-right">
                                                        <div class="flex justify-end space-x-2">
                                                            <EditButton on_click=move || edit_target.set(Some(user_for_edit.clone())) />
                                                            <DeleteButton on_click=move || {
                                                                pending_action.set(Some(AdminAction::Delete(Collection::Users, id)))
                                                            } />
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            }.into_view()
                        }
                    }
                }
            </section>

            {move || {
                edit_target.get().map(|user| {
                    let data = data_for_modal.clone();
                    view! {
                        <UserEditModal
                            target=user
                            data=data
                            on_close=move || edit_target.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn UserEditModal(
    target: User,
    data: AdminData,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let (full_name, set_full_name) = create_signal(target.full_name.clone());
    let (email, set_email) = create_signal(target.email.clone());
    let (role, set_role) = create_signal(target.role.clone());
    let (department_id, set_department_id) = create_signal(
        target
            .department_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let (saving, set_saving) = create_signal(false);
    let id = target.id;
    let departments = data.departments;

    let on_close_for_save = on_close.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = full_name.get().trim().to_string();
        let mail = email.get().trim().to_string();
        if name.is_empty() || mail.is_empty() {
            data.state.show_warning("Full name and email are required");
            return;
        }

        set_saving.set(true);

        // No department means the account is not tied to one (built-in admin)
        let update = UserUpdate {
            full_name: name,
            email: mail,
            role: role.get(),
            department_id: department_id.get().parse().ok(),
        };

        let data = data.clone();
        let on_close = on_close_for_save.clone();
        spawn_local(async move {
            match api::admin::update_user(id, &update).await {
                Ok(()) => {
                    data.state.show_success("User updated");
                    data.refetch(Collection::Users);
                    on_close();
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <ModalShell title="Edit User" on_close=on_close>
            <form on:submit=on_save class="space-y-4">
                <TextField label="Full Name" value=full_name on_input=set_full_name />
                <TextField label="Email" value=email on_input=set_email />
                <RoleSelect value=role on_change=set_role />
                <DepartmentSelect departments=departments value=department_id on_change=set_department_id />
                <SaveButton saving=saving />
            </form>
        </ModalShell>
    }
}

// ============ Reports ============

#[component]
fn ReportsSection(data: AdminData) -> impl IntoView {
    let (department_id, set_department_id) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (generating, set_generating) = create_signal(false);
    let (report_view, set_report_view) = create_signal("summary");

    let report = create_rw_signal(None::<Report>);
    // Monotonic counter so a slow earlier response never overwrites a newer one
    let report_seq = create_rw_signal(0u64);

    let filters_of = move || -> Option<ReportFilters> {
        let start = start_date.get();
        let end = end_date.get();
        if start.is_empty() || end.is_empty() {
            return None;
        }
        Some(ReportFilters {
            department_id: department_id.get().parse().ok()?,
            start_date: start,
            end_date: end,
        })
    };

    let data_for_generate = data.clone();
    let on_generate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(filters) = filters_of() else {
            data_for_generate
                .state
                .show_warning("Select a department and both dates first");
            return;
        };

        set_generating.set(true);
        let my_seq = report_seq.get_untracked() + 1;
        report_seq.set(my_seq);

        let data = data_for_generate.clone();
        spawn_local(async move {
            let result = api::admin::generate_report(&filters).await;
            // A newer request has been issued since; drop this response
            if report_seq.get_untracked() != my_seq {
                return;
            }
            match result {
                Ok(r) => {
                    report.set(Some(r));
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
            set_generating.set(false);
        });
    };

    let data_for_csv = data.clone();
    let departments_for_csv = data.departments;
    let on_download_csv = move |_| {
        let Some(filters) = filters_of() else {
            data_for_csv
                .state
                .show_warning("Select a department and both dates first");
            return;
        };
        // Name the file after the department being exported, not whichever
        // department the last generated report happened to cover
        let Some(department_name) =
            department_name_for(&departments_for_csv.get_untracked(), filters.department_id)
        else {
            data_for_csv.state.show_warning("Select a department first");
            return;
        };

        let filename = report::csv_filename(&department_name);
        let data = data_for_csv.clone();
        spawn_local(async move {
            match api::admin::generate_report_csv(&filters).await {
                Ok(csv) => {
                    if trigger_download(&csv, &filename).is_none() {
                        data.state.show_error("Could not start the CSV download");
                    }
                }
                Err(e) => {
                    data.state.show_error(&e);
                }
            }
        });
    };

    let departments = data.departments;
    view! {
        <div class="space-y-6">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Generate Attendance Report"</h2>
                <form on:submit=on_generate class="grid md:grid-cols-4 gap-3 items-end">
                    <DepartmentSelect departments=departments value=department_id on_change=set_department_id />
                    <DateField label="Start Date" value=start_date on_input=set_start_date />
                    <DateField label="End Date" value=end_date on_input=set_end_date />
                    <button
                        type="submit"
                        disabled=move || generating.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if generating.get() { "Generating..." } else { "Generate" }}
                    </button>
                </form>
            </section>

            {move || {
                report.get().map(|current| {
                    let summary = current.summary.clone();
                    let highlights = current.highlights.clone();
                    let breakdown = current.breakdown.clone();
                    let on_download_csv = on_download_csv.clone();
                    view! {
                        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                            <div class="flex items-center justify-between">
                                <div>
                                    <h2 class="text-xl font-semibold">{summary.department_name.clone()}</h2>
                                    <p class="text-gray-400 text-sm">{summary.period.clone()}</p>
                                </div>
                                <div class="flex space-x-2">
                                    <button
                                        on:click=move |_| set_report_view.set("summary")
                                        class=move || report_pill_class(report_view.get() == "summary")
                                    >
                                        "Summary"
                                    </button>
                                    <button
                                        on:click=move |_| set_report_view.set("visuals")
                                        class=move || report_pill_class(report_view.get() == "visuals")
                                    >
                                        "Visuals"
                                    </button>
                                    <button
                                        on:click=on_download_csv
                                        class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg text-sm font-medium transition-colors"
                                    >
                                        "⬇ Download CSV"
                                    </button>
                                </div>
                            </div>

                            {move || {
                                if report_view.get() == "summary" {
                                    let summary = summary.clone();
                                    let highlights = highlights.clone();
                                    let breakdown = breakdown.clone();
                                    view! {
                                        <div class="space-y-6">
                                            <div class="grid md:grid-cols-4 gap-4">
                                                <ReportStat
                                                    label="Classes Recorded"
                                                    value=summary.total_classes_recorded.to_string()
                                                />
                                                <ReportStat
                                                    label="Attendance Rate"
                                                    value=format!("{:.1}%", summary.overall_attendance_rate)
                                                />
                                                <ReportStat
                                                    label="Most Present"
                                                    value=highlights.most_present_lecturer
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())
                                                />
                                                <ReportStat
                                                    label="Highest Absence"
                                                    value=highlights.highest_absence_lecturer
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())
                                                />
                                            </div>

                                            <BreakdownTable breakdown=breakdown />
                                        </div>
                                    }.into_view()
                                } else {
                                    view! { <ReportCharts report=report /> }.into_view()
                                }
                            }}
                        </section>
                    }
                })
            }}
        </div>
    }
}

fn report_pill_class(active: bool) -> String {
    let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
    if active {
        format!("{} bg-primary-600 text-white", base)
    } else {
        format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
    }
}

#[component]
fn ReportStat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <div class="text-gray-400 text-xs uppercase tracking-wide">{label}</div>
            <div class="text-lg font-semibold mt-1">{value}</div>
        </div>
    }
}

#[component]
fn BreakdownTable(breakdown: Vec<crate::api::types::LecturerBreakdown>) -> impl IntoView {
    if breakdown.is_empty() {
        return view! {
            <p class="text-gray-400">"No attendance was recorded in this period."</p>
        }
        .into_view();
    }

    view! {
        <table class="w-full text-sm">
            <thead>
                <tr class="text-left text-gray-400 border-b border-gray-700">
                    <th class="py-2">"Lecturer"</th>
                    <th>"Total"</th>
                    <th>"Attended"</th>
                    <th>"Missed"</th>
                    <th>"Rate"</th>
                </tr>
            </thead>
            <tbody>
                {breakdown.into_iter().map(|row| {
                    view! {
                        <tr class="border-b border-gray-700 last:border-0">
                            <td class="py-2">{row.lecturer_name}</td>
                            <td>{row.total_classes}</td>
                            <td class="text-green-400">{row.classes_attended}</td>
                            <td class="text-red-400">{row.classes_missed}</td>
                            <td>{format!("{:.1}%", row.attendance_rate)}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

fn department_name_for(departments: &[Department], id: u32) -> Option<String> {
    departments
        .iter()
        .find(|dept| dept.id == id)
        .map(|dept| dept.name.clone())
}

/// Hand the browser a text blob through a synthetic anchor click
fn trigger_download(content: &str, filename: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;

    let parts = js_sys::Array::of1(&content.into());
    let blob = web_sys::Blob::new_with_str_sequence(&parts).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

    let anchor = document.create_element("a").ok()?;
    anchor.set_attribute("href", &url).ok()?;
    anchor.set_attribute("download", filename).ok()?;
    anchor.dyn_ref::<web_sys::HtmlElement>()?.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}

// ============ Shared form pieces ============

#[component]
fn ModalShell(
    title: &'static str,
    on_close: impl Fn() + 'static + Clone,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/60 flex items-center justify-center z-50 p-4">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        on:click=move |_| on_close()
                        class="text-gray-400 hover:text-white text-xl"
                    >
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    value: ReadSignal<String>,
    on_input: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_input.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn DateField(
    label: &'static str,
    value: ReadSignal<String>,
    on_input: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="date"
                prop:value=move || value.get()
                on:input=move |ev| on_input.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn DepartmentSelect(
    departments: RwSignal<Vec<Department>>,
    value: ReadSignal<String>,
    on_change: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Department"</label>
            <select
                on:change=move |ev| on_change.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">"-- Select Department --"</option>
                {move || {
                    departments.get().into_iter().map(|dept| {
                        view! { <option value=dept.id.to_string()>{dept.name}</option> }
                    }).collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
fn ProgramSelect(
    programs: RwSignal<Vec<Program>>,
    value: ReadSignal<String>,
    on_change: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Program"</label>
            <select
                on:change=move |ev| on_change.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">"-- Select Program --"</option>
                {move || {
                    programs.get().into_iter().map(|program| {
                        view! { <option value=program.id.to_string()>{program.name}</option> }
                    }).collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
fn LevelSelect(value: ReadSignal<String>, on_change: WriteSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Level"</label>
            <select
                on:change=move |ev| on_change.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                {PROGRAM_LEVELS.iter().map(|level| {
                    let level = *level;
                    view! { <option value=level>{level}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn RoleSelect(value: ReadSignal<String>, on_change: WriteSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Role"</label>
            <select
                on:change=move |ev| on_change.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                {USER_ROLES.iter().map(|role| {
                    let role = *role;
                    view! { <option value=role>{role}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn SaveButton(saving: ReadSignal<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || saving.get()
            class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                   rounded-lg font-medium transition-colors"
        >
            {move || if saving.get() { "Saving..." } else { "Save" }}
        </button>
    }
}

#[component]
fn EditButton(on_click: impl Fn() + 'static) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click()
            class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded-lg text-xs font-medium transition-colors"
        >
            "Edit"
        </button>
    }
}

#[component]
fn DeleteButton(on_click: impl Fn() + 'static) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click()
            class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded-lg text-xs font-medium transition-colors"
        >
            "Delete"
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_refetches_only_owning_collection() {
        for collection in ALL_COLLECTIONS {
            assert_eq!(affected_by_create(collection), &[collection]);
        }
    }

    #[test]
    fn test_update_scope_follows_denormalized_names() {
        assert_eq!(
            affected_by_update(Collection::Departments),
            &[
                Collection::Departments,
                Collection::Programs,
                Collection::Users
            ]
        );
        assert_eq!(
            affected_by_update(Collection::Programs),
            &[Collection::Programs, Collection::Subjects]
        );
        assert_eq!(
            affected_by_update(Collection::Subjects),
            &[Collection::Subjects]
        );
        assert_eq!(affected_by_update(Collection::Users), &[Collection::Users]);
        assert_eq!(
            affected_by_update(Collection::Semesters),
            &[Collection::Semesters]
        );
    }

    #[test]
    fn test_semester_draft_needs_all_fields() {
        assert!(semester_draft("2026", "1", "2026-02-01", "2026-06-30").is_some());
        assert!(semester_draft("", "1", "2026-02-01", "2026-06-30").is_none());
        assert!(semester_draft("2026", "1", "", "2026-06-30").is_none());
    }

    #[test]
    fn test_program_draft_parses_selects() {
        let draft = program_draft("Software Engineering", "Degree", "3", "4");
        assert!(draft.is_some());
        assert!(program_draft("  ", "Degree", "3", "4").is_none());
        assert!(program_draft("SE", "Degree", "", "4").is_none());
    }

    #[test]
    fn test_subject_draft_requires_code() {
        assert!(subject_draft("Operating Systems", "CS301", "2", "3").is_some());
        assert!(subject_draft("Operating Systems", "", "2", "3").is_none());
    }

    #[test]
    fn test_csv_name_follows_selected_department() {
        let departments = vec![
            Department {
                id: 3,
                name: "Computer Science".to_string(),
            },
            Department {
                id: 5,
                name: "Law".to_string(),
            },
        ];
        // Switching the filter between generate and download must switch the name
        assert_eq!(
            department_name_for(&departments, 3).as_deref(),
            Some("Computer Science")
        );
        assert_eq!(department_name_for(&departments, 5).as_deref(), Some("Law"));
        assert_eq!(department_name_for(&departments, 9), None);
    }
}
