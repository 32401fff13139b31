//! Landing Page
//!
//! Public entry point: hero, feature blurbs, and the login/register panel.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::api::types::Department;
use crate::state::global::GlobalState;

/// Public landing page with tabbed login/register forms
#[component]
pub fn Landing() -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal("login");

    view! {
        <div class="space-y-12">
            // Hero
            <section class="text-center py-12">
                <h1 class="text-4xl font-bold mb-4">"Lecturer Class Attendance Tracking"</h1>
                <p class="text-gray-400 max-w-2xl mx-auto">
                    "Daily attendance submitted by class representatives, verified by heads \
                     of department, and reported to administrators."
                </p>
            </section>

            // Features
            <section class="grid md:grid-cols-3 gap-6 max-w-4xl mx-auto">
                <FeatureCard
                    icon="📋"
                    title="Daily Tracking"
                    description="Class representatives mark each scheduled class present or absent."
                />
                <FeatureCard
                    icon="✅"
                    title="HOD Verification"
                    description="Heads of department verify submissions and review excuse documents."
                />
                <FeatureCard
                    icon="📊"
                    title="Powerful Reporting"
                    description="Admins generate detailed CSV reports for any department and date range."
                />
            </section>

            // Auth panel
            <section class="max-w-md mx-auto bg-gray-800 rounded-xl p-6">
                <div class="flex mb-6 border-b border-gray-700">
                    <TabButton label="Login" tab="login" active_tab=active_tab set_active_tab=set_active_tab />
                    <TabButton label="Register" tab="register" active_tab=active_tab set_active_tab=set_active_tab />
                </div>

                {move || {
                    if active_tab.get() == "login" {
                        view! { <LoginForm /> }.into_view()
                    } else {
                        view! {
                            <RegisterForm on_registered=move || set_active_tab.set("login") />
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center">
            <div class="text-4xl mb-3">{icon}</div>
            <h3 class="font-semibold mb-2">{title}</h3>
            <p class="text-gray-400 text-sm">{description}</p>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    tab: &'static str,
    active_tab: ReadSignal<&'static str>,
    set_active_tab: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_active_tab.set(tab)
            class=move || {
                let base = "flex-1 px-4 py-2 text-sm font-medium transition-colors";
                if active_tab.get() == tab {
                    format!("{} text-white border-b-2 border-primary-500", base)
                } else {
                    format!("{} text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let e = email.get();
        let p = password.get();
        if e.is_empty() || p.is_empty() {
            state.show_warning("Email and password are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::auth::login(&e, &p).await {
                Ok(token) => match state_clone.login(&token) {
                    Ok(role) => {
                        navigate(role.dashboard_path(), Default::default());
                    }
                    Err(e) => {
                        state_clone.show_error(&e);
                    }
                },
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                <input
                    type="email"
                    placeholder="you@university.edu"
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

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterForm(on_registered: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal("CR".to_string());
    let (department_id, set_department_id) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let departments = create_rw_signal(Vec::<Department>::new());

    // Departments come from the public endpoint, no session required
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::auth::fetch_departments().await {
                Ok(list) => {
                    departments.set(list);
                }
                Err(_) => {
                    state.show_error("Could not load departments for registration.");
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = full_name.get();
        let mail = email.get();
        let pw = password.get();

        if name.is_empty() || mail.is_empty() {
            state.show_warning("Full name and email are required");
            return;
        }
        if !password_ok(&pw) {
            state.show_warning(
                "Password must be 6-10 characters with upper, lower, digit, and one of @$!%*?&",
            );
            return;
        }
        let Ok(dept_id) = department_id.get().parse::<u32>() else {
            state.show_warning("Please select a department");
            return;
        };

        set_submitting.set(true);

        let request = api::auth::RegisterRequest {
            full_name: name,
            email: mail,
            password: pw,
            role: role.get(),
            department_id: dept_id,
        };

        let state_clone = state.clone();
        let on_registered = on_registered.clone();
        spawn_local(async move {
            match api::auth::register(&request).await {
                Ok(()) => {
                    state_clone.show_success("Registration successful. You can now log in.");
                    set_full_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_role.set("CR".to_string());
                    set_department_id.set(String::new());
                    on_registered();
                }
                Err(e) => {
                    // Draft stays put for a retry
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
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
                <p class="text-xs text-gray-500 mt-1">
                    "6-10 characters, mixing upper and lower case, a digit, and one of @$!%*?&"
                </p>
            </div>

            <div class="grid grid-cols-2 gap-3">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Your Role"</label>
                    <select
                        on:change=move |ev| set_role.set(event_target_value(&ev))
                        prop:value=move || role.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="CR">"Class Representative"</option>
                        <option value="Lecturer">"Lecturer"</option>
                        <option value="HOD">"Head of Department"</option>
                    </select>
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Your Department"</label>
                    <select
                        on:change=move |ev| set_department_id.set(event_target_value(&ev))
                        prop:value=move || department_id.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"-- Select Department --"</option>
                        {move || {
                            departments.get().into_iter().map(|dept| {
                                view! {
                                    <option value=dept.id.to_string()>{dept.name}</option>
                                }
                            }).collect_view()
                        }}
                    </select>
                </div>
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { "Registering..." } else { "Register" }}
            </button>
        </form>
    }
}

/// Registration password rule: 6-10 characters drawn from letters, digits,
/// and @$!%*?&, with at least one of each class.
fn password_ok(password: &str) -> bool {
    const SPECIALS: &str = "@$!%*?&";

    let len = password.chars().count();
    if !(6..=10).contains(&len) {
        return false;
    }

    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c));

    allowed
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIALS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rule() {
        assert!(password_ok("Abc12!"));
        assert!(password_ok("Admin12@eg"));
        assert!(!password_ok("abc12!")); // no uppercase
        assert!(!password_ok("ABC12!")); // no lowercase
        assert!(!password_ok("Abcdef!")); // no digit
        assert!(!password_ok("Abc123")); // no special
        assert!(!password_ok("Ab1!")); // too short
        assert!(!password_ok("Abcdefgh123!")); // too long
        assert!(!password_ok("Abc 12!")); // disallowed character
    }
}
