//! Navigation Component
//!
//! Header bar with brand, theme switch, and the logged-in user's identity.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;
use crate::state::theme::Theme;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_theme = state.clone();
    let on_toggle_theme = move |_| state_for_theme.toggle_theme();

    let state_for_logout = state.clone();
    let navigate = use_navigate();
    let on_logout = move |_| {
        state_for_logout.logout();
        navigate("/", Default::default());
    };

    let session = state.session;
    let theme = state.theme;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎓"</span>
                        <span class="text-xl font-bold text-white">"LECATS"</span>
                    </A>

                    <div class="flex items-center space-x-4">
                        // Theme switch
                        <button
                            on:click=on_toggle_theme
                            class="px-3 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                            title="Toggle theme"
                        >
                            {move || if theme.get() == Theme::Dark { "☀" } else { "🌙" }}
                        </button>

                        // Identity and logout, only when logged in
                        {move || {
                            session.get().map(|user| {
                                let on_logout = on_logout.clone();
                                view! {
                                    <span class="text-gray-300 text-sm hidden md:inline">
                                        "Welcome, "{user.full_name.clone()}
                                    </span>
                                    <span class="bg-gray-700 text-gray-300 text-xs px-2 py-1 rounded-full">
                                        {user.role.label()}
                                    </span>
                                    <button
                                        on:click=on_logout
                                        class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm font-medium transition-colors"
                                    >
                                        "Logout"
                                    </button>
                                }
                            })
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}
