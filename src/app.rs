//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{AdminDashboard, CrDashboard, HodDashboard, Landing, LecturerDashboard};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/admin" view=|| view! {
                            <RequireSession>
                                <AdminDashboard />
                            </RequireSession>
                        } />
                        <Route path="/hod" view=|| view! {
                            <RequireSession>
                                <HodDashboard />
                            </RequireSession>
                        } />
                        <Route path="/lecturer" view=|| view! {
                            <RequireSession>
                                <LecturerDashboard />
                            </RequireSession>
                        } />
                        <Route path="/cr" view=|| view! {
                            <RequireSession>
                                <CrDashboard />
                            </RequireSession>
                        } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Gate for the dashboard routes. Without a session the route renders a
/// redirect to the landing page; the server stays the real authority.
#[component]
fn RequireSession(children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    if state.session.get_untracked().is_none() {
        view! { <Redirect path="/" /> }.into_view()
    } else {
        children().into_view()
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"LECATS"</span>
                <span>"Lecturer Class Attendance Tracking System"</span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
