//! Global Application State
//!
//! Reactive state management using Leptos signals. Holds the session, the
//! theme, and the toast notification channels.

use leptos::*;

use crate::state::session::{self, Role, SessionUser};
use crate::state::theme::{self, Theme};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Logged-in user decoded from the stored token, if any
    pub session: RwSignal<Option<SessionUser>>,
    /// Current theme
    pub theme: RwSignal<Theme>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Warning message (client-side validation)
    pub warning: RwSignal<Option<String>>,
}

/// Provide global state to the component tree.
///
/// Restores the session from the persisted token and applies the persisted
/// theme. A token that no longer decodes is dropped from storage.
pub fn provide_global_state() {
    let session = match session::stored_token() {
        Some(token) => {
            let user = SessionUser::from_token(&token);
            if user.is_none() {
                session::clear_token();
            }
            user
        }
        None => None,
    };

    let theme = theme::load_theme();
    theme::apply_theme(theme);

    let state = GlobalState {
        session: create_rw_signal(session),
        theme: create_rw_signal(theme),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        warning: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Store a freshly issued token and open a session from its claims.
    /// Returns the role so the caller can route to the right dashboard.
    pub fn login(&self, token: &str) -> Result<Role, String> {
        let user = SessionUser::from_token(token)
            .ok_or_else(|| "Login succeeded but the session token could not be read".to_string())?;
        session::store_token(token);
        let role = user.role;
        self.session.set(Some(user));
        Ok(role)
    }

    /// Drop the token and the in-memory session
    pub fn logout(&self) {
        session::clear_token();
        self.session.set(None);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        theme::apply_theme(next);
        self.theme.set(next);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show a warning message (auto-clears after timeout)
    pub fn show_warning(&self, message: &str) {
        self.warning.set(Some(message.to_string()));

        let warning_signal = self.warning;
        gloo_timers::callback::Timeout::new(4000, move || {
            warning_signal.set(None);
        })
        .forget();
    }
}
