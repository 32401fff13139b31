//! State Management
//!
//! Global application state: session, theme, and notifications.

pub mod global;
pub mod session;
pub mod theme;

pub use global::{provide_global_state, GlobalState};
pub use session::{Role, SessionUser};
pub use theme::Theme;
