//! UI Components
//!
//! Reusable Leptos components for the dashboards.

pub mod confirm;
pub mod loading;
pub mod nav;
pub mod report_charts;
pub mod toast;

pub use confirm::ConfirmDialog;
pub use loading::ListSkeleton;
pub use nav::Nav;
pub use report_charts::ReportCharts;
pub use toast::Toast;
