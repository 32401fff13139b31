//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod cr;
pub mod hod;
pub mod landing;
pub mod lecturer;

pub use admin::AdminDashboard;
pub use cr::CrDashboard;
pub use hod::HodDashboard;
pub use landing::Landing;
pub use lecturer::LecturerDashboard;
