//! API Client
//!
//! HTTP client plumbing plus per-role endpoint functions.

pub mod admin;
pub mod auth;
pub mod client;
pub mod cr;
pub mod hod;
pub mod lecturer;
pub mod types;

pub use client::{get_api_base, upload_url};
