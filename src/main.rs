//! LECATS
//!
//! Lecturer Class Attendance Tracking System, built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily attendance submission by class representatives
//! - HOD timetable management and attendance verification
//! - Lecturer schedules with excuse uploads for absences
//! - Admin master data, user management, and report exports
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the LECATS API gateway over HTTP with a
//! bearer token; the server remains the authority on every decision.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod report;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
