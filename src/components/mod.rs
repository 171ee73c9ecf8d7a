//! Leptos view components mounted into server-rendered pages.

pub mod session_badge;
