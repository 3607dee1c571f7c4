//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `documents`) so pages can depend on
//! small focused models provided through Leptos context.

pub mod auth;
pub mod documents;
