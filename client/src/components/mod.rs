//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and read shared state from Leptos context
//! providers.

pub mod footer;
pub mod top_bar_navigation;
