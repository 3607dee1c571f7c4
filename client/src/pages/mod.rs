//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` and `upload` are the routed pages of the shell. `sign_in` belongs
//! to the authentication gate and is rendered instead of the shell while no
//! session exists.

pub mod home;
pub mod sign_in;
pub mod upload;

use leptos::prelude::*;

use crate::state::documents::DocumentsState;

/// Fetch the document listing into shared state, reporting failures to `error`.
pub(crate) fn refresh_documents(docs: RwSignal<DocumentsState>, error: RwSignal<String>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_documents().await {
            Ok(items) => docs.update(|d| d.replace(items)),
            Err(e) => {
                log::warn!("document listing failed: {e}");
                error.set(format!("Could not load documents: {e}"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (docs, error);
}
