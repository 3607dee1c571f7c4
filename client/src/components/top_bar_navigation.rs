//! Top bar with page links, the signed-in user and a sign-out button.

#[cfg(test)]
#[path = "top_bar_navigation_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::documents::DocumentsState;

/// `(label, href)` pairs rendered as navigation links, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[("Home", "/"), ("Upload", "/upload")];

/// Drop the signed-in user and everything cached on their behalf.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn end_session(auth: RwSignal<AuthState>, docs: RwSignal<DocumentsState>) {
    docs.update(DocumentsState::clear);
    auth.update(AuthState::sign_out);
}

/// Persistent navigation bar for the authenticated shell.
#[component]
pub fn TopBarNavigation() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let docs = expect_context::<RwSignal<DocumentsState>>();
    let user_name = move || auth.get().user.map_or_else(String::new, |u| u.name);

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            end_session(auth, docs);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = docs;
    };

    view! {
        <nav class="top-bar">
            <span class="top-bar__brand">"Ad Studio"</span>
            <ul class="top-bar__links">
                {NAV_LINKS
                    .iter()
                    .map(|&(label, href)| {
                        view! {
                            <li>
                                <A href=href attr:class="top-bar__link">{label}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <span class="top-bar__spacer"></span>
            <span class="top-bar__user">{user_name}</span>
            <button class="btn top-bar__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </nav>
    }
}
