//! Authenticated application shell: navigation bar plus one routed page.
//!
//! The shell is only mounted once the authentication gate lets it through.
//! From then on the navigation bar is rendered on every path and the body is
//! whatever [`match_route`] selects, or nothing at all when no route matches.

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::top_bar_navigation::TopBarNavigation;
use crate::pages::{home::HomePage, upload::UploadPage};
use crate::routing::{Page, ROUTES, match_route};
use crate::state::documents::DocumentsState;

/// Render plan for the authenticated shell at one path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellLayout {
    pub navigation: bool,
    pub body: Option<Page>,
}

#[must_use]
pub fn layout(path: &str) -> ShellLayout {
    ShellLayout { navigation: true, body: match_route(ROUTES, path) }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Homepage => view! { <HomePage/> }.into_any(),
        Page::Upload => view! { <UploadPage/> }.into_any(),
    }
}

/// Navigation bar and the page selected for the current location.
///
/// The document cache lives here, under the gate, so each signed-in session
/// starts with an empty, unloaded listing.
#[component]
pub fn AppShell() -> impl IntoView {
    provide_context(RwSignal::new(DocumentsState::default()));
    let location = use_location();
    let plan = Memo::new(move |_| layout(&location.pathname.get()));

    view! {
        <Show when=move || plan.get().navigation>
            <TopBarNavigation/>
        </Show>
        <main class="app-body">{move || plan.get().body.map(render_page)}</main>
        // <Footer/>
    }
}
