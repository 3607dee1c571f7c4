//! Page footer showing the prototyping logo.
//!
//! Not mounted by the shell.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <img src="/prototyping.png" alt="Ad Studio" class="footer-logo"/>
        </footer>
    }
}
