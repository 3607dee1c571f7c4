//! Root application component: router, authentication gate and shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::auth_gate::{AuthenticatorConfig, with_authenticator};
use crate::shell::AppShell;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Everything under the router sits behind the authentication gate with
/// sign-up hidden; only provisioned accounts can reach the shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gated = with_authenticator(AppShell, AuthenticatorConfig { hide_sign_up: true });

    view! {
        <Stylesheet id="leptos" href="/pkg/ad-studio.css"/>
        <Title text="Ad Studio"/>

        <Router>{gated}</Router>
    }
}
