//! Authentication gate wrapped around the application shell.
//!
//! ARCHITECTURE
//! ============
//! [`with_authenticator`] is a higher-order view: it takes "the thing to
//! render once signed in" plus an [`AuthenticatorConfig`] and returns a new
//! renderable. The gate owns the session state (`RwSignal<AuthState>` in
//! context), performs the initial `/api/auth/me` lookup, and renders either
//! its own sign-in UI or the wrapped app. The wrapped app never inspects the
//! session itself.
//!
//! SSR renders the pending state; the browser resolves the session after
//! hydration so server and client markup agree.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::pages::sign_in::SignInPage;
use crate::state::auth::AuthState;

/// Options recognised by the gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthenticatorConfig {
    /// Hide the "Create account" affordance on the sign-in UI.
    pub hide_sign_up: bool,
}

/// What the gate renders for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session lookup in flight.
    Pending,
    /// No session; show the sign-in UI.
    SignIn,
    /// Signed in; render the wrapped app.
    RenderApp,
}

#[must_use]
pub fn gate_decision(state: &AuthState) -> GateDecision {
    match (&state.user, state.loading) {
        (Some(_), _) => GateDecision::RenderApp,
        (None, true) => GateDecision::Pending,
        (None, false) => GateDecision::SignIn,
    }
}

/// Wrap `app` behind the authentication gate.
///
/// The returned closure is a view producer: mount it anywhere a view is
/// expected (it must sit inside a `<Router>` if `app` uses routing hooks).
pub fn with_authenticator<F, V>(app: F, config: AuthenticatorConfig) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static
where
    F: Fn() -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let auth = RwSignal::new(AuthState::pending());
        provide_context(auth);

        #[cfg(feature = "hydrate")]
        Effect::new(move || {
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| a.resolve(user));
            });
        });

        let decision = Memo::new(move |_| gate_decision(&auth.get()));
        let app = app.clone();

        (move || match decision.get() {
            GateDecision::Pending => view! { <div class="auth-pending">"Checking session..."</div> }.into_any(),
            GateDecision::SignIn => view! { <SignInPage hide_sign_up=config.hide_sign_up/> }.into_any(),
            GateDecision::RenderApp => app().into_any(),
        })
        .into_any()
    }
}
