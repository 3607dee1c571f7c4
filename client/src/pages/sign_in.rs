//! Sign-in UI rendered by the authentication gate.
//!
//! Email + access-code flow. A "Create account" tab is offered only when the
//! gate is configured with `hide_sign_up = false`.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::state::auth::AuthState;

const CODE_LEN: usize = 6;

/// Which tab of the sign-in card is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignInMode {
    #[default]
    SignIn,
    CreateAccount,
}

impl SignInMode {
    fn wants_sign_up(self) -> bool {
        self == Self::CreateAccount
    }
}

/// Tabs shown on the sign-in card for the given gate option.
#[must_use]
pub fn available_modes(hide_sign_up: bool) -> &'static [SignInMode] {
    if hide_sign_up {
        &[SignInMode::SignIn]
    } else {
        &[SignInMode::SignIn, SignInMode::CreateAccount]
    }
}

fn mode_label(mode: SignInMode) -> &'static str {
    match mode {
        SignInMode::SignIn => "Sign In",
        SignInMode::CreateAccount => "Create Account",
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "login-tab login-tab--active" } else { "login-tab" }
}

pub(crate) fn normalize_code_input(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

pub(crate) fn validate_request_code_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    Ok(email.to_owned())
}

pub(crate) fn validate_verify_code_input(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let code = code.trim();
    if email.is_empty() || code.len() != CODE_LEN {
        return Err("Enter both email and 6-char code.");
    }
    Ok((email.to_owned(), code.to_owned()))
}

#[component]
pub fn SignInPage(hide_sign_up: bool) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let mode = RwSignal::new(SignInMode::SignIn);
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_request_code_input(&email.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let sign_up = mode.get().wants_sign_up();
        busy.set(true);
        info.set("Requesting code...".to_owned());
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_email_login_code(&email_value, sign_up).await {
                Ok(code_opt) => {
                    echoed_code.set(code_opt);
                    info.set("Code sent. Check your email.".to_owned());
                }
                Err(e) => info.set(format!("Code request failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, sign_up);
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_verify_code_input(&email.get(), &code.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email_login_code(&email_value, &code_value).await {
                Ok(()) => {
                    let user = crate::net::api::fetch_current_user().await;
                    if user.is_none() {
                        info.set("Signed in, but the session could not be loaded.".to_owned());
                    }
                    auth.update(|a| a.resolve(user));
                }
                Err(e) => info.set(format!("Verification failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, code_value, auth);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Ad Studio"</h1>
                <Show when=move || { available_modes(hide_sign_up).len() > 1 }>
                    <div class="login-tabs">
                        {available_modes(hide_sign_up)
                            .iter()
                            .map(|&m| {
                                view! {
                                    <button
                                        class=move || tab_class(mode.get() == m)
                                        on:click=move |_| mode.set(m)
                                    >
                                        {mode_label(m)}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Show>
                <p class="login-card__subtitle">{move || mode_label(mode.get())}</p>
                <form class="login-form" on:submit=on_request_code>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send 6-char Code"
                    </button>
                </form>
                <form class="login-form" on:submit=on_verify_code>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="ABC123"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In With Code"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || echoed_code.get().is_some()>
                    <p class="login-message login-message--code">
                        "Code: "
                        <span>{move || echoed_code.get().unwrap_or_default()}</span>
                    </p>
                </Show>
            </div>
        </div>
    }
}
