use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(User { id: "u1".to_owned(), name: "Alice".to_owned(), email: None }),
        loading: false,
    }
}

#[test]
fn pending_lookup_renders_neither_app_nor_sign_in() {
    assert_eq!(gate_decision(&AuthState::pending()), GateDecision::Pending);
}

#[test]
fn no_user_after_lookup_shows_sign_in() {
    assert_eq!(gate_decision(&AuthState::default()), GateDecision::SignIn);
}

#[test]
fn user_present_renders_app() {
    assert_eq!(gate_decision(&signed_in()), GateDecision::RenderApp);
}

#[test]
fn user_present_wins_over_loading_flag() {
    let mut state = signed_in();
    state.loading = true;
    assert_eq!(gate_decision(&state), GateDecision::RenderApp);
}

#[test]
fn sign_out_returns_to_sign_in() {
    let mut state = signed_in();
    state.sign_out();
    assert_eq!(gate_decision(&state), GateDecision::SignIn);
}

#[test]
fn config_default_shows_sign_up() {
    assert!(!AuthenticatorConfig::default().hide_sign_up);
}
