use super::*;

#[test]
fn normalize_email_accepts_basic_address() {
    assert_eq!(normalize_email("  USER@Example.com "), Some("user@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_invalid_values() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("user"), None);
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("user@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

#[test]
fn normalize_code_accepts_upper_and_normalizes() {
    let code = generate_access_code();
    assert_eq!(normalize_code(&code), Some(code.clone()));
    assert_eq!(normalize_code("abc234"), Some("ABC234".to_owned()));
}

#[test]
fn normalize_code_rejects_bad_shapes() {
    assert_eq!(normalize_code("abc12"), None);
    assert_eq!(normalize_code("abc1234"), None);
    assert_eq!(normalize_code("ABC1I0"), None);
    assert_eq!(normalize_code("ABC12!"), None);
}

#[test]
fn normalize_code_rejects_non_ascii_that_truncates_into_the_alphabet() {
    // U+0141 is two UTF-8 bytes and its low byte is b'A'.
    assert_eq!("\u{141}AAAA".len(), CODE_LEN);
    assert_eq!(normalize_code("\u{141}AAAA"), None);
    assert_eq!(normalize_code("\u{142}AAAA"), None);
}

#[test]
fn generate_access_code_shape() {
    let code = generate_access_code();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| CODE_ALPHABET.contains(&(c as u8))));
}

#[test]
fn hash_access_code_is_stable() {
    let a = hash_access_code("ABC123");
    let b = hash_access_code("ABC123");
    let c = hash_access_code("ABC124");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn render_template_injects_email_and_code() {
    let html = render_email_auth_template("user@example.com", "ABC234");
    assert!(html.contains("user@example.com"));
    assert!(html.contains("ABC234"));
    assert!(!html.contains("{{EMAIL}}"));
    assert!(!html.contains("{{CODE}}"));
}

#[test]
fn name_from_email_uses_local_part() {
    assert_eq!(name_from_email("ann.lee@example.com"), "ann.lee");
}

// =============================================================================
// admission
// =============================================================================

#[test]
fn existing_accounts_always_get_a_code() {
    for (sign_up, enabled) in [(false, false), (true, false), (false, true), (true, true)] {
        assert_eq!(admission(true, sign_up, enabled), Admission::Existing);
    }
}

#[test]
fn unknown_email_is_provisioned_only_when_requested_and_enabled() {
    assert_eq!(admission(false, true, true), Admission::Provision);
}

#[test]
fn unknown_email_is_refused_otherwise() {
    assert_eq!(admission(false, false, true), Admission::Refuse);
    assert_eq!(admission(false, true, false), Admission::Refuse);
    assert_eq!(admission(false, false, false), Admission::Refuse);
}

#[test]
fn sign_up_disabled_message_is_user_facing() {
    assert!(EmailAuthError::SignUpDisabled.to_string().contains("sign-up is disabled"));
}
