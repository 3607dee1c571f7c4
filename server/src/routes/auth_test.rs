use super::*;
use email_auth::EmailAuthError;

// =============================================================================
// email_auth_error_to_status
// =============================================================================

#[test]
fn malformed_input_is_bad_request() {
    assert_eq!(email_auth_error_to_status(&EmailAuthError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(email_auth_error_to_status(&EmailAuthError::InvalidCode), StatusCode::BAD_REQUEST);
}

#[test]
fn wrong_or_expired_code_is_unauthorized() {
    assert_eq!(email_auth_error_to_status(&EmailAuthError::VerificationFailed), StatusCode::UNAUTHORIZED);
}

#[test]
fn refused_sign_up_is_forbidden() {
    assert_eq!(email_auth_error_to_status(&EmailAuthError::SignUpDisabled), StatusCode::FORBIDDEN);
}

#[test]
fn delivery_failure_is_bad_gateway() {
    let err = EmailAuthError::EmailDelivery("resend down".into());
    assert_eq!(email_auth_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

#[test]
fn database_failure_is_internal() {
    let err = EmailAuthError::Db(sqlx::Error::PoolTimedOut);
    assert_eq!(email_auth_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_long_lived() {
    let cookie = session_cookie("tok".into(), true);
    assert_eq!(cookie.name(), "session_token");
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_session_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.secure(), Some(false));
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}
