//! Auth routes: email access codes, session cookie, current user.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::{email_auth, session};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const SESSION_DAYS: i64 = 30;

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_DAYS))
        .build()
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }
    let jar = CookieJar::new().add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct RequestCodeBody {
    email: String,
    #[serde(default)]
    sign_up: bool,
}

/// `POST /api/auth/email/request-code`: issue a code and deliver it.
pub async fn request_email_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    let auth = &state.config.auth;
    let code = match email_auth::request_access_code(&state.pool, &body.email, body.sign_up, auth.sign_up_enabled).await
    {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(error = %e, "access code request refused");
            return email_auth_error_to_status(&e).into_response();
        }
    };

    if let Some(resend) = &auth.resend {
        let to = body.email.trim().to_ascii_lowercase();
        if let Err(e) = email_auth::send_access_code_email(&resend.api_key, &resend.from, &to, &code).await {
            tracing::error!(error = %e, "access code delivery failed");
            return email_auth_error_to_status(&e).into_response();
        }
    } else if !auth.echo_codes {
        tracing::warn!("no email delivery configured; access code was not sent");
    }

    let echoed = auth.echo_codes.then_some(code);
    Json(serde_json::json!({ "ok": true, "code": echoed })).into_response()
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    email: String,
    code: String,
}

/// `POST /api/auth/email/verify-code`: exchange a code for a session cookie.
pub async fn verify_email_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Response {
    let user_id = match email_auth::verify_access_code(&state.pool, &body.email, &body.code).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "access code verification failed");
            return email_auth_error_to_status(&e).into_response();
        }
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    tracing::info!(%user_id, "signed in");
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (jar, Json(serde_json::json!({ "ok": true }))).into_response()
}

pub(crate) fn email_auth_error_to_status(err: &email_auth::EmailAuthError) -> StatusCode {
    use email_auth::EmailAuthError as E;
    match err {
        E::InvalidEmail | E::InvalidCode => StatusCode::BAD_REQUEST,
        E::VerificationFailed => StatusCode::UNAUTHORIZED,
        E::SignUpDisabled => StatusCode::FORBIDDEN,
        E::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        E::EmailDelivery(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
