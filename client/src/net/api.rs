//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth, upload
//! and generation failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdRequest, DocumentSummary, GeneratedAd, User};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_code_payload(email: &str, sign_up: bool) -> serde_json::Value {
    serde_json::json!({ "email": email, "sign_up": sign_up })
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct RequestEmailCodeResponse {
    ok: bool,
    code: Option<String>,
}

/// Request a 6-character email login code via `POST /api/auth/email/request-code`.
///
/// `sign_up` asks the server to provision the account if it does not exist;
/// the server refuses when sign-up is disabled.
///
/// Returns an optional code string when the server is configured to echo codes.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn request_email_login_code(email: &str, sign_up: bool) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&request_code_payload(email, sign_up))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 403 {
            return Err("No account exists for this email.".to_owned());
        }
        if !resp.ok() {
            return Err(failed_message("request code", resp.status()));
        }
        let body: RequestEmailCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, sign_up);
        Err(NOT_AVAILABLE.to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct VerifyEmailCodeResponse {
    ok: bool,
}

/// Verify an email login code via `POST /api/auth/email/verify-code`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds with a non-OK status,
/// or the verification code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("verify code", resp.status()));
        }
        let body: VerifyEmailCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("verify code failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// List uploaded documents via `GET /api/documents`, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn list_documents() -> Result<Vec<DocumentSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/documents")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("list documents", resp.status()));
        }
        resp.json::<Vec<DocumentSummary>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Upload a product description file as multipart field `file` via `POST /api/documents`.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the request fails, or
/// the server rejects the file (too large, not text).
#[cfg(feature = "hydrate")]
pub async fn upload_document(file: &web_sys::File) -> Result<DocumentSummary, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build upload form".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "could not attach file".to_owned())?;

    let resp = gloo_net::http::Request::post("/api/documents")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    match resp.status() {
        413 => return Err("File is too large.".to_owned()),
        415 => return Err("Only UTF-8 text files can be uploaded.".to_owned()),
        _ => {}
    }
    if !resp.ok() {
        return Err(failed_message("upload", resp.status()));
    }
    resp.json::<DocumentSummary>()
        .await
        .map_err(|e| e.to_string())
}

/// Generate advertisement copy via `POST /api/ads`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn generate_ad(request: &AdRequest) -> Result<GeneratedAd, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/ads")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 503 {
            return Err("Ad generation is not configured on the server.".to_owned());
        }
        if !resp.ok() {
            return Err(failed_message("generate ad", resp.status()));
        }
        resp.json::<GeneratedAd>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(NOT_AVAILABLE.to_owned())
    }
}
