//! Ad generation route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::ad::{self, AdError, FdaGuideline, GeneratedAd};
use crate::services::document;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateAdBody {
    pub document_id: Uuid,
    pub location: String,
    pub fda: String,
}

/// `POST /api/ads`: generate brand, headline and summary for a document.
pub async fn generate_ad(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<GenerateAdBody>,
) -> Result<Json<GeneratedAd>, StatusCode> {
    let Some(llm) = &state.llm else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let text = document::get_document_text(&state.pool, body.document_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "document lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    let fda = FdaGuideline::from_wire(&body.fda);
    tracing::info!(
        user_id = %auth.user.id,
        document_id = %body.document_id,
        location = %body.location,
        ?fda,
        "generating ad"
    );

    let generated = ad::generate_ad(llm.as_ref(), &text, &body.location, fda)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, document_id = %body.document_id, "ad generation failed");
            ad_error_to_status(&e)
        })?;
    Ok(Json(generated))
}

pub(crate) fn ad_error_to_status(err: &AdError) -> StatusCode {
    match err {
        AdError::EmptyDocument => StatusCode::UNPROCESSABLE_ENTITY,
        AdError::Llm(_) | AdError::EmptyCompletion(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "ads_test.rs"]
mod tests;
