//! Document routes: upload, list and fetch product descriptions.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::document::{self, Document, DocumentError, DocumentSummary};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// `POST /api/documents`: multipart upload with one `file` field.
pub async fn upload_document(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentSummary>), StatusCode> {
    let limit = state.config.upload_max_bytes;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!(error = %e, "malformed multipart body");
        e.status()
    })? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "upload read failed");
            e.status()
        })?;

        let doc = document::validate_upload(&name, content_type.as_deref(), &bytes, limit).map_err(|e| {
            tracing::warn!(error = %e, %name, "upload rejected");
            document_error_to_status(&e)
        })?;
        let summary = document::insert_document(&state.pool, &doc, auth.user.id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "document insert failed");
                document_error_to_status(&e)
            })?;

        tracing::info!(id = %summary.id, name = %summary.name, size = summary.size, "document uploaded");
        return Ok((StatusCode::CREATED, Json(summary)));
    }

    Err(StatusCode::BAD_REQUEST)
}

/// `GET /api/documents`: list documents, newest first.
pub async fn list_documents(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<DocumentSummary>>, StatusCode> {
    let docs = document::list_documents(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "document list failed");
        document_error_to_status(&e)
    })?;
    Ok(Json(docs))
}

/// `GET /api/documents/{id}`: one document including its text.
pub async fn get_document(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, StatusCode> {
    let doc = document::get_document(&state.pool, id).await.map_err(|e| {
        if !matches!(e, DocumentError::NotFound(_)) {
            tracing::error!(error = %e, %id, "document fetch failed");
        }
        document_error_to_status(&e)
    })?;
    Ok(Json(doc))
}

pub(crate) fn document_error_to_status(err: &DocumentError) -> StatusCode {
    match err {
        DocumentError::InvalidName | DocumentError::Empty => StatusCode::BAD_REQUEST,
        DocumentError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        DocumentError::NotText => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        DocumentError::NotFound(_) => StatusCode::NOT_FOUND,
        DocumentError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "documents_test.rs"]
mod tests;
