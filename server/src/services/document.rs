//! Document service: validation and storage of uploaded product descriptions.
//!
//! DESIGN
//! ======
//! Uploads are plain UTF-8 text; the stored body is the ad-generation input.
//! Validation is pure so size/encoding rules are testable without Postgres.

use sqlx::PgPool;
use uuid::Uuid;

const DEFAULT_CONTENT_TYPE: &str = "text/plain";
const MAX_NAME_LEN: usize = 255;

const CREATED_AT_RFC3339: &str = r#"to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')"#;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid file name")]
    InvalidName,
    #[error("file is empty")]
    Empty,
    #[error("file exceeds {limit} bytes")]
    TooLarge { limit: usize },
    #[error("file is not UTF-8 text")]
    NotText,
    #[error("document not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// A validated upload, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub name: String,
    pub content_type: String,
    pub text: String,
}

/// Listing entry; the body is never included.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DocumentSummary {
    pub id: Uuid,
    pub name: String,
    pub content_type: String,
    pub size: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub content_type: String,
    pub text: String,
    pub uploaded_by: Option<Uuid>,
    pub created_at: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate raw upload parts.
///
/// # Errors
///
/// Returns the first rule the upload breaks: name, emptiness, size, encoding.
pub fn validate_upload(
    name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<NewDocument, DocumentError> {
    let name = name.trim();
    if name.is_empty() || name.len() > MAX_NAME_LEN || name.contains(['/', '\\']) {
        return Err(DocumentError::InvalidName);
    }
    if bytes.is_empty() {
        return Err(DocumentError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(DocumentError::TooLarge { limit: max_bytes });
    }
    let text = std::str::from_utf8(bytes).map_err(|_| DocumentError::NotText)?;
    let text = text.replace("\r\n", "\n");
    if text.trim().is_empty() {
        return Err(DocumentError::Empty);
    }

    let content_type = content_type
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_owned();

    Ok(NewDocument { name: name.to_owned(), content_type, text })
}

// =============================================================================
// STORAGE
// =============================================================================

/// Insert a validated document.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn insert_document(
    pool: &PgPool,
    doc: &NewDocument,
    uploaded_by: Uuid,
) -> Result<DocumentSummary, DocumentError> {
    let (id, size, created_at) = sqlx::query_as::<_, (Uuid, i64, String)>(&format!(
        "INSERT INTO documents (name, content_type, body, uploaded_by)
         VALUES ($1, $2, $3, $4)
         RETURNING id, octet_length(body)::BIGINT, {CREATED_AT_RFC3339}"
    ))
    .bind(&doc.name)
    .bind(&doc.content_type)
    .bind(&doc.text)
    .bind(uploaded_by)
    .fetch_one(pool)
    .await?;

    Ok(DocumentSummary { id, name: doc.name.clone(), content_type: doc.content_type.clone(), size, created_at })
}

/// List all documents, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_documents(pool: &PgPool) -> Result<Vec<DocumentSummary>, DocumentError> {
    let rows = sqlx::query_as::<_, (Uuid, String, String, i64, String)>(&format!(
        "SELECT id, name, content_type, octet_length(body)::BIGINT, {CREATED_AT_RFC3339}
         FROM documents
         ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, content_type, size, created_at)| DocumentSummary { id, name, content_type, size, created_at })
        .collect())
}

/// Load one document including its text.
///
/// # Errors
///
/// Returns [`DocumentError::NotFound`] for an unknown id.
pub async fn get_document(pool: &PgPool, id: Uuid) -> Result<Document, DocumentError> {
    let row = sqlx::query_as::<_, (Uuid, String, String, String, Option<Uuid>, String)>(&format!(
        "SELECT id, name, content_type, body, uploaded_by, {CREATED_AT_RFC3339}
         FROM documents
         WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let (id, name, content_type, text, uploaded_by, created_at) = row.ok_or(DocumentError::NotFound(id))?;
    Ok(Document { id, name, content_type, text, uploaded_by, created_at })
}

/// Load only the text of a document.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn get_document_text(pool: &PgPool, id: Uuid) -> Result<Option<String>, DocumentError> {
    let text = sqlx::query_scalar::<_, String>("SELECT body FROM documents WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(text)
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
