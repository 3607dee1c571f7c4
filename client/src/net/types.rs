//! Shared DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field so serde
//! stays lossless across the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email address, if known.
    #[serde(default)]
    pub email: Option<String>,
}

/// Listing entry for an uploaded product description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document identifier (UUID string).
    pub id: String,
    /// Original file name.
    pub name: String,
    /// MIME type reported at upload.
    pub content_type: String,
    /// Size of the stored text in bytes.
    pub size: i64,
    /// RFC 3339 upload timestamp.
    pub created_at: String,
}

/// Whether the generated copy must follow prescription-drug advertising rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FdaGuideline {
    #[default]
    #[serde(rename = "Yes")]
    Follow,
    #[serde(rename = "No")]
    Ignore,
}

/// Body of `POST /api/ads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdRequest {
    pub document_id: String,
    /// Target country; selects the output language server-side.
    pub location: String,
    pub fda: FdaGuideline,
}

/// Advertisement copy returned by `POST /api/ads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAd {
    pub brand: String,
    pub title: String,
    pub summary: String,
}
