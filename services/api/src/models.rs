//! Media models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry in one of the media collections
///
/// The externally visible identity of an item is its position in its
/// collection; `id` is a stable synthetic identifier that survives the
/// index shifts caused by deletions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub genre: Option<String>,
    pub ratings: Option<f64>,
    pub director: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a media item
///
/// All fields are optional at the serde layer; `title` and `year` are
/// enforced by the store so a missing field surfaces as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaDraft {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub ratings: Option<f64>,
    pub director: Option<String>,
}

/// Partial-update payload; fields left out keep their current values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaPatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub ratings: Option<f64>,
    pub director: Option<String>,
}

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for token generation
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Combined snapshot of both collections
#[derive(Debug, Serialize)]
pub struct MediaOverview {
    pub movies: Vec<MediaItem>,
    pub series: Vec<MediaItem>,
}
