use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Deserialize)]
pub struct ArtistsQuery {
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchRequest {
    pub start_artist: String,
    pub end_artist: String,
}

#[derive(Serialize, Deserialize)]
pub struct ConnectionResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<String>>,
}

impl ConnectionResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            found: false,
            message: Some(message.into()),
            path: None,
            songs: None,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ArtistModel {
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct SongModel {
    pub artist1: String,
    pub artist2: String,
    pub song_name: String,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body shape: `{"detail": "..."}`.
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
