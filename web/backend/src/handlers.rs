use crate::models::{
    ArtistModel, ArtistsQuery, ConnectionResponse, ErrorResponse, HealthResponse, MessageResponse,
    SearchRequest, SongModel,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use featpath_core::{GraphError, PathResult, bfs_find_path};
use std::sync::Arc;

/// A typed graph failure translated to an HTTP status and a `detail` body.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl From<GraphError> for ApiError {
    fn from(error: GraphError) -> Self {
        let status = match &error {
            GraphError::EmptyName => StatusCode::BAD_REQUEST,
            GraphError::ArtistNotFound(_) => StatusCode::NOT_FOUND,
            GraphError::ArtistExists(_) => StatusCode::CONFLICT,
        };
        Self::new(status, error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running!".to_string(),
    })
}

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArtistsQuery>,
) -> Json<Vec<String>> {
    let filter = params.search.as_deref().filter(|s| !s.is_empty());
    let graph = state.graph.read();
    Json(graph.list_node_names(filter))
}

pub async fn find_connection(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Json<ConnectionResponse> {
    let graph = state.graph.read();
    let (result, artists_visited, duration) =
        bfs_find_path(&request.start_artist, &request.end_artist, &graph);

    tracing::debug!(
        start = %request.start_artist,
        end = %request.end_artist,
        artists_visited,
        duration_secs = duration,
        "connection search finished"
    );

    match result {
        PathResult::SameArtist => Json(ConnectionResponse::not_found(
            "Please select two different artists.",
        )),
        PathResult::NotFound => Json(ConnectionResponse::not_found("Connection not found")),
        PathResult::Found { artists, songs } => Json(ConnectionResponse {
            found: true,
            message: None,
            path: Some(artists),
            songs: Some(songs),
        }),
    }
}

pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    Json(artist): Json<ArtistModel>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let mut graph = state.graph.write();
    match graph.create_node_exclusive(&artist.name) {
        Ok(clean_name) => {
            tracing::info!(artist = %clean_name, "artist created");
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse {
                    message: format!("Artist {clean_name} created."),
                }),
            ))
        }
        Err(GraphError::EmptyName) => Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Artist name cannot be empty.",
        )),
        Err(GraphError::ArtistExists(name)) => Err(ApiError::new(
            StatusCode::CONFLICT,
            format!("Artist '{name}' already exists."),
        )),
        Err(other) => Err(other.into()),
    }
}

pub async fn add_song(
    State(state): State<Arc<AppState>>,
    Json(song): Json<SongModel>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if song.artist1 == song.artist2 {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Cannot connect an artist to themselves.",
        ));
    }

    let mut graph = state.graph.write();
    match graph.merge_edge(&song.artist1, &song.artist2, &song.song_name) {
        Ok(created) => {
            tracing::info!(
                artist1 = %song.artist1,
                artist2 = %song.artist2,
                song = %song.song_name,
                created,
                "song connection merged"
            );
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse {
                    message: format!("Connected {} and {}.", song.artist1, song.artist2),
                }),
            ))
        }
        Err(GraphError::ArtistNotFound(_)) => Err(ApiError::new(
            StatusCode::NOT_FOUND,
            "One or both artists not found.",
        )),
        Err(other) => Err(other.into()),
    }
}

pub async fn delete_artist(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut graph = state.graph.write();
    match graph.delete_node_cascade(&name) {
        Ok(removed) => {
            tracing::info!(artist = %name, removed_collaborations = removed, "artist deleted");
            Ok(Json(MessageResponse {
                message: format!("Artist {name} deleted."),
            }))
        }
        Err(GraphError::ArtistNotFound(_)) => {
            Err(ApiError::new(StatusCode::NOT_FOUND, "Artist not found"))
        }
        Err(other) => Err(other.into()),
    }
}
