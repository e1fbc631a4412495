pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    Router,
    routing::{delete, get, post},
};
use state::AppState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// All routes of the collaboration graph service.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route(
            "/artists",
            get(handlers::list_artists).post(handlers::create_artist),
        )
        .route("/artists/:name", delete(handlers::delete_artist))
        .route("/connect", post(handlers::find_connection))
        .route("/songs", post(handlers::add_song))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
