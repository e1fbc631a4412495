use crate::fixtures::{assert_detail, post_json, read_json, test_app};
use axum::http::StatusCode;
use featpath_web::models::{ConnectionResponse, MessageResponse};
use serde_json::json;

#[tokio::test]
async fn test_add_song_connects_artists() {
    let app = test_app();

    let response = post_json(
        app.clone(),
        "/songs",
        json!({
            "artist1": "Taylor Swift",
            "artist2": "FINNEAS",
            "song_name": "Imaginary Duet"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let message: MessageResponse = read_json(response).await;
    assert_eq!(message.message, "Connected Taylor Swift and FINNEAS.");

    // The new edge shortens the connection to a single hop.
    let response = post_json(
        app,
        "/connect",
        json!({"start_artist": "Taylor Swift", "end_artist": "FINNEAS"}),
    )
    .await;
    let connection: ConnectionResponse = read_json(response).await;
    assert_eq!(connection.path.unwrap(), vec!["Taylor Swift", "FINNEAS"]);
    assert_eq!(connection.songs.unwrap(), vec!["Imaginary Duet"]);
}

#[tokio::test]
async fn test_add_song_rejects_self_connection() {
    let response = post_json(
        test_app(),
        "/songs",
        json!({
            "artist1": "Taylor Swift",
            "artist2": "Taylor Swift",
            "song_name": "Anti-Hero"
        }),
    )
    .await;

    assert_detail(
        response,
        StatusCode::BAD_REQUEST,
        "Cannot connect an artist to themselves.",
    )
    .await;
}

#[tokio::test]
async fn test_add_song_requires_both_artists() {
    let response = post_json(
        test_app(),
        "/songs",
        json!({
            "artist1": "Taylor Swift",
            "artist2": "Nobody",
            "song_name": "Ghost Track"
        }),
    )
    .await;

    assert_detail(
        response,
        StatusCode::NOT_FOUND,
        "One or both artists not found.",
    )
    .await;
}

#[tokio::test]
async fn test_add_song_merge_is_idempotent() {
    let app = test_app();
    let body = json!({
        "artist1": "Taylor Swift",
        "artist2": "Olivia Rodrigo",
        "song_name": "Deja Vu"
    });

    // The seeded edge already exists; merging it again is a quiet no-op.
    let response = post_json(app, "/songs", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}
