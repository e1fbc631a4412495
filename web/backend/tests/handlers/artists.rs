use crate::fixtures::{assert_detail, delete, get, post_json, read_json, test_app};
use axum::http::StatusCode;
use featpath_web::models::{HealthResponse, MessageResponse};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let response = get(test_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = read_json(response).await;
    assert_eq!(health.status, "Server is running!");
}

#[tokio::test]
async fn test_list_artists_sorted() {
    let response = get(test_app(), "/artists").await;

    assert_eq!(response.status(), StatusCode::OK);
    let names: Vec<String> = read_json(response).await;
    assert_eq!(
        names,
        vec![
            "Billie Eilish",
            "FINNEAS",
            "Loner",
            "Olivia Rodrigo",
            "Taylor Swift"
        ]
    );
}

#[tokio::test]
async fn test_list_artists_filter_is_case_sensitive() {
    let response = get(test_app(), "/artists?search=FIN").await;
    let names: Vec<String> = read_json(response).await;
    assert_eq!(names, vec!["FINNEAS"]);

    let response = get(test_app(), "/artists?search=fin").await;
    let names: Vec<String> = read_json(response).await;
    assert!(names.is_empty());
}

#[tokio::test]
async fn test_list_artists_empty_search_returns_everything() {
    let response = get(test_app(), "/artists?search=").await;

    let names: Vec<String> = read_json(response).await;
    assert_eq!(names.len(), 5);
}

#[tokio::test]
async fn test_create_artist() {
    let app = test_app();

    let response = post_json(app.clone(), "/artists", json!({"name": "Doechii"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let message: MessageResponse = read_json(response).await;
    assert_eq!(message.message, "Artist Doechii created.");

    let response = get(app, "/artists?search=Doechii").await;
    let names: Vec<String> = read_json(response).await;
    assert_eq!(names, vec!["Doechii"]);
}

#[tokio::test]
async fn test_create_artist_rejects_empty_name() {
    let response = post_json(test_app(), "/artists", json!({"name": "   "})).await;

    assert_detail(
        response,
        StatusCode::BAD_REQUEST,
        "Artist name cannot be empty.",
    )
    .await;
}

#[tokio::test]
async fn test_create_artist_duplicate_check_folds_case() {
    let response = post_json(test_app(), "/artists", json!({"name": "taylor swift"})).await;

    assert_detail(
        response,
        StatusCode::CONFLICT,
        "Artist 'taylor swift' already exists.",
    )
    .await;
}

#[tokio::test]
async fn test_delete_artist_cascades() {
    let app = test_app();

    let response = delete(app.clone(), "/artists/Olivia%20Rodrigo").await;

    assert_eq!(response.status(), StatusCode::OK);
    let message: MessageResponse = read_json(response).await;
    assert_eq!(message.message, "Artist Olivia Rodrigo deleted.");

    // The deleted artist is gone and the chain through her is broken.
    let response = get(app.clone(), "/artists").await;
    let names: Vec<String> = read_json(response).await;
    assert!(!names.contains(&"Olivia Rodrigo".to_string()));

    let response = post_json(
        app,
        "/connect",
        json!({"start_artist": "Taylor Swift", "end_artist": "Billie Eilish"}),
    )
    .await;
    let connection: featpath_web::models::ConnectionResponse = read_json(response).await;
    assert!(!connection.found);
}

#[tokio::test]
async fn test_delete_unknown_artist() {
    let response = delete(test_app(), "/artists/Nobody").await;

    assert_detail(response, StatusCode::NOT_FOUND, "Artist not found").await;
}
