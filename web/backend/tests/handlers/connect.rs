use crate::fixtures::{post_json, read_json, test_app};
use axum::http::StatusCode;
use featpath_web::models::ConnectionResponse;
use serde_json::json;

#[tokio::test]
async fn test_connect_finds_shortest_path_with_songs() {
    let response = post_json(
        test_app(),
        "/connect",
        json!({"start_artist": "Taylor Swift", "end_artist": "FINNEAS"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let connection: ConnectionResponse = read_json(response).await;

    assert!(connection.found);
    assert_eq!(
        connection.path.unwrap(),
        vec!["Taylor Swift", "Olivia Rodrigo", "Billie Eilish", "FINNEAS"]
    );
    assert_eq!(
        connection.songs.unwrap(),
        vec!["Deja Vu", "Guess", "What Was I Made For?"]
    );
}

#[tokio::test]
async fn test_connect_same_artist() {
    let response = post_json(
        test_app(),
        "/connect",
        json!({"start_artist": "Taylor Swift", "end_artist": "Taylor Swift"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let connection: ConnectionResponse = read_json(response).await;

    assert!(!connection.found);
    assert_eq!(
        connection.message.unwrap(),
        "Please select two different artists."
    );
}

#[tokio::test]
async fn test_connect_unknown_artist() {
    let response = post_json(
        test_app(),
        "/connect",
        json!({"start_artist": "Taylor Swift", "end_artist": "Nobody"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let connection: ConnectionResponse = read_json(response).await;

    assert!(!connection.found);
    assert_eq!(connection.message.unwrap(), "Connection not found");
}

#[tokio::test]
async fn test_connect_disjoint_artists() {
    let response = post_json(
        test_app(),
        "/connect",
        json!({"start_artist": "Taylor Swift", "end_artist": "Loner"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let connection: ConnectionResponse = read_json(response).await;

    assert!(!connection.found);
    assert_eq!(connection.message.unwrap(), "Connection not found");
    assert!(connection.path.is_none());
    assert!(connection.songs.is_none());
}
