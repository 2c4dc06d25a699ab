mod common;

use axum::{
    Router,
    routing::get,
};
use axum_test::TestServer;

use soundforge::api::handlers::{list_tracks_handler, track_detail_handler};

fn tracks_app() -> TestServer {
    let app = Router::new()
        .route("/api/tracks", get(list_tracks_handler))
        .route("/api/tracks/{id}", get(track_detail_handler))
        .with_state(common::create_default_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_first_page_is_full() {
    let server = tracks_app();

    let response = server.get("/api/tracks").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 6);
    assert_eq!(json["page"], 1);
    assert_eq!(json["total_pages"], 2);
    assert_eq!(json["page_numbers"], serde_json::json!([1, 2]));
}

#[tokio::test]
async fn test_list_second_page_has_remainder() {
    let server = tracks_app();

    let response = server.get("/api/tracks").add_query_param("page", 2).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Afterglow");
    assert_eq!(json["page"], 2);
}

#[tokio::test]
async fn test_list_out_of_range_page_is_clamped() {
    let server = tracks_app();

    let response = server.get("/api/tracks").add_query_param("page", 99).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["page"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_zero_page_is_rejected() {
    let server = tracks_app();

    let response = server.get("/api/tracks").add_query_param("page", 0).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_category_filter() {
    let server = tracks_app();

    let response = server
        .get("/api/tracks")
        .add_query_param("category", "Lo-Fi")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|t| t["category"] == "Lo-Fi"));
    assert_eq!(json["total_pages"], 1);
    assert_eq!(json["page_numbers"], serde_json::json!([1]));
}

#[tokio::test]
async fn test_list_categories_start_with_all() {
    let server = tracks_app();

    let response = server.get("/api/tracks").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["categories"],
        serde_json::json!(["All", "Trap", "Lo-Fi", "Drill"])
    );
}

#[tokio::test]
async fn test_list_wire_field_names() {
    let server = tracks_app();

    let response = server.get("/api/tracks").await;

    let json = response.json::<serde_json::Value>();
    let first = &json["items"][0];
    assert!(first.get("url").is_some());
    assert!(first.get("publishedDate").is_some());
    assert!(first.get("preview").is_none());
}

#[tokio::test]
async fn test_detail_returns_track_and_related() {
    let server = tracks_app();

    let response = server.get("/api/tracks/1").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["track"]["id"], 1);
    assert_eq!(json["track"]["title"], "Midnight Drive");

    // Related tracks share the category and never include the track itself.
    let related = json["related"].as_array().unwrap();
    assert_eq!(related.len(), 2);
    assert!(related.iter().all(|t| t["category"] == "Trap"));
    assert!(related.iter().all(|t| t["id"] != 1));
}

#[tokio::test]
async fn test_detail_unknown_id_is_404() {
    let server = tracks_app();

    let response = server.get("/api/tracks/999").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Beat not found");
}
