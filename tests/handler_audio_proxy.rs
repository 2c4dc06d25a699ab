mod common;

use std::sync::Arc;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;

use common::{StubAudio, StubAudioSource};
use soundforge::api::handlers::audio_proxy_handler;
use soundforge::infrastructure::email::NullMailer;

fn relay_app(source: Arc<StubAudioSource>) -> TestServer {
    let state = common::create_test_state(common::test_catalog(), Arc::new(NullMailer::new()), source);
    let app = Router::new()
        .route("/api/audio-proxy", get(audio_proxy_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_relay_missing_id_is_400_plain_text() {
    let source = Arc::new(StubAudioSource::audio_bytes(b"mp3data"));
    let server = relay_app(source.clone());

    let response = server.get("/api/audio-proxy").await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Missing Google Drive file ID");
    assert!(source.requested_ids.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_relay_empty_id_is_400() {
    let source = Arc::new(StubAudioSource::audio_bytes(b"mp3data"));
    let server = relay_app(source.clone());

    let response = server.get("/api/audio-proxy").add_query_param("id", "").await;

    response.assert_status_bad_request();
    assert!(source.requested_ids.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_relay_streams_body_with_forwarded_headers() {
    let source = Arc::new(StubAudioSource::audio_bytes(b"mp3data"));
    let server = relay_app(source.clone());

    let response = server
        .get("/api/audio-proxy")
        .add_query_param("id", "1GsnDkwqeqYZEPdMhmbeT7HzDJ7U2Y4Cu")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "audio/mpeg");
    assert_eq!(response.header("content-length"), "7");
    assert_eq!(response.as_bytes().as_ref(), b"mp3data".as_slice());

    let ids = source.requested_ids.lock().unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0], "1GsnDkwqeqYZEPdMhmbeT7HzDJ7U2Y4Cu");
}

#[tokio::test]
async fn test_relay_defaults_content_type_to_audio_mpeg() {
    let source = Arc::new(StubAudioSource::new(StubAudio::Success {
        content_type: None,
        content_length: None,
        bytes: b"x".to_vec(),
    }));
    let server = relay_app(source);

    let response = server.get("/api/audio-proxy").add_query_param("id", "abc").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "audio/mpeg");
}

#[tokio::test]
async fn test_relay_mirrors_upstream_failure_status() {
    let source = Arc::new(StubAudioSource::new(StubAudio::UpstreamStatus {
        status: 404,
        status_text: "Not Found".to_string(),
    }));
    let server = relay_app(source);

    let response = server.get("/api/audio-proxy").add_query_param("id", "abc").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_relay_timeout_is_504() {
    let source = Arc::new(StubAudioSource::new(StubAudio::TimedOut));
    let server = relay_app(source);

    let response = server.get("/api/audio-proxy").add_query_param("id", "abc").await;

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(response.text(), "Timed out fetching audio from Google Drive");
}

#[tokio::test]
async fn test_relay_transport_fault_is_500() {
    let source = Arc::new(StubAudioSource::new(StubAudio::Transport));
    let server = relay_app(source);

    let response = server.get("/api/audio-proxy").add_query_param("id", "abc").await;

    response.assert_status_internal_server_error();
    assert_eq!(response.text(), "Error fetching audio from Google Drive");
}
