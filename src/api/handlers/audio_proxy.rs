//! Handler for the audio relay endpoint.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{StatusCode, header, header::HeaderValue},
    response::{IntoResponse, Response},
};

use crate::api::dto::relay::RelayParams;
use crate::domain::gateways::audio_source::AudioFetchError;
use crate::state::AppState;

const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

/// Streams a Drive-hosted preview through to the client.
///
/// # Endpoint
///
/// `GET /api/audio-proxy?id=<fileId>`
///
/// # Behavior
///
/// The upstream body is passed through as a stream, never buffered. The
/// upstream `Content-Type` (default `audio/mpeg`) and `Content-Length`
/// headers are forwarded.
///
/// # Responses (plain text bodies)
///
/// - **400** `Missing Google Drive file ID` when `id` is absent
/// - **upstream status** with the upstream status text on upstream failure
///   or an empty upstream body
/// - **504** `Timed out fetching audio from Google Drive` when the bounded
///   timeout elapses
/// - **500** `Error fetching audio from Google Drive` on any other fault
pub async fn audio_proxy_handler(
    State(state): State<AppState>,
    Query(params): Query<RelayParams>,
) -> Response {
    let Some(file_id) = params.id.filter(|id| !id.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing Google Drive file ID").into_response();
    };

    match state.relay_service.fetch(&file_id).await {
        Ok(payload) => {
            let mut response = Body::from_stream(payload.body).into_response();

            let content_type = payload
                .content_type
                .and_then(|v| HeaderValue::from_str(&v).ok())
                .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);

            if let Some(length) = payload.content_length {
                response
                    .headers_mut()
                    .insert(header::CONTENT_LENGTH, HeaderValue::from(length));
            }

            response
        }
        Err(AudioFetchError::UpstreamStatus {
            status,
            status_text,
        }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, status_text).into_response()
        }
        Err(AudioFetchError::TimedOut) => (
            StatusCode::GATEWAY_TIMEOUT,
            "Timed out fetching audio from Google Drive",
        )
            .into_response(),
        Err(AudioFetchError::Transport(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error fetching audio from Google Drive",
        )
            .into_response(),
    }
}
