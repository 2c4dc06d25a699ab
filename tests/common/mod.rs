#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use futures::StreamExt;

use soundforge::application::services::{CatalogService, PurchaseService, RelayService};
use soundforge::domain::catalog::{Catalog, PreviewSource, Track};
use soundforge::domain::gateways::{
    AudioFetchError, AudioPayload, AudioSource, Mailer, MailerError, OutboundEmail,
};
use soundforge::infrastructure::email::NullMailer;
use soundforge::state::AppState;

pub fn make_track(id: u32, title: &str, category: &str, price: u32) -> Track {
    Track {
        id,
        title: title.to_string(),
        genre: "Hip Hop".to_string(),
        bpm: 140,
        key: "C# min".to_string(),
        preview: PreviewSource::Direct(format!("https://cdn.example.com/{id}.mp3")),
        category: category.to_string(),
        producer: "R_JXY".to_string(),
        published: NaiveDate::from_ymd_opt(2023, 10, 10).unwrap(),
        plays: 1_000,
        artwork: format!("/poster/{id}.png"),
        price,
        discount: None,
    }
}

/// Seven tracks across three categories, so page size 6 splits into a full
/// page and a single-item page.
pub fn test_catalog() -> Arc<Catalog> {
    let tracks = vec![
        make_track(1, "Midnight Drive", "Trap", 2999),
        make_track(2, "Cold Fronts", "Trap", 3499),
        make_track(3, "Smoke Rings", "Lo-Fi", 1999),
        make_track(4, "Paper Planes", "Lo-Fi", 2499),
        make_track(5, "Glass City", "Drill", 2999),
        make_track(6, "Night Shift", "Drill", 2799),
        make_track(7, "Afterglow", "Trap", 3999),
    ];
    Arc::new(Catalog::new(tracks).unwrap())
}

/// Mailer that records every accepted email.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutboundEmail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Mailer that always fails with the configured error.
pub struct FailingMailer {
    pub kind: FailingMailerKind,
}

pub enum FailingMailerKind {
    Rejected(String),
    TimedOut,
    Transport,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutboundEmail) -> Result<(), MailerError> {
        Err(match &self.kind {
            FailingMailerKind::Rejected(message) => MailerError::Rejected(message.clone()),
            FailingMailerKind::TimedOut => MailerError::TimedOut,
            FailingMailerKind::Transport => {
                MailerError::Transport("connection reset".to_string())
            }
        })
    }
}

/// What the stub audio source answers with.
pub enum StubAudio {
    Success {
        content_type: Option<String>,
        content_length: Option<u64>,
        bytes: Vec<u8>,
    },
    UpstreamStatus { status: u16, status_text: String },
    TimedOut,
    Transport,
}

pub struct StubAudioSource {
    pub response: StubAudio,
    pub requested_ids: Mutex<Vec<String>>,
}

impl StubAudioSource {
    pub fn new(response: StubAudio) -> Self {
        Self {
            response,
            requested_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn audio_bytes(bytes: &[u8]) -> Self {
        Self::new(StubAudio::Success {
            content_type: Some("audio/mpeg".to_string()),
            content_length: Some(bytes.len() as u64),
            bytes: bytes.to_vec(),
        })
    }
}

#[async_trait]
impl AudioSource for StubAudioSource {
    async fn fetch(&self, file_id: &str) -> Result<AudioPayload, AudioFetchError> {
        self.requested_ids.lock().unwrap().push(file_id.to_string());

        match &self.response {
            StubAudio::Success {
                content_type,
                content_length,
                bytes,
            } => {
                let data = Bytes::from(bytes.clone());
                Ok(AudioPayload {
                    content_type: content_type.clone(),
                    content_length: *content_length,
                    body: futures::stream::once(async move { Ok(data) }).boxed(),
                })
            }
            StubAudio::UpstreamStatus {
                status,
                status_text,
            } => Err(AudioFetchError::UpstreamStatus {
                status: *status,
                status_text: status_text.clone(),
            }),
            StubAudio::TimedOut => Err(AudioFetchError::TimedOut),
            StubAudio::Transport => {
                Err(AudioFetchError::Transport("connection reset".to_string()))
            }
        }
    }
}

pub fn create_test_state(
    catalog: Arc<Catalog>,
    mailer: Arc<dyn Mailer>,
    audio_source: Arc<dyn AudioSource>,
) -> AppState {
    AppState::new(
        Arc::new(CatalogService::new(catalog)),
        Arc::new(PurchaseService::new(mailer)),
        Arc::new(RelayService::new(audio_source)),
    )
}

/// Test state over the seven-track catalog with a no-op mailer and a one-byte
/// audio stub.
pub fn create_default_state() -> AppState {
    create_test_state(
        test_catalog(),
        Arc::new(NullMailer::new()),
        Arc::new(StubAudioSource::audio_bytes(b"x")),
    )
}
