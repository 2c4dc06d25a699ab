//! Beat catalog entities and the in-memory catalog store.
//!
//! The catalog is immutable after construction. It is built once at process
//! start from the bundled track list and shared behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use chrono::NaiveDate;

/// Query prefix under which relayed previews are served.
const RELAY_PATH_PREFIX: &str = "/api/audio-proxy?id=";

/// Where a track's preview audio is fetched from.
///
/// Tracks hosted on Google Drive cannot be streamed from a direct link, so
/// their previews are addressed through the audio relay instead. On the wire
/// both variants are a single string, matching the catalog's `url` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PreviewSource {
    /// A plain URL the client can fetch directly.
    Direct(String),
    /// A Google Drive file id, served through `GET /api/audio-proxy`.
    Relay(String),
}

impl PreviewSource {
    /// The href a client should request to stream this preview.
    pub fn href(&self) -> String {
        match self {
            Self::Direct(url) => url.clone(),
            Self::Relay(file_id) => format!("{RELAY_PATH_PREFIX}{file_id}"),
        }
    }

    /// The Drive file id, when this preview goes through the relay.
    pub fn relay_file_id(&self) -> Option<&str> {
        match self {
            Self::Direct(_) => None,
            Self::Relay(file_id) => Some(file_id),
        }
    }
}

impl From<String> for PreviewSource {
    fn from(value: String) -> Self {
        match value.strip_prefix(RELAY_PATH_PREFIX) {
            Some(file_id) => Self::Relay(file_id.to_string()),
            None => Self::Direct(value),
        }
    }
}

impl From<PreviewSource> for String {
    fn from(value: PreviewSource) -> Self {
        value.href()
    }
}

/// One purchasable, preview-able audio track.
///
/// `price` is in whole currency units and is always greater than zero for
/// tracks accepted into a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub bpm: u16,
    pub key: String,
    #[serde(rename = "url")]
    pub preview: PreviewSource,
    pub category: String,
    pub producer: String,
    #[serde(rename = "publishedDate")]
    pub published: NaiveDate,
    pub plays: u64,
    pub artwork: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

/// Catalog construction failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate track id {0}")]
    DuplicateId(u32),

    #[error("track {0} has a zero price")]
    ZeroPrice(u32),
}

/// Immutable, insertion-ordered collection of tracks.
#[derive(Debug)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Builds a catalog, enforcing unique ids and positive prices.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for track in &tracks {
            if !seen.insert(track.id) {
                return Err(CatalogError::DuplicateId(track.id));
            }
            if track.price == 0 {
                return Err(CatalogError::ZeroPrice(track.id));
            }
        }
        Ok(Self { tracks })
    }

    /// The bundled SoundForge catalog.
    pub fn bundled() -> Self {
        Self::new(bundled_tracks()).expect("bundled catalog satisfies catalog invariants")
    }

    /// All tracks in insertion order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Looks up a track by id.
    pub fn get(&self, id: u32) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Category filter options: `"All"` followed by each distinct category in
    /// first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec!["All".to_string()];
        for track in &self.tracks {
            if !out.contains(&track.category) {
                out.push(track.category.clone());
            }
        }
        out
    }

    /// Up to `limit` other tracks sharing the category of track `id`.
    pub fn related(&self, id: u32, limit: usize) -> Vec<&Track> {
        let Some(track) = self.get(id) else {
            return Vec::new();
        };
        self.tracks
            .iter()
            .filter(|t| t.category == track.category && t.id != id)
            .take(limit)
            .collect()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid catalog date")
}

/// Tracks shipped with the studio's storefront.
fn bundled_tracks() -> Vec<Track> {
    let entry = |id: u32,
                 title: &str,
                 genre: &str,
                 bpm: u16,
                 key: &str,
                 preview: PreviewSource,
                 category: &str,
                 producer: &str,
                 published: NaiveDate,
                 plays: u64,
                 artwork: &str,
                 price: u32| Track {
        id,
        title: title.to_string(),
        genre: genre.to_string(),
        bpm,
        key: key.to_string(),
        preview,
        category: category.to_string(),
        producer: producer.to_string(),
        published,
        plays,
        artwork: artwork.to_string(),
        price,
        discount: None,
    };
    let direct = |url: &str| PreviewSource::Direct(url.to_string());
    let relay = |file_id: &str| PreviewSource::Relay(file_id.to_string());

    vec![
        entry(
            1,
            "Electric Guitar Chords - Fire",
            "Hip Hop, Soul",
            130,
            "F min",
            direct("https://cdn.pixabay.com/audio/2022/10/16/audio_12b6b7b7b7.mp3"),
            "Guitar",
            "AD Rapstar",
            date(2023, 4, 2),
            2100,
            "/poster/music_poster1.png",
            899,
        ),
        entry(
            2,
            "Guitar Loop - Escape Stack",
            "Rock, Indie",
            153,
            "F# min",
            direct("https://cdn.pixabay.com/audio/2022/10/16/audio_12b6b7b7b8.mp3"),
            "Guitar",
            "AD Rapstar",
            date(2023, 5, 18),
            1740,
            "/poster/music_poster1.png",
            799,
        ),
        entry(
            3,
            "Muted Funk Riff",
            "Funk, Disco",
            112,
            "D min",
            direct("https://cdn.pixabay.com/audio/2022/10/16/audio_12b6b7b7b9.mp3"),
            "Guitar",
            "Emcee Subu",
            date(2023, 6, 9),
            980,
            "/poster/music_poster2.png",
            699,
        ),
        entry(
            4,
            "Piano Chill Melody",
            "Chill, Lo-fi",
            90,
            "C maj",
            direct("https://cdn.pixabay.com/audio/2022/10/16/audio_12b6b7b7c0.mp3"),
            "Piano",
            "KRSH",
            date(2023, 7, 1),
            3320,
            "/poster/music_poster2.png",
            999,
        ),
        entry(
            6,
            "Jazz Sax Groove",
            "Jazz",
            110,
            "Bb maj",
            direct("https://cdn.pixabay.com/audio/2022/10/16/audio_12b6b7b7c2.mp3"),
            "Saxophone",
            "Aun Shah",
            date(2023, 7, 22),
            1210,
            "/poster/music_poster3.png",
            1099,
        ),
        entry(
            9,
            "Pop Vocal Sample",
            "Pop",
            120,
            "E maj",
            direct("https://cdn.pixabay.com/audio/2022/10/16/audio_12b6b7b7c5.mp3"),
            "Vocals",
            "R_JXY",
            date(2023, 8, 14),
            2875,
            "/poster/music_poster3.png",
            1299,
        ),
        entry(
            10,
            "Ambient Pad",
            "Ambient",
            80,
            "G maj",
            direct("https://cdn.pixabay.com/audio/2022/10/16/audio_12b6b7b7c6.mp3"),
            "Synth",
            "KRSH",
            date(2023, 9, 3),
            860,
            "/poster/music_poster4.png",
            599,
        ),
        entry(
            11,
            "Rock Drum Loop",
            "Rock",
            110,
            "A min",
            direct("https://cdn.pixabay.com/audio/2022/10/16/audio_12b6b7b7c7.mp3"),
            "Drums",
            "Emcee Subu",
            date(2023, 9, 20),
            1530,
            "/poster/music_poster4.png",
            749,
        ),
        entry(
            16,
            "Travis Scott Type beat \"Take Over\"",
            "Hip Hop",
            120,
            "C min",
            relay("1sH-pGNGCd8V5AMXHUlWJEbPOaO_SNV5N"),
            "Beats",
            "R_JXY",
            date(2023, 10, 10),
            5000,
            "/poster/music_poster4.png",
            3499,
        ),
        entry(
            17,
            "TakeOver_Basic Hi-Hat",
            "Hip Hop",
            120,
            "C min",
            relay("1dom42J2cFe9JLVZ4anvtJ1-vPQMSOTOm"),
            "Beats",
            "R_JXY",
            date(2023, 10, 12),
            2210,
            "/poster/music_poster5.png",
            1499,
        ),
        entry(
            18,
            "TakeOver_BELL",
            "Hip Hop",
            120,
            "C min",
            relay("1rUylpep3yNk2hQAgXoyr3z1mRCU4XTV0"),
            "Beats",
            "R_JXY",
            date(2023, 10, 12),
            1905,
            "/poster/music_poster5.png",
            1499,
        ),
        entry(
            19,
            "TakeOver_Edge Kick",
            "Hip Hop",
            120,
            "C min",
            relay("18IVJtfd6lOZ1z39Ifri_y_RsiufBNqH-"),
            "Beats",
            "R_JXY",
            date(2023, 10, 15),
            1480,
            "/poster/music_poster5.png",
            1299,
        ),
    ]
}
