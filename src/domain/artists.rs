//! The studio's artist roster.
//!
//! Static marketing content served by `GET /api/artists`.

use serde::Serialize;
use std::sync::LazyLock;

/// One artist on the roster.
#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    pub name: String,
    pub genre: String,
    pub description: String,
    pub achievement: String,
    pub quote: String,
}

static ROSTER: LazyLock<Vec<Artist>> = LazyLock::new(|| {
    let artist = |name: &str, genre: &str, description: &str, achievement: &str, quote: &str| {
        Artist {
            name: name.to_string(),
            genre: genre.to_string(),
            description: description.to_string(),
            achievement: achievement.to_string(),
            quote: quote.to_string(),
        }
    };

    vec![
        artist(
            "AD Rapstar",
            "Hip-hop, Pop",
            "A visionary artist and Grammy-nominated producer blending ethereal electronic textures with raw organic sounds.",
            "500M+ Streams",
            "SoundForge transformed my artistic vision into sonic reality.",
        ),
        artist(
            "R Jxy",
            "Hip-hop, Pop",
            "Versatile artist blending catchy hooks with dynamic lyrical flow and high-energy performances.",
            "50M+ Streams",
            "Recording at SoundForge was a game-changer. They captured our energy perfectly.",
        ),
        artist(
            "Aun Shah",
            "Hip-hop, Pop",
            "Dynamic performer known for sharp lyrical delivery, infectious pop melodies, and stage charisma.",
            "Multi-Platinum Artist",
            "The vocal booth at SoundForge brings out the best in every performance.",
        ),
        artist(
            "KRSH",
            "Hip-hop",
            "Innovative duo known for experimental beats, gritty flows, and pushing the boundaries of underground sound.",
            "Spotify Editorial",
            "SoundForge understood our retro-futuristic vision and helped us bring it to life.",
        ),
        artist(
            "Emcee Subu",
            "Hip-hop",
            "Critically acclaimed lyricist celebrated for powerful storytelling and thought-provoking verses.",
            "Emmy Winner",
            "The orchestral recording capabilities at SoundForge are world-class.",
        ),
    ]
});

/// All artists, in roster order.
pub fn roster() -> &'static [Artist] {
    &ROSTER
}
