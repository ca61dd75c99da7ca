//! Deterministic link construction for handoff providers.
//!
//! Pure string work, no network and no authorization. Construction falls
//! back from the app deep link to a web search and finally the provider
//! home page, so the caller always receives a usable URL.

use url::Url;
use urlencoding::encode;

use crate::models::Mood;

const SPOTIFY_HOME: &str = "https://open.spotify.com";
const YOUTUBE_MUSIC_HOME: &str = "https://music.youtube.com";
const APPLE_MUSIC_HOME: &str = "https://music.apple.com";

/// Seeds plus title plus a provider-appropriate trailing keyword, joined
/// by single spaces.
fn handoff_query(mood: &Mood, trailing: &str) -> String {
    let mut parts: Vec<&str> = mood.seeds.iter().map(String::as_str).collect();
    parts.push(&mood.title);
    parts.push(trailing);
    parts.join(" ")
}

fn home(url: &str) -> Url {
    Url::parse(url).expect("provider home URL is valid")
}

/// Spotify handoff via search deep link; no SDK token needed.
pub fn spotify_handoff_url(mood: &Mood) -> Url {
    let encoded = encode(&handoff_query(mood, "playlist")).into_owned();
    Url::parse(&format!("spotify://search/{}", encoded))
        .or_else(|_| Url::parse(&format!("{}/search/{}", SPOTIFY_HOME, encoded)))
        .unwrap_or_else(|_| home(SPOTIFY_HOME))
}

/// YouTube Music handoff via search deep link.
pub fn youtube_music_url(mood: &Mood) -> Url {
    let encoded = encode(&handoff_query(mood, "music")).into_owned();
    Url::parse(&format!("youtubemusic://search/{}", encoded))
        .or_else(|_| Url::parse(&format!("{}/search?q={}", YOUTUBE_MUSIC_HOME, encoded)))
        .unwrap_or_else(|_| home(YOUTUBE_MUSIC_HOME))
}

/// Shareable catalog-search URL for a successful in-app generation.
/// `query` is the strategy-1 seed query; an empty query falls back to the
/// mood title.
pub fn apple_music_share_url(mood: &Mood, query: &str) -> Url {
    let term = if query.is_empty() { &mood.title } else { query };
    Url::parse(&format!("{}/search?term={}", APPLE_MUSIC_HOME, encode(term)))
        .unwrap_or_else(|_| home(APPLE_MUSIC_HOME))
}
