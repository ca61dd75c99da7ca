use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A music service the engine can target. Exactly one is active at a time;
/// the selection is persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// In-app capable: catalog search and direct playback
    #[default]
    AppleMusic,
    /// Handoff only: deep link, no auto-open
    Spotify,
    /// Handoff only: deep link with auto-open when the app is installed
    YoutubeMusic,
}

impl ProviderKind {
    /// Whether generation for this provider plays in-app rather than
    /// handing off to an external app.
    pub fn plays_in_app(&self) -> bool {
        matches!(self, ProviderKind::AppleMusic)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::AppleMusic => write!(f, "Apple Music"),
            ProviderKind::Spotify => write!(f, "Spotify"),
            ProviderKind::YoutubeMusic => write!(f, "YouTube Music"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "").as_str() {
            "applemusic" => Ok(ProviderKind::AppleMusic),
            "spotify" => Ok(ProviderKind::Spotify),
            "youtubemusic" => Ok(ProviderKind::YoutubeMusic),
            _ => Err(format!(
                "Invalid provider: '{}'. Valid: apple music, spotify, youtube music",
                s
            )),
        }
    }
}

/// Grouping tag for moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Energetic,
    Relaxed,
    Emotional,
    Focused,
    Social,
    General,
    Melancholy,
    Chill,
    Romantic,
    Magical,
}

/// A named emotional/activity category with the search keywords used to
/// build catalog queries.
///
/// Identity is the stable `id` slug: equality and hashing consider only
/// `id`, so copies stored in history/favorites match their catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mood {
    pub id: String,
    pub emoji: String,
    /// Static display-asset key; empty when no dedicated artwork exists
    #[serde(default)]
    pub image_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Keywords/genres used to search the catalog
    pub seeds: Vec<String>,
    /// Energy hint in 0.0..=1.0
    pub energy: f64,
    pub category: MoodCategory,
    /// Popularity/trending score
    pub popularity: u8,
}

impl PartialEq for Mood {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Mood {}

impl Hash for Mood {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A normalized, provider-tagged URL representing the outcome of a
/// generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "url", rename_all = "camelCase")]
pub enum PlaylistLink {
    AppleMusic(Url),
    Spotify(Url),
    YoutubeMusic(Url),
}

impl PlaylistLink {
    pub fn url(&self) -> &Url {
        match self {
            PlaylistLink::AppleMusic(url)
            | PlaylistLink::Spotify(url)
            | PlaylistLink::YoutubeMusic(url) => url,
        }
    }

    pub fn provider(&self) -> ProviderKind {
        match self {
            PlaylistLink::AppleMusic(_) => ProviderKind::AppleMusic,
            PlaylistLink::Spotify(_) => ProviderKind::Spotify,
            PlaylistLink::YoutubeMusic(_) => ProviderKind::YoutubeMusic,
        }
    }
}

/// Size-templated artwork reference.
///
/// Catalog artwork comes back as a URL template with `{w}`/`{h}`
/// placeholders plus the maximum dimensions the template can render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRef {
    pub url_template: String,
    pub max_width: u32,
    pub max_height: u32,
}

impl ArtworkRef {
    pub fn new(url_template: impl Into<String>, max_width: u32, max_height: u32) -> Self {
        Self {
            url_template: url_template.into(),
            max_width,
            max_height,
        }
    }

    /// Resolve the template at a concrete size.
    ///
    /// Returns `None` for sizes above the template's maximum, for templates
    /// missing either placeholder, and for templates that don't render to a
    /// valid URL.
    pub fn url(&self, width: u32, height: u32) -> Option<Url> {
        if width > self.max_width || height > self.max_height {
            return None;
        }
        if !self.url_template.contains("{w}") || !self.url_template.contains("{h}") {
            return None;
        }
        let rendered = self
            .url_template
            .replace("{w}", &width.to_string())
            .replace("{h}", &height.to_string());
        Url::parse(&rendered).ok()
    }
}

/// A catalog track. Produced transiently per generation; only the
/// currently-playing snapshot outlives a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicTrack {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub artwork: Option<ArtworkRef>,
    pub duration_secs: f64,
    /// Energy hint in 0.0..=1.0
    pub energy: f64,
    pub genre: Option<String>,
    /// Title of the mood this track was generated for
    pub mood: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    Light,
    Dark,
    #[default]
    System,
}

/// User-tunable settings, persisted as one aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub preferred_provider: ProviderKind,
    pub auto_play: bool,
    pub notifications_enabled: bool,
    pub theme: AppTheme,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_provider: ProviderKind::AppleMusic,
            auto_play: true,
            notifications_enabled: true,
            theme: AppTheme::System,
        }
    }
}

/// Usage counters, persisted as one aggregate.
///
/// `most_used_provider` tracks the active selection at generation/switch
/// time, not generation success.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_playlists_generated: u64,
    pub favorite_mood: Option<Mood>,
    pub total_listening_time_secs: f64,
    pub most_used_provider: ProviderKind,
    pub last_used_at: Option<DateTime<Utc>>,
}
