//! Mood-to-playlist generation orchestrator.
//!
//! Owns all mutable generation state: the active provider, authorization
//! flag, rate-limit gate, recent/favorite mood lists and usage statistics.
//! Dispatches each accepted request to the path matching the active
//! provider and normalizes the outcome into a [`PlaylistLink`].
//!
//! The engine is a single logical actor: every mutation happens through
//! `&mut self`, at most one generation runs at a time, and a concurrent
//! request is dropped with a feedback signal rather than queued.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::seq::IndexedRandom;
use url::Url;

use crate::errors::MoodError;
use crate::models::{
    Mood, MoodCategory, MusicTrack, PlaylistLink, ProviderKind, Statistics, UserPreferences,
};
use crate::moods;
use crate::providers::{
    AuthorizationStatus, CatalogSearch, LinkOpener, MusicAuthorization, PlaybackControl,
    PlaybackStatus,
};
use crate::store::{self, KeyValueStore};

use super::{links, queue, search};

/// Minimum delay between accepted generation requests.
const GENERATION_COOLDOWN: Duration = Duration::from_secs(2);

/// Recent-mood history cap.
const RECENT_LIMIT: usize = 10;

/// Per-strategy catalog result cap.
const SEARCH_LIMIT: usize = 25;

// Storage keys; one JSON document per aggregate.
const KEY_PROVIDER: &str = "provider";
const KEY_PREFERENCES: &str = "preferences";
const KEY_STATISTICS: &str = "statistics";
const KEY_RECENT_MOODS: &str = "recent_moods";
const KEY_FAVORITE_MOODS: &str = "favorite_moods";

const SPOTIFY_READY_MESSAGE: &str = "Spotify playlist ready! Tap the music bar to open Spotify.";

/// Policy knobs for the generation guards. Defaults mirror the shipped
/// behavior.
#[derive(Debug, Clone)]
pub struct EnginePolicy {
    pub cooldown: Duration,
    pub recent_limit: usize,
    pub search_limit: usize,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            cooldown: GENERATION_COOLDOWN,
            recent_limit: RECENT_LIMIT,
            search_limit: SEARCH_LIMIT,
        }
    }
}

/// Immediate feedback for a [`MoodEngine::generate`] call.
///
/// Rejections carry no further state change; the outcome of an accepted
/// request is observed through [`MoodEngine::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Accepted,
    /// A generation is already in flight
    Busy,
    /// The cooldown window since the previous request hasn't elapsed
    Cooldown,
}

/// Observable generation state, mutated only by the engine.
#[derive(Debug, Clone, Default)]
pub struct GenerationState {
    /// True strictly between generation start and completion
    pub is_loading: bool,
    pub current_mood: Option<Mood>,
    /// Last successful result; failures leave it untouched
    pub last_generated_link: Option<PlaylistLink>,
    /// Human-readable failure cause, or a provider status note
    pub error_message: Option<String>,
    /// Start of the most recently accepted generation
    pub last_generated_at: Option<Instant>,
    /// Lead-track artwork from the most recent in-app generation
    pub current_artwork_url: Option<Url>,
}

/// Generation orchestrator. Explicitly constructed with its collaborators;
/// holds no global state.
pub struct MoodEngine {
    catalog: Arc<dyn CatalogSearch>,
    player: Arc<dyn PlaybackControl>,
    auth: Arc<dyn MusicAuthorization>,
    opener: Arc<dyn LinkOpener>,
    store: Arc<dyn KeyValueStore>,
    policy: EnginePolicy,

    provider: ProviderKind,
    authorized: bool,
    state: GenerationState,
    preferences: UserPreferences,
    statistics: Statistics,
    recent_moods: Vec<Mood>,
    favorite_moods: Vec<Mood>,
}

impl MoodEngine {
    pub fn new(
        catalog: Arc<dyn CatalogSearch>,
        player: Arc<dyn PlaybackControl>,
        auth: Arc<dyn MusicAuthorization>,
        opener: Arc<dyn LinkOpener>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self::with_policy(catalog, player, auth, opener, store, EnginePolicy::default())
    }

    /// Construct with explicit policy. Persisted aggregates are loaded up
    /// front; absent or corrupt blobs fall back to defaults.
    pub fn with_policy(
        catalog: Arc<dyn CatalogSearch>,
        player: Arc<dyn PlaybackControl>,
        auth: Arc<dyn MusicAuthorization>,
        opener: Arc<dyn LinkOpener>,
        store: Arc<dyn KeyValueStore>,
        policy: EnginePolicy,
    ) -> Self {
        let provider = store::load_json(store.as_ref(), KEY_PROVIDER).unwrap_or_default();
        let preferences = store::load_json(store.as_ref(), KEY_PREFERENCES).unwrap_or_default();
        let statistics = store::load_json(store.as_ref(), KEY_STATISTICS).unwrap_or_default();
        let recent_moods = store::load_json(store.as_ref(), KEY_RECENT_MOODS).unwrap_or_default();
        let favorite_moods =
            store::load_json(store.as_ref(), KEY_FAVORITE_MOODS).unwrap_or_default();

        Self {
            catalog,
            player,
            auth,
            opener,
            store,
            policy,
            provider,
            authorized: false,
            state: GenerationState::default(),
            preferences,
            statistics,
            recent_moods,
            favorite_moods,
        }
    }

    // === Observable state ===

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub fn recent_moods(&self) -> &[Mood] {
        &self.recent_moods
    }

    pub fn favorite_moods(&self) -> &[Mood] {
        &self.favorite_moods
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    // === Generation ===

    /// Generate and play (in-app provider) or build a handoff link.
    ///
    /// Rejects outright while a generation is in flight or inside the
    /// cooldown window; rejected calls mutate nothing. On acceptance the
    /// mood is recorded in recent history and statistics before dispatch,
    /// and `is_loading` is cleared on every exit path.
    pub async fn generate(&mut self, mood: &Mood) -> Feedback {
        if self.state.is_loading {
            log::warn!("Generation already in flight; dropping request");
            return Feedback::Busy;
        }
        if let Some(last) = self.state.last_generated_at {
            if last.elapsed() < self.policy.cooldown {
                log::warn!("Generation request inside cooldown window; dropping");
                return Feedback::Cooldown;
            }
        }

        self.state.current_mood = Some(mood.clone());
        self.state.error_message = None;
        self.state.is_loading = true;
        self.state.last_generated_at = Some(Instant::now());

        self.push_recent(mood);

        self.statistics.total_playlists_generated += 1;
        self.statistics.last_used_at = Some(Utc::now());
        self.statistics.most_used_provider = self.provider;
        store::save_json(self.store.as_ref(), KEY_STATISTICS, &self.statistics);

        let outcome = match self.provider {
            ProviderKind::AppleMusic => self.generate_apple_music(mood).await,
            ProviderKind::Spotify => self.generate_spotify(mood).await,
            ProviderKind::YoutubeMusic => self.generate_youtube_music(mood).await,
        };

        if let Err(err) = outcome {
            log::error!("Generation failed for mood '{}': {}", mood.title, err);
            self.state.error_message = Some(err.to_string());
        }
        self.state.is_loading = false;

        Feedback::Accepted
    }

    /// In-app path: catalog search, shuffle, queue and play. The stored
    /// link is a shareable catalog-search URL for the seed query.
    async fn generate_apple_music(&mut self, mood: &Mood) -> Result<(), MoodError> {
        if !self.authorized {
            return Err(MoodError::AuthorizationFailed);
        }

        let tracks =
            search::find_tracks(self.catalog.as_ref(), mood, self.policy.search_limit).await?;
        let played = queue::queue_and_play(self.player.as_ref(), tracks).await?;
        self.state.current_artwork_url = played.lead_artwork_url;

        let share = links::apple_music_share_url(mood, &search::seed_query(mood));
        self.state.last_generated_link = Some(PlaylistLink::AppleMusic(share));
        log::info!("Started playback for mood: {}", mood.title);
        Ok(())
    }

    /// Handoff path without auto-open: the link is stored for the user to
    /// open manually. In-app Spotify playback would need the SDK and a
    /// token exchange, so only the search handoff is offered.
    async fn generate_spotify(&mut self, mood: &Mood) -> Result<(), MoodError> {
        let url = links::spotify_handoff_url(mood);
        self.state.last_generated_link = Some(PlaylistLink::Spotify(url));
        self.state.error_message = Some(SPOTIFY_READY_MESSAGE.to_string());
        log::info!("Generated Spotify handoff link for mood: {}", mood.title);
        Ok(())
    }

    /// Handoff path with auto-open: opens the app when available; an
    /// unavailable or failing opener downgrades to a logged warning and
    /// the link still stands.
    async fn generate_youtube_music(&mut self, mood: &Mood) -> Result<(), MoodError> {
        let url = links::youtube_music_url(mood);
        self.state.last_generated_link = Some(PlaylistLink::YoutubeMusic(url.clone()));

        if self.opener.can_open(&url).await {
            if let Err(e) = self.opener.open(&url).await {
                log::warn!("Failed to open YouTube Music: {}", e);
            }
        } else {
            log::warn!("YouTube Music app unavailable; link kept for manual open");
        }
        log::info!("Generated YouTube Music handoff link for mood: {}", mood.title);
        Ok(())
    }

    fn push_recent(&mut self, mood: &Mood) {
        self.recent_moods.retain(|m| m.id != mood.id);
        self.recent_moods.insert(0, mood.clone());
        self.recent_moods.truncate(self.policy.recent_limit);
        store::save_json(self.store.as_ref(), KEY_RECENT_MOODS, &self.recent_moods);
    }

    // === Provider selection ===

    /// Switch the active provider. The selection is persisted, and the
    /// most-used-provider statistic follows the active selection rather
    /// than generation success.
    pub fn set_provider(&mut self, provider: ProviderKind) {
        self.provider = provider;
        store::save_json(self.store.as_ref(), KEY_PROVIDER, &provider);

        self.statistics.most_used_provider = provider;
        store::save_json(self.store.as_ref(), KEY_STATISTICS, &self.statistics);
    }

    // === Authorization ===

    /// Query the in-app provider's authorization capability and cache the
    /// result. A NotDetermined status suspends on the user prompt.
    pub async fn refresh_authorization_status(&mut self) {
        self.authorized = match self.auth.current_status().await {
            AuthorizationStatus::Authorized => true,
            AuthorizationStatus::NotDetermined => {
                let status = self.auth.request().await;
                status == AuthorizationStatus::Authorized
            }
            _ => false,
        };
        log::debug!("Authorization refreshed: authorized={}", self.authorized);
    }

    pub async fn request_authorization(&mut self) {
        self.refresh_authorization_status().await;
    }

    // === Favorites ===

    /// Symmetric add/remove by mood id; persists immediately.
    pub fn toggle_favorite(&mut self, mood: &Mood) {
        if let Some(idx) = self.favorite_moods.iter().position(|m| m.id == mood.id) {
            self.favorite_moods.remove(idx);
        } else {
            self.favorite_moods.push(mood.clone());
        }
        store::save_json(
            self.store.as_ref(),
            KEY_FAVORITE_MOODS,
            &self.favorite_moods,
        );
    }

    pub fn is_favorite(&self, mood: &Mood) -> bool {
        self.favorite_moods.iter().any(|m| m.id == mood.id)
    }

    // === Preferences ===

    pub fn set_preferences(&mut self, preferences: UserPreferences) {
        self.preferences = preferences;
        store::save_json(self.store.as_ref(), KEY_PREFERENCES, &self.preferences);
    }

    // === Catalog queries (pure, no side effects) ===

    pub fn moods_by_category(&self, category: MoodCategory) -> Vec<Mood> {
        moods::by_category(category)
    }

    /// Popular moods (popularity >= 4).
    pub fn popular_moods(&self) -> Vec<Mood> {
        moods::popular()
    }

    pub fn moods_by_energy(&self, min: f64, max: f64) -> Vec<Mood> {
        moods::by_energy(min, max)
    }

    /// A uniformly random mood not in recent history, falling back to the
    /// whole catalog once every mood has been recently seen.
    pub fn random_mood(&self) -> Option<Mood> {
        let all = moods::all();
        let fresh: Vec<&Mood> = all
            .iter()
            .filter(|m| !self.recent_moods.iter().any(|r| r.id == m.id))
            .collect();

        let mut rng = rand::rng();
        fresh
            .choose(&mut rng)
            .copied()
            .or_else(|| all.choose(&mut rng))
            .cloned()
    }

    // === Playback pass-throughs ===

    pub async fn skip_to_next(&self) {
        match self.player.skip_next().await {
            Ok(()) => log::info!("Skipped to next track"),
            Err(e) => log::error!("Failed to skip to next track: {}", e),
        }
    }

    pub async fn skip_to_previous(&self) {
        match self.player.skip_previous().await {
            Ok(()) => log::info!("Skipped to previous track"),
            Err(e) => log::error!("Failed to skip to previous track: {}", e),
        }
    }

    pub async fn is_playing(&self) -> bool {
        self.player.status().await == PlaybackStatus::Playing
    }

    /// Snapshot of the currently playing entry, with energy and mood
    /// backfilled from the current mood.
    pub async fn current_playing_track(&self) -> Option<MusicTrack> {
        let entry = self.player.current_entry().await?;
        let current = self.state.current_mood.as_ref();
        Some(MusicTrack {
            energy: current.map(|m| m.energy).unwrap_or(0.5),
            mood: current.map(|m| m.title.clone()),
            ..entry
        })
    }

    pub fn current_artwork_url(&self) -> Option<&Url> {
        self.state.current_artwork_url.as_ref()
    }
}
