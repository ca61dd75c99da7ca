//! moodtune: mood-driven music discovery.
//!
//! Users pick a mood; the engine searches a music catalog and starts
//! playback in-app, or hands off to an external provider through a deep
//! link. Platform capabilities (catalog search, playback, authorization,
//! URL opening, key-value persistence) are injected as traits, so the
//! engine stays testable outside any UI lifecycle.

pub mod errors;
pub mod generator;
pub mod models;
pub mod moods;
pub mod providers;
pub mod store;

pub use errors::MoodError;
pub use generator::{EnginePolicy, Feedback, GenerationState, MoodEngine};
pub use models::{Mood, MoodCategory, MusicTrack, PlaylistLink, ProviderKind};
