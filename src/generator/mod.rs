//! Mood-to-playlist generation.
//!
//! Turns a selected mood into either an in-app playback queue (catalog
//! search + shuffle + play) or a deep link handed off to an external
//! provider app, normalized into a single [`PlaylistLink`] result.
//!
//! [`PlaylistLink`]: crate::models::PlaylistLink

pub mod engine;
pub mod links;
pub mod queue;
pub mod search;

pub use engine::{EnginePolicy, Feedback, GenerationState, MoodEngine};
