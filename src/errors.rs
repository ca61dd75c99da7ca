//! Typed errors for playlist generation.
//!
//! Uses `thiserror` for ergonomic error definitions and implements
//! `Serialize` so errors can cross an IPC/FFI boundary cleanly. The
//! `#[error]` strings double as the user-facing messages the UI renders.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while generating a mood playlist.
///
/// `InvalidMood` and `ProviderUnavailable` are reserved: no current path
/// constructs them, but UI layers must be able to render the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type")]
pub enum MoodError {
    /// The in-app catalog path was attempted without confirmed authorization
    #[error("Music service authorization failed. Please check your permissions.")]
    AuthorizationFailed,

    /// Transport, queue submission or playback start failed
    #[error("Network connection error. Please check your internet connection.")]
    Network,

    /// Every search strategy came back empty
    #[error("No music found for this mood. Try a different mood or search terms.")]
    NoResults,

    /// Malformed mood input
    #[error("Invalid mood selection. Please try again.")]
    InvalidMood,

    /// Provider outage
    #[error("Music service is currently unavailable. Please try again later.")]
    ProviderUnavailable,
}
