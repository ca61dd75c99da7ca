//! Collaborator interfaces for external music capabilities.
//!
//! The engine consumes four capabilities, all specified here as traits:
//! catalog search, playback control, authorization, and app-link opening.
//! Implementations live with the platform embedding this crate; tests use
//! scripted mocks.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::MusicTrack;

/// Outcome of an authorization query or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationStatus {
    Authorized,
    NotDetermined,
    Denied,
    Restricted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
}

/// Track search against a provider catalog.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Search for tracks matching `query`, returning at most `limit` results.
    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<MusicTrack>>;
}

/// Queue-based playback control.
#[async_trait]
pub trait PlaybackControl: Send + Sync {
    /// Replace the playback queue with `tracks`.
    async fn set_queue(&self, tracks: Vec<MusicTrack>) -> Result<()>;
    async fn play(&self) -> Result<()>;
    async fn pause(&self) -> Result<()>;
    async fn skip_next(&self) -> Result<()>;
    async fn skip_previous(&self) -> Result<()>;
    /// The queue entry currently playing, if any.
    async fn current_entry(&self) -> Option<MusicTrack>;
    async fn status(&self) -> PlaybackStatus;
}

/// Authorization capability of the in-app provider.
#[async_trait]
pub trait MusicAuthorization: Send + Sync {
    async fn current_status(&self) -> AuthorizationStatus;
    /// Prompt the user for authorization. Suspends until resolved.
    async fn request(&self) -> AuthorizationStatus;
}

/// App-availability check and URL opening.
#[async_trait]
pub trait LinkOpener: Send + Sync {
    async fn can_open(&self, url: &Url) -> bool;
    async fn open(&self, url: &Url) -> Result<()>;
}
