//! Queue assembly and playback kick-off for the in-app provider.

use rand::seq::SliceRandom;
use url::Url;

use crate::errors::MoodError;
use crate::models::{ArtworkRef, MusicTrack};
use crate::providers::PlaybackControl;

/// Artwork sizes tried for the lead track, preferred first.
const ARTWORK_SIZES: [(u32, u32); 4] = [(300, 300), (512, 512), (200, 200), (100, 100)];

#[derive(Debug)]
pub(crate) struct QueuedPlayback {
    /// Display artwork for the lead track; `None` means the UI shows a
    /// placeholder, never a failure.
    pub lead_artwork_url: Option<Url>,
}

/// Walk the size ladder and take the first reference that resolves.
pub(crate) fn resolve_artwork(artwork: Option<&ArtworkRef>) -> Option<Url> {
    let artwork = artwork?;
    ARTWORK_SIZES.iter().find_map(|&(w, h)| artwork.url(w, h))
}

/// Shuffle the candidates, hand the whole set to the player and start
/// playback. The first post-shuffle track is the lead track whose artwork
/// is surfaced for display.
pub(crate) async fn queue_and_play(
    player: &dyn PlaybackControl,
    mut tracks: Vec<MusicTrack>,
) -> Result<QueuedPlayback, MoodError> {
    tracks.shuffle(&mut rand::rng());

    let lead_artwork_url = tracks
        .first()
        .and_then(|lead| resolve_artwork(lead.artwork.as_ref()));
    if lead_artwork_url.is_none() {
        log::debug!("No artwork resolved for lead track");
    }

    if let Err(e) = player.set_queue(tracks).await {
        log::error!("Queue submission failed: {}", e);
        return Err(MoodError::Network);
    }
    if let Err(e) = player.play().await {
        log::error!("Playback start failed: {}", e);
        return Err(MoodError::Network);
    }

    Ok(QueuedPlayback { lead_artwork_url })
}
