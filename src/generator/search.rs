//! Escalating catalog search for mood playlists.
//!
//! Three strategies of decreasing specificity run strictly in order,
//! stopping at the first that yields any tracks. Individual strategy
//! failures are logged and swallowed; only exhaustion of all three is a
//! hard failure.

use crate::errors::MoodError;
use crate::models::{Mood, MoodCategory, MusicTrack};
use crate::providers::CatalogSearch;

/// Primary query: all mood seeds joined into one disjunction.
pub(crate) fn seed_query(mood: &Mood) -> String {
    mood.seeds.join(" OR ")
}

/// Broad genre fallback for moods whose seeds match nothing.
pub(crate) fn broad_genre_query(mood: &Mood) -> &'static str {
    match mood.category {
        MoodCategory::Energetic => {
            if mood.energy > 0.8 {
                "upbeat pop dance"
            } else {
                "pop rock"
            }
        }
        MoodCategory::Relaxed | MoodCategory::Chill => "chill indie ambient",
        MoodCategory::Emotional | MoodCategory::Melancholy => "indie ballad emotional",
        MoodCategory::Focused => "instrumental focus classical",
        MoodCategory::Social => "party pop dance",
        _ => "popular music",
    }
}

/// Run the strategies in order against `catalog`, returning the first
/// non-empty result set (capped at `limit`).
pub(crate) async fn find_tracks(
    catalog: &dyn CatalogSearch,
    mood: &Mood,
    limit: usize,
) -> Result<Vec<MusicTrack>, MoodError> {
    let mut queries: Vec<(&str, String)> = Vec::with_capacity(3);

    let primary = seed_query(mood);
    if !primary.is_empty() {
        queries.push(("seed", primary));
    }
    queries.push(("fallback", format!("{} music", mood.title)));
    queries.push(("broad genre", broad_genre_query(mood).to_string()));

    for (label, query) in &queries {
        log::info!("Trying {} search: {}", label, query);
        match catalog.search_tracks(query, limit).await {
            Ok(mut tracks) if !tracks.is_empty() => {
                tracks.truncate(limit);
                log::info!("Found {} tracks with {} search", tracks.len(), label);
                return Ok(tracks);
            }
            Ok(_) => log::info!("No tracks from {} search", label),
            Err(e) => log::warn!("{} search failed: {}", label, e),
        }
    }

    log::error!("All search strategies exhausted for mood: {}", mood.title);
    Err(MoodError::NoResults)
}
