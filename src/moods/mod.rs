//! Static mood catalog.
//!
//! A fixed, read-only collection of moods with the search seeds used to
//! build catalog queries. Built once and freely shared for reads.

use std::sync::OnceLock;

use crate::models::{Mood, MoodCategory};

static CATALOG: OnceLock<Vec<Mood>> = OnceLock::new();

fn mood(
    emoji: &str,
    image_name: &str,
    title: &str,
    description: &str,
    seeds: &[&str],
    energy: f64,
    category: MoodCategory,
    popularity: u8,
) -> Mood {
    Mood {
        id: title.to_lowercase().replace(' ', "-"),
        emoji: emoji.to_string(),
        image_name: image_name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        seeds: seeds.iter().map(|s| s.to_string()).collect(),
        energy,
        category,
        popularity,
    }
}

fn build_catalog() -> Vec<Mood> {
    use MoodCategory::*;

    vec![
        mood(
            "😀",
            "happy",
            "Happy",
            "Feeling joyful and upbeat",
            &["feel good", "pop uplifting", "good vibes", "summer pop", "dance pop"],
            0.9,
            Energetic,
            5,
        ),
        mood(
            "🔥",
            "hype",
            "Hype",
            "Ready to get pumped up",
            &["electro house", "trap", "workout", "edm", "bass", "dubstep"],
            1.0,
            Energetic,
            4,
        ),
        mood(
            "🏃",
            "run",
            "Run",
            "Perfect for workouts and exercise",
            &["running", "pop workout", "dance pop", "electronic", "motivational"],
            0.8,
            Energetic,
            3,
        ),
        mood(
            "😌",
            "chill",
            "Chill",
            "Time to relax and unwind",
            &["lofi", "chillhop", "ambient pop", "downtempo", "chill beats"],
            0.3,
            Relaxed,
            5,
        ),
        mood(
            "☀️",
            "sunny",
            "Sunny",
            "Bright and cheerful vibes",
            &["tropical house", "sunny pop", "bossa nova", "beach vibes", "summer"],
            0.6,
            Relaxed,
            4,
        ),
        mood(
            "💔",
            "heartbreak",
            "Heartbreak",
            "Processing emotions and healing",
            &["sad indie", "piano ballad", "dreampop", "emotional", "healing"],
            0.2,
            Emotional,
            3,
        ),
        mood(
            "🌧️",
            "moody",
            "Moody",
            "Deep and introspective",
            &["alt r&b", "dark pop", "trip hop", "atmospheric", "moody"],
            0.4,
            Emotional,
            2,
        ),
        mood(
            "🧠",
            "focus",
            "Focus",
            "Concentration and productivity",
            &["focus", "instrumental", "classical minimal", "study", "productivity"],
            0.2,
            Focused,
            4,
        ),
        mood(
            "🕺",
            "throwback",
            "Throwback",
            "Nostalgic and fun memories",
            &["80s pop", "90s r&b", "classic rock", "retro", "nostalgic"],
            0.7,
            Social,
            4,
        ),
        mood(
            "✨",
            "magical",
            "Magical",
            "Mystical and enchanting vibes",
            &["ethereal", "ambient", "cinematic", "magical", "dreamy"],
            0.5,
            Relaxed,
            3,
        ),
        mood(
            "🚀",
            "adventure",
            "Adventure",
            "Ready for exploration and discovery",
            &["epic", "soundtrack", "adventure", "cinematic", "inspiring"],
            0.8,
            Energetic,
            3,
        ),
        mood(
            "🌙",
            "night",
            "Night",
            "Perfect for evening vibes",
            &["night", "evening", "smooth", "jazz", "ambient"],
            0.4,
            Relaxed,
            3,
        ),
        mood(
            "🎭",
            "dramatic",
            "Dramatic",
            "Intense and theatrical emotions",
            &["dramatic", "orchestral", "epic", "cinematic", "intense"],
            0.7,
            Emotional,
            2,
        ),
    ]
}

/// The full catalog, built on first access.
pub fn all() -> &'static [Mood] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Look up a catalog mood by its id slug.
pub fn by_id(id: &str) -> Option<&'static Mood> {
    all().iter().find(|m| m.id == id)
}

/// Moods in a category.
pub fn by_category(category: MoodCategory) -> Vec<Mood> {
    all().iter().filter(|m| m.category == category).cloned().collect()
}

/// Popular moods (popularity >= 4).
pub fn popular() -> Vec<Mood> {
    all().iter().filter(|m| m.popularity >= 4).cloned().collect()
}

/// Moods whose energy falls inside `min..=max`.
pub fn by_energy(min: f64, max: f64) -> Vec<Mood> {
    all()
        .iter()
        .filter(|m| m.energy >= min && m.energy <= max)
        .cloned()
        .collect()
}
