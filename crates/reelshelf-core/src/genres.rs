use reelshelf_models::MediaItem;
use thiserror::Error;

/// Movie genres known to the catalog, keyed by upstream genre id.
pub const MOVIE_GENRES: [(u32, &str); 19] = [
    (28, "action"),
    (12, "adventure"),
    (16, "animation"),
    (35, "comedy"),
    (80, "crime"),
    (99, "documentary"),
    (18, "drama"),
    (10751, "family"),
    (14, "fantasy"),
    (36, "history"),
    (27, "horror"),
    (10402, "music"),
    (9648, "mystery"),
    (10749, "romance"),
    (878, "science fiction"),
    (10770, "tv movie"),
    (53, "thriller"),
    (10752, "war"),
    (37, "western"),
];

/// TV-only genre ids. TV shows share the remaining ids with [`MOVIE_GENRES`].
///
/// Display only: categories resolve against the movie table.
pub const TV_GENRES: [(u32, &str); 8] = [
    (10759, "action & adventure"),
    (10762, "kids"),
    (10763, "news"),
    (10764, "reality"),
    (10765, "sci-fi & fantasy"),
    (10766, "soap"),
    (10767, "talk"),
    (10768, "war & politics"),
];

pub const UNKNOWN_GENRE: &str = "Unknown";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid category: {0}")]
    UnknownGenre(String),
}

/// Lower-case, URL-decoded, with hyphens/underscores as single spaces.
///
/// `Science-Fiction`, `science%20fiction` and `science fiction` all
/// normalise to the same name.
pub fn normalize_genre_name(raw: &str) -> String {
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    decoded
        .to_lowercase()
        .replace(['-', '_', '+'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn resolve_genre_id(name: &str) -> Result<u32, LookupError> {
    let normalized = normalize_genre_name(name);
    MOVIE_GENRES
        .iter()
        .find(|(_, genre)| *genre == normalized)
        .map(|(id, _)| *id)
        .ok_or_else(|| LookupError::UnknownGenre(name.to_string()))
}

pub fn genre_name(id: u32) -> Option<&'static str> {
    MOVIE_GENRES
        .iter()
        .chain(TV_GENRES.iter())
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

pub fn genre_names<I: IntoIterator<Item = u32>>(ids: I) -> Vec<&'static str> {
    ids.into_iter().map(|id| genre_name(id).unwrap_or(UNKNOWN_GENRE)).collect()
}

/// Display names of an item's genres.
///
/// Names delivered with a detail payload win; otherwise ids are looked up in
/// the movie and TV tables.
pub fn genre_labels(item: &MediaItem) -> Vec<String> {
    let named: Vec<String> = item
        .genres()
        .iter()
        .filter(|g| !g.name.trim().is_empty())
        .map(|g| g.name.clone())
        .collect();
    if !named.is_empty() {
        return named;
    }
    genre_names(item.genre_ids()).into_iter().map(str::to_string).collect()
}

/// URL/CLI form of a genre name (`science fiction` -> `science-fiction`).
pub fn genre_slug(name: &str) -> String {
    name.replace(' ', "-")
}

pub fn all_genres() -> impl Iterator<Item = (u32, &'static str)> {
    MOVIE_GENRES.iter().copied()
}
