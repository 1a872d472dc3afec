use crate::credits::{Company, Credits};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Parse the kind names used by upstream payloads and the CLI.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" | "film" => Some(MediaKind::Movie),
            "tv" | "show" | "shows" | "tvseries" | "series" => Some(MediaKind::Tv),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a catalog item.
///
/// Movies and TV shows live in separate id spaces upstream, so the numeric id
/// alone is never enough to compare two items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaKey {
    pub kind: MediaKind,
    pub id: u64,
}

impl MediaKey {
    pub fn new(kind: MediaKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn movie(id: u64) -> Self {
        Self::new(MediaKind::Movie, id)
    }

    pub fn tv(id: u64) -> Self {
        Self::new(MediaKind::Tv, id)
    }
}

impl fmt::Display for MediaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "crate::date::lenient")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f32,
    /// Present on list payloads (trending, top rated).
    #[serde(default)]
    pub genre_ids: BTreeSet<u32>,
    /// Present on detail payloads.
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub production_companies: Vec<Company>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Season {
    pub id: u64,
    pub name: String,
    pub season_number: u32,
    #[serde(default)]
    pub episode_count: u32,
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "crate::date::lenient")]
    pub air_date: Option<NaiveDate>,
    #[serde(default)]
    pub overview: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TvShow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "crate::date::lenient")]
    pub first_air_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub genre_ids: BTreeSet<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Ordered by season number as delivered upstream (specials first).
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    /// Typical episode lengths in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub created_by: Vec<String>,
    #[serde(default)]
    pub networks: Vec<Company>,
}

impl TvShow {
    pub fn season(&self, season_number: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.season_number == season_number)
    }
}

/// A movie or a TV show, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MediaItem {
    Movie(Movie),
    Tv(TvShow),
}

impl MediaItem {
    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.kind(), self.id())
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Movie(_) => MediaKind::Movie,
            MediaItem::Tv(_) => MediaKind::Tv,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            MediaItem::Movie(m) => m.id,
            MediaItem::Tv(t) => t.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MediaItem::Movie(m) => &m.title,
            MediaItem::Tv(t) => &t.name,
        }
    }

    pub fn overview(&self) -> &str {
        match self {
            MediaItem::Movie(m) => &m.overview,
            MediaItem::Tv(t) => &t.overview,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => m.poster_path.as_deref(),
            MediaItem::Tv(t) => t.poster_path.as_deref(),
        }
    }

    pub fn backdrop_path(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => m.backdrop_path.as_deref(),
            MediaItem::Tv(t) => t.backdrop_path.as_deref(),
        }
    }

    /// Release date for movies, first air date for shows.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            MediaItem::Movie(m) => m.release_date,
            MediaItem::Tv(t) => t.first_air_date,
        }
    }

    pub fn year(&self) -> Option<i32> {
        crate::date::year_of(self.date())
    }

    pub fn vote_average(&self) -> f32 {
        match self {
            MediaItem::Movie(m) => m.vote_average,
            MediaItem::Tv(t) => t.vote_average,
        }
    }

    /// Genre ids of the item.
    ///
    /// Detail payloads carry `genres` (id + name) while list payloads carry raw
    /// `genre_ids`; the named list wins when it is present.
    pub fn genre_ids(&self) -> BTreeSet<u32> {
        let (ids, genres) = match self {
            MediaItem::Movie(m) => (&m.genre_ids, &m.genres),
            MediaItem::Tv(t) => (&t.genre_ids, &t.genres),
        };
        if genres.is_empty() {
            ids.clone()
        } else {
            genres.iter().map(|g| g.id).collect()
        }
    }

    /// Named genres from a detail payload; empty for list payloads.
    pub fn genres(&self) -> &[Genre] {
        match self {
            MediaItem::Movie(m) => &m.genres,
            MediaItem::Tv(t) => &t.genres,
        }
    }

    pub fn has_genre(&self, genre_id: u32) -> bool {
        self.genre_ids().contains(&genre_id)
    }
}

impl From<Movie> for MediaItem {
    fn from(movie: Movie) -> Self {
        MediaItem::Movie(movie)
    }
}

impl From<TvShow> for MediaItem {
    fn from(show: TvShow) -> Self {
        MediaItem::Tv(show)
    }
}
