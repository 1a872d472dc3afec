pub mod assets;
pub mod backend;
pub mod error;
pub mod genres;
pub mod pages;
pub mod playback;
pub mod settings;
pub mod store;
pub mod suggest;

#[cfg(test)]
pub(crate) mod testing;

pub use assets::{resolve_asset_url, AssetResolver};
pub use backend::{FileBackend, KeyValueBackend, MemoryBackend, StoreError};
pub use error::DiscoveryError;
pub use genres::{all_genres, genre_labels, genre_name, genre_names, resolve_genre_id, LookupError};
pub use pages::{load_movie_page, load_movie_playback, load_tv_page, load_tv_playback, MoviePage, MoviePlayback, TvPage, TvPlayback};
pub use playback::SourceSelector;
pub use settings::{SettingsError, SettingsStore, UserSettings, VideoQuality};
pub use store::{Collection, WatchStateStore, RECENTLY_VIEWED_CAP};
pub use suggest::{filter_by_genre, movies_by_genre, movies_in_category, pick_random, suggest_movies, suggest_tv_shows, suggested_for, suggested_for_movie};
