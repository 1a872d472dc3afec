pub mod credits;
pub mod date;
pub mod media;
pub mod page;
pub mod search;
pub mod stream;
pub mod video;
pub mod watch_state;

pub use credits::{CastMember, Company, Credits, CrewMember};
pub use media::{Genre, MediaItem, MediaKey, MediaKind, Movie, Season, TvShow};
pub use page::Page;
pub use search::SearchResult;
pub use stream::StreamSource;
pub use video::{ImageAsset, Video};
pub use watch_state::WatchStateEntry;
