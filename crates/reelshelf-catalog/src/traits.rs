use async_trait::async_trait;
use crate::error::Result;
use reelshelf_models::{ImageAsset, Movie, Page, SearchResult, StreamSource, TvShow, Video};

/// One method per logical catalog query.
///
/// Implementations issue exactly one upstream request per call: no retry, no
/// caching, no multi-page aggregation.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn trending_movies(&self, page: u32) -> Result<Page<Movie>>;
    async fn top_rated_movies(&self, page: u32) -> Result<Page<Movie>>;
    async fn trending_tv(&self, page: u32) -> Result<Page<TvShow>>;
    async fn search(&self, query: &str, page: u32) -> Result<Page<SearchResult>>;

    async fn movie_details(&self, id: u64) -> Result<Movie>;
    async fn tv_details(&self, id: u64) -> Result<TvShow>;

    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>>;
    async fn tv_videos(&self, id: u64) -> Result<Vec<Video>>;
    async fn movie_images(&self, id: u64) -> Result<Vec<ImageAsset>>;
    async fn tv_images(&self, id: u64) -> Result<Vec<ImageAsset>>;

    // Playback links
    async fn movie_streams(&self, id: u64) -> Result<Vec<StreamSource>>;
    async fn tv_streams(&self, id: u64, season: u32, episode: u32) -> Result<Vec<StreamSource>>;
}
