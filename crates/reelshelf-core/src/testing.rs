use async_trait::async_trait;
use reelshelf_catalog::{Catalog, CatalogError, RequestId, Result};
use reelshelf_models::{ImageAsset, Movie, Page, SearchResult, StreamSource, TvShow, Video};
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory [`Catalog`] for exercising the core flows.
#[derive(Default)]
pub struct FakeCatalog {
    pub trending_movies: Vec<Movie>,
    pub top_rated_movies: Vec<Movie>,
    pub trending_tv: Vec<TvShow>,
    pub search_results: Vec<SearchResult>,
    pub movies: Vec<Movie>,
    pub shows: Vec<TvShow>,
    pub videos: Vec<Video>,
    pub backdrops: Vec<ImageAsset>,
    pub streams: Vec<StreamSource>,
    /// Requests that answer with a schema error
    pub failing: Vec<RequestId>,
    pub(crate) calls: AtomicUsize,
}

pub fn movie(id: u64, genre_ids: &[u32]) -> Movie {
    Movie {
        id,
        title: format!("Movie {}", id),
        genre_ids: genre_ids.iter().copied().collect(),
        ..Movie::default()
    }
}

pub fn show(id: u64, genre_ids: &[u32]) -> TvShow {
    TvShow {
        id,
        name: format!("Show {}", id),
        overview: "An overview".to_string(),
        genre_ids: genre_ids.iter().copied().collect(),
        ..TvShow::default()
    }
}

pub fn source(quality: &str) -> StreamSource {
    StreamSource {
        quality: quality.to_string(),
        url: format!("https://cdn.example/{}.m3u8", quality.to_lowercase().replace(' ', "_")),
        source: "asiacloud".to_string(),
        format: "hls".to_string(),
    }
}

impl FakeCatalog {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, request: RequestId) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&request) {
            return Err(CatalogError::schema(request, "fake failure"));
        }
        Ok(())
    }

    fn page<T: Clone>(items: &[T], page: u32) -> Page<T> {
        Page {
            page,
            results: items.to_vec(),
            total_pages: Some(3),
            total_results: Some(items.len() as u32),
        }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn trending_movies(&self, page: u32) -> Result<Page<Movie>> {
        self.check(RequestId::TrendingMovie)?;
        Ok(Self::page(&self.trending_movies, page))
    }

    async fn top_rated_movies(&self, page: u32) -> Result<Page<Movie>> {
        self.check(RequestId::TopRatedMovie)?;
        Ok(Self::page(&self.top_rated_movies, page))
    }

    async fn trending_tv(&self, page: u32) -> Result<Page<TvShow>> {
        self.check(RequestId::TrendingTvDay)?;
        Ok(Self::page(&self.trending_tv, page))
    }

    async fn search(&self, _query: &str, page: u32) -> Result<Page<SearchResult>> {
        self.check(RequestId::SearchMulti)?;
        Ok(Self::page(&self.search_results, page))
    }

    async fn movie_details(&self, id: u64) -> Result<Movie> {
        self.check(RequestId::MovieData)?;
        self.movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::schema(RequestId::MovieData, "movie is missing `id`"))
    }

    async fn tv_details(&self, id: u64) -> Result<TvShow> {
        self.check(RequestId::TvData)?;
        self.shows
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::schema(RequestId::TvData, "tv show is missing `id`"))
    }

    async fn movie_videos(&self, _id: u64) -> Result<Vec<Video>> {
        self.check(RequestId::MovieVideos)?;
        Ok(self.videos.clone())
    }

    async fn tv_videos(&self, _id: u64) -> Result<Vec<Video>> {
        self.check(RequestId::TvVideos)?;
        Ok(self.videos.clone())
    }

    async fn movie_images(&self, _id: u64) -> Result<Vec<ImageAsset>> {
        self.check(RequestId::MovieImages)?;
        Ok(self.backdrops.clone())
    }

    async fn tv_images(&self, _id: u64) -> Result<Vec<ImageAsset>> {
        self.check(RequestId::TvImages)?;
        Ok(self.backdrops.clone())
    }

    async fn movie_streams(&self, _id: u64) -> Result<Vec<StreamSource>> {
        self.check(RequestId::MovieVideoProvider)?;
        Ok(self.streams.clone())
    }

    async fn tv_streams(&self, _id: u64, _season: u32, _episode: u32) -> Result<Vec<StreamSource>> {
        self.check(RequestId::TvVideoProvider)?;
        Ok(self.streams.clone())
    }
}
