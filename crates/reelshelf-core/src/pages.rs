// Detail and playback screens need several requests at once. Each loader
// issues them concurrently and fails as a whole when any one fails, so a
// screen is either fully loaded or not shown.

use futures::try_join;
use reelshelf_catalog::{Catalog, CatalogError};
use reelshelf_models::{ImageAsset, Movie, Season, StreamSource, TvShow, Video};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MoviePage {
    pub movie: Movie,
    pub videos: Vec<Video>,
    pub backdrops: Vec<ImageAsset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TvPage {
    pub show: TvShow,
    pub videos: Vec<Video>,
    pub backdrops: Vec<ImageAsset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoviePlayback {
    pub movie: Movie,
    pub sources: Vec<StreamSource>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TvPlayback {
    pub show: TvShow,
    pub season: u32,
    pub episode: u32,
    pub sources: Vec<StreamSource>,
}

fn first_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|v| v.is_trailer())
}

impl MoviePage {
    pub fn trailer(&self) -> Option<&Video> {
        first_trailer(&self.videos)
    }
}

impl TvPage {
    pub fn trailer(&self) -> Option<&Video> {
        first_trailer(&self.videos)
    }
}

impl TvPlayback {
    pub fn season_info(&self) -> Option<&Season> {
        self.show.season(self.season)
    }
}

pub async fn load_movie_page<C: Catalog + ?Sized>(catalog: &C, id: u64) -> Result<MoviePage, CatalogError> {
    let (movie, videos, backdrops) = try_join!(
        catalog.movie_details(id),
        catalog.movie_videos(id),
        catalog.movie_images(id)
    )?;
    Ok(MoviePage {
        movie,
        videos,
        backdrops,
    })
}

pub async fn load_tv_page<C: Catalog + ?Sized>(catalog: &C, id: u64) -> Result<TvPage, CatalogError> {
    let (show, videos, backdrops) = try_join!(catalog.tv_details(id), catalog.tv_videos(id), catalog.tv_images(id))?;
    Ok(TvPage { show, videos, backdrops })
}

pub async fn load_movie_playback<C: Catalog + ?Sized>(catalog: &C, id: u64) -> Result<MoviePlayback, CatalogError> {
    let (sources, movie) = try_join!(catalog.movie_streams(id), catalog.movie_details(id))?;
    Ok(MoviePlayback { movie, sources })
}

pub async fn load_tv_playback<C: Catalog + ?Sized>(
    catalog: &C,
    id: u64,
    season: u32,
    episode: u32,
) -> Result<TvPlayback, CatalogError> {
    let (sources, show) = try_join!(catalog.tv_streams(id, season, episode), catalog.tv_details(id))?;
    Ok(TvPlayback {
        show,
        season,
        episode,
        sources,
    })
}
