// Wire shapes of the aggregation endpoint and their conversion into view models.
//
// Every field is optional on the wire; required fields are checked here so
// that nothing half-filled ever leaves this module.

use crate::error::{CatalogError, Result};
use crate::request::RequestId;
use reelshelf_models::date::{parse_date, year_of};
use reelshelf_models::{
    CastMember, Company, Credits, CrewMember, Genre, ImageAsset, MediaKind, Movie, Page, SearchResult, Season, StreamSource, TvShow, Video,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RawListResponse<T> {
    page: Option<u32>,
    results: Option<Vec<T>>,
    total_pages: Option<u32>,
    total_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawGenre {
    id: Option<u32>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMovie {
    id: Option<u64>,
    title: Option<String>,
    original_title: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f32>,
    genre_ids: Option<Vec<u32>>,
    genres: Option<Vec<RawGenre>>,
    runtime: Option<u32>,
    imdb_id: Option<String>,
    credits: Option<RawCredits>,
    production_companies: Option<Vec<RawCompany>>,
}

#[derive(Debug, Deserialize)]
struct RawCastMember {
    name: Option<String>,
    character: Option<String>,
    profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCrewMember {
    name: Option<String>,
    job: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCredits {
    cast: Option<Vec<RawCastMember>>,
    crew: Option<Vec<RawCrewMember>>,
}

#[derive(Debug, Deserialize)]
struct RawCompany {
    name: Option<String>,
    logo_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCreator {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSeason {
    id: Option<u64>,
    name: Option<String>,
    season_number: Option<u32>,
    episode_count: Option<u32>,
    poster_path: Option<String>,
    air_date: Option<String>,
    overview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTvShow {
    id: Option<u64>,
    name: Option<String>,
    original_name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    first_air_date: Option<String>,
    vote_average: Option<f32>,
    genre_ids: Option<Vec<u32>>,
    genres: Option<Vec<RawGenre>>,
    seasons: Option<Vec<RawSeason>>,
    number_of_seasons: Option<u32>,
    number_of_episodes: Option<u32>,
    status: Option<String>,
    episode_run_time: Option<Vec<u32>>,
    created_by: Option<Vec<RawCreator>>,
    networks: Option<Vec<RawCompany>>,
}

#[derive(Debug, Deserialize)]
struct RawSearchHit {
    id: Option<u64>,
    media_type: Option<String>,
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    key: Option<String>,
    name: Option<String>,
    site: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVideosResponse {
    results: Option<Vec<RawVideo>>,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    file_path: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawImagesResponse {
    backdrops: Option<Vec<RawImage>>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    quality: Option<String>,
    url: Option<String>,
    source: Option<String>,
    format: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSourcesData {
    sources: Option<Vec<RawSource>>,
}

#[derive(Debug, Deserialize)]
struct RawSourcesResponse {
    data: Option<RawSourcesData>,
}

fn parse_json<T: DeserializeOwned>(request: RequestId, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| CatalogError::schema(request, format!("undecodable JSON: {}", e)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn convert_genres(raw: Option<Vec<RawGenre>>) -> Vec<Genre> {
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(|g| {
            Some(Genre {
                id: g.id?,
                name: g.name.unwrap_or_default(),
            })
        })
        .collect()
}

fn convert_credits(raw: RawCredits) -> Credits {
    Credits {
        cast: raw
            .cast
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| {
                Some(CastMember {
                    name: non_empty(c.name)?,
                    character: c.character.unwrap_or_default(),
                    profile_path: non_empty(c.profile_path),
                })
            })
            .collect(),
        crew: raw
            .crew
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| {
                Some(CrewMember {
                    name: non_empty(c.name)?,
                    job: c.job.unwrap_or_default(),
                })
            })
            .collect(),
    }
}

fn convert_companies(raw: Option<Vec<RawCompany>>) -> Vec<Company> {
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(|c| {
            Some(Company {
                name: non_empty(c.name)?,
                logo_path: non_empty(c.logo_path),
            })
        })
        .collect()
}

fn convert_movie(request: RequestId, raw: RawMovie) -> Result<Movie> {
    let id = raw.id.ok_or_else(|| CatalogError::schema(request, "movie is missing `id`"))?;
    let title = non_empty(raw.title)
        .or_else(|| non_empty(raw.original_title))
        .ok_or_else(|| CatalogError::schema(request, format!("movie {} is missing `title`", id)))?;

    Ok(Movie {
        id,
        title,
        overview: raw.overview.unwrap_or_default(),
        poster_path: non_empty(raw.poster_path),
        backdrop_path: non_empty(raw.backdrop_path),
        release_date: raw.release_date.as_deref().and_then(parse_date),
        vote_average: raw.vote_average.unwrap_or_default(),
        genre_ids: raw.genre_ids.unwrap_or_default().into_iter().collect(),
        genres: convert_genres(raw.genres),
        runtime_minutes: raw.runtime.filter(|r| *r > 0),
        imdb_id: non_empty(raw.imdb_id),
        credits: raw.credits.map(convert_credits),
        production_companies: convert_companies(raw.production_companies),
    })
}

fn convert_season(raw: RawSeason) -> Option<Season> {
    let season_number = raw.season_number?;
    Some(Season {
        id: raw.id.unwrap_or_default(),
        name: raw.name.unwrap_or_else(|| format!("Season {}", season_number)),
        season_number,
        episode_count: raw.episode_count.unwrap_or_default(),
        poster_path: non_empty(raw.poster_path),
        air_date: raw.air_date.as_deref().and_then(parse_date),
        overview: raw.overview.unwrap_or_default(),
    })
}

/// List entries only need an id and a name; the detail payload additionally
/// needs an overview (see [`decode_tv_details`]).
fn convert_tv_show(request: RequestId, raw: RawTvShow) -> Result<TvShow> {
    let id = raw.id.ok_or_else(|| CatalogError::schema(request, "tv show is missing `id`"))?;
    let name = non_empty(raw.name)
        .or_else(|| non_empty(raw.original_name))
        .ok_or_else(|| CatalogError::schema(request, format!("tv show {} is missing `name`", id)))?;

    let mut seasons: Vec<Season> = raw
        .seasons
        .unwrap_or_default()
        .into_iter()
        .filter_map(convert_season)
        .collect();
    seasons.sort_by_key(|s| s.season_number);

    Ok(TvShow {
        id,
        name,
        overview: raw.overview.unwrap_or_default(),
        poster_path: non_empty(raw.poster_path),
        backdrop_path: non_empty(raw.backdrop_path),
        first_air_date: raw.first_air_date.as_deref().and_then(parse_date),
        vote_average: raw.vote_average.unwrap_or_default(),
        genre_ids: raw.genre_ids.unwrap_or_default().into_iter().collect(),
        genres: convert_genres(raw.genres),
        seasons,
        number_of_seasons: raw.number_of_seasons,
        number_of_episodes: raw.number_of_episodes,
        status: non_empty(raw.status),
        episode_run_time: raw
            .episode_run_time
            .unwrap_or_default()
            .into_iter()
            .filter(|m| *m > 0)
            .collect(),
        created_by: raw
            .created_by
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| non_empty(c.name))
            .collect(),
        networks: convert_companies(raw.networks),
    })
}

/// Converted entries plus how many failed validation. Entries the converter
/// skips with `Ok(None)` are not counted as failures.
fn convert_entries<R, T, F>(request: RequestId, entries: Vec<R>, convert: F) -> (Vec<T>, usize)
where
    F: Fn(RequestId, R) -> Result<Option<T>>,
{
    let mut items = Vec::with_capacity(entries.len());
    let mut invalid = 0;
    for entry in entries {
        match convert(request, entry) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(e) => {
                debug!("Dropping {} entry: {}", request, e);
                invalid += 1;
            }
        }
    }
    (items, invalid)
}

/// Decode a paginated listing, dropping entries that fail validation.
fn decode_list<R, T, F>(request: RequestId, body: &[u8], requested_page: u32, convert: F) -> Result<Page<T>>
where
    R: DeserializeOwned,
    F: Fn(RequestId, R) -> Result<Option<T>>,
{
    let raw: RawListResponse<R> = parse_json(request, body)?;
    let results = raw
        .results
        .ok_or_else(|| CatalogError::schema(request, "`results` array is missing"))?;

    let total = results.len();
    let (items, invalid) = convert_entries(request, results, convert);
    if invalid > 0 {
        warn!("{}: dropped {} of {} entries that failed validation", request, invalid, total);
    }

    Ok(Page {
        page: raw.page.unwrap_or(requested_page),
        results: items,
        total_pages: raw.total_pages,
        total_results: raw.total_results,
    })
}

pub fn decode_movie_list(request: RequestId, body: &[u8], page: u32) -> Result<Page<Movie>> {
    decode_list::<RawMovie, _, _>(request, body, page, |r, raw| convert_movie(r, raw).map(Some))
}

pub fn decode_tv_list(request: RequestId, body: &[u8], page: u32) -> Result<Page<TvShow>> {
    decode_list::<RawTvShow, _, _>(request, body, page, |r, raw| convert_tv_show(r, raw).map(Some))
}

pub fn decode_movie_details(body: &[u8]) -> Result<Movie> {
    let raw: RawMovie = parse_json(RequestId::MovieData, body)?;
    convert_movie(RequestId::MovieData, raw)
}

pub fn decode_tv_details(body: &[u8]) -> Result<TvShow> {
    let request = RequestId::TvData;
    let raw: RawTvShow = parse_json(request, body)?;
    if raw.overview.as_deref().map(str::trim).unwrap_or_default().is_empty() {
        return Err(CatalogError::schema(request, "tv show is missing `overview`"));
    }
    convert_tv_show(request, raw)
}

/// `Ok(None)` for people and other hits that are not titles.
fn convert_search_hit(request: RequestId, raw: RawSearchHit) -> Result<Option<SearchResult>> {
    let id = raw.id.ok_or_else(|| CatalogError::schema(request, "search hit is missing `id`"))?;
    let media_type = raw
        .media_type
        .ok_or_else(|| CatalogError::schema(request, format!("search hit {} is missing `media_type`", id)))?;
    let Some(kind) = MediaKind::parse(&media_type) else {
        debug!("Skipping {} search hit {}", media_type, id);
        return Ok(None);
    };
    let title = non_empty(raw.title)
        .or_else(|| non_empty(raw.name))
        .ok_or_else(|| CatalogError::schema(request, format!("search hit {} has no title", id)))?;
    let date = raw
        .release_date
        .as_deref()
        .and_then(parse_date)
        .or_else(|| raw.first_air_date.as_deref().and_then(parse_date));

    Ok(Some(SearchResult {
        id,
        kind,
        title,
        year: year_of(date),
        poster_path: non_empty(raw.poster_path),
        backdrop_path: non_empty(raw.backdrop_path),
    }))
}

/// People and other non-title hits are skipped; invalid entries are dropped.
pub fn decode_search(body: &[u8], page: u32) -> Result<Page<SearchResult>> {
    decode_list::<RawSearchHit, _, _>(RequestId::SearchMulti, body, page, convert_search_hit)
}

pub fn decode_videos(request: RequestId, body: &[u8]) -> Result<Vec<Video>> {
    let raw: RawVideosResponse = parse_json(request, body)?;
    let results = raw
        .results
        .ok_or_else(|| CatalogError::schema(request, "`results` array is missing"))?;

    Ok(results
        .into_iter()
        .filter_map(|v| {
            Some(Video {
                key: non_empty(v.key)?,
                name: v.name.unwrap_or_default(),
                site: v.site.unwrap_or_default(),
                kind: v.kind.unwrap_or_default(),
            })
        })
        .collect())
}

pub fn decode_images(request: RequestId, body: &[u8]) -> Result<Vec<ImageAsset>> {
    let raw: RawImagesResponse = parse_json(request, body)?;
    let backdrops = raw
        .backdrops
        .ok_or_else(|| CatalogError::schema(request, "`backdrops` array is missing"))?;

    Ok(backdrops
        .into_iter()
        .filter_map(|i| {
            Some(ImageAsset {
                file_path: non_empty(i.file_path)?,
                width: i.width,
                height: i.height,
            })
        })
        .collect())
}

pub fn decode_streams(request: RequestId, body: &[u8]) -> Result<Vec<StreamSource>> {
    let raw: RawSourcesResponse = parse_json(request, body)?;
    let sources = raw
        .data
        .and_then(|d| d.sources)
        .ok_or_else(|| CatalogError::schema(request, "`data.sources` is missing"))?;

    sources
        .into_iter()
        .enumerate()
        .map(|(index, s)| {
            let url = non_empty(s.url)
                .ok_or_else(|| CatalogError::schema(request, format!("source #{} has no `url`", index)))?;
            Ok(StreamSource {
                quality: non_empty(s.quality).unwrap_or_else(|| format!("Source {}", index + 1)),
                url,
                source: s.source.unwrap_or_default(),
                format: s.format.unwrap_or_default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests;
