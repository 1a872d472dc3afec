use crate::error::DiscoveryError;
use crate::genres::resolve_genre_id;
use rand::seq::SliceRandom;
use rand::Rng;
use reelshelf_catalog::{Catalog, CatalogError};
use reelshelf_models::{MediaItem, MediaKind, Movie, Page, TvShow};
use tracing::debug;

/// Number of related titles shown under a detail page.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

/// Pool items other than `reference` sharing at least one genre with it.
fn related(reference: &MediaItem, pool: &[MediaItem]) -> Vec<MediaItem> {
    let reference_key = reference.key();
    let reference_genres = reference.genre_ids();

    pool.iter()
        .filter(|candidate| candidate.key() != reference_key)
        .filter(|candidate| !candidate.genre_ids().is_disjoint(&reference_genres))
        .cloned()
        .collect()
}

/// Items from `pool` that share at least one genre with `reference`.
///
/// The reference itself is never suggested. Movie suggestions keep pool
/// order; TV suggestions are shuffled with `rng` before truncation to
/// `limit`.
pub fn suggested_for<R: Rng + ?Sized>(
    reference: &MediaItem,
    pool: &[MediaItem],
    limit: usize,
    rng: &mut R,
) -> Vec<MediaItem> {
    let mut matches = related(reference, pool);
    if reference.kind() == MediaKind::Tv {
        matches.shuffle(rng);
    }
    matches.truncate(limit);
    matches
}

/// [`suggested_for`] for a movie reference, in pool order.
pub fn suggested_for_movie(reference: &Movie, pool: &[MediaItem], limit: usize) -> Vec<MediaItem> {
    let mut matches = related(&MediaItem::from(reference.clone()), pool);
    matches.truncate(limit);
    matches
}

pub fn filter_by_genre(pool: &[MediaItem], genre_id: u32) -> Vec<MediaItem> {
    pool.iter().filter(|item| item.has_genre(genre_id)).cloned().collect()
}

/// Uniform pick, `None` for an empty slice.
pub fn pick_random<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// One page of trending movies restricted to `genre_id`. Page metadata is
/// that of the unfiltered page.
pub async fn movies_by_genre<C: Catalog + ?Sized>(
    catalog: &C,
    genre_id: u32,
    page: u32,
) -> Result<Page<MediaItem>, CatalogError> {
    let trending = catalog.trending_movies(page).await?;
    let pool: Vec<MediaItem> = trending.results.iter().cloned().map(MediaItem::from).collect();
    let filtered = filter_by_genre(&pool, genre_id);
    debug!("Filtered {} of {} movies for genre {}", filtered.len(), pool.len(), genre_id);
    Ok(trending.with_results(filtered))
}

/// Resolve a category name and list its movies. An unknown name fails
/// before anything is requested.
pub async fn movies_in_category<C: Catalog + ?Sized>(
    catalog: &C,
    name: &str,
    page: u32,
) -> Result<Page<MediaItem>, DiscoveryError> {
    let genre_id = resolve_genre_id(name)?;
    Ok(movies_by_genre(catalog, genre_id, page).await?)
}

pub async fn suggest_movies<C: Catalog + ?Sized>(
    catalog: &C,
    movie: &Movie,
    page: u32,
) -> Result<Vec<MediaItem>, CatalogError> {
    let pool = catalog.trending_movies(page).await?;
    let pool: Vec<MediaItem> = pool.results.into_iter().map(MediaItem::from).collect();
    Ok(suggested_for_movie(movie, &pool, DEFAULT_SUGGESTION_LIMIT))
}

pub async fn suggest_tv_shows<C, R>(
    catalog: &C,
    show: &TvShow,
    page: u32,
    rng: &mut R,
) -> Result<Vec<MediaItem>, CatalogError>
where
    C: Catalog + ?Sized,
    R: Rng + Send + ?Sized,
{
    let pool = catalog.trending_tv(page).await?;
    let pool: Vec<MediaItem> = pool.results.into_iter().map(MediaItem::from).collect();
    let reference = MediaItem::from(show.clone());
    Ok(suggested_for(&reference, &pool, DEFAULT_SUGGESTION_LIMIT, rng))
}
