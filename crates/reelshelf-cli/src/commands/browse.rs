use super::{render, App};
use color_eyre::Result;
use reelshelf_catalog::Catalog;
use reelshelf_core::pick_random;
use reelshelf_models::{MediaItem, Page};
use serde_json::json;

fn print_page(app: &App, title: &str, page: &Page<MediaItem>) -> Result<()> {
    if app.output.emit(page)? {
        return Ok(());
    }
    if page.is_empty() {
        app.output.warn("No results");
        return Ok(());
    }

    app.output.println(render::heading(title));
    app.output.println(render::media_table(&page.results).to_string());
    let pages = page.total_pages.map(|t| format!(" of {}", t)).unwrap_or_default();
    app.output.println(format!("Page {}{}", page.page, pages));
    if page.has_next() {
        app.output.println(format!("Next: --page {}", page.page + 1));
    }
    Ok(())
}

pub async fn run_trending(app: &App, tv: bool, page: u32) -> Result<()> {
    let catalog = app.catalog()?;
    let page = if tv {
        let shows = app.fetch("Fetching trending TV shows...", catalog.trending_tv(page)).await?;
        let items: Vec<MediaItem> = shows.results.iter().cloned().map(MediaItem::from).collect();
        shows.with_results(items)
    } else {
        let movies = app.fetch("Fetching trending movies...", catalog.trending_movies(page)).await?;
        let items: Vec<MediaItem> = movies.results.iter().cloned().map(MediaItem::from).collect();
        movies.with_results(items)
    };
    print_page(app, if tv { "Trending TV Shows" } else { "Trending Movies" }, &page)
}

pub async fn run_top_rated(app: &App, page: u32) -> Result<()> {
    let catalog = app.catalog()?;
    let movies = app.fetch("Fetching top rated movies...", catalog.top_rated_movies(page)).await?;
    let items: Vec<MediaItem> = movies.results.iter().cloned().map(MediaItem::from).collect();
    print_page(app, "Top Rated Movies", &movies.with_results(items))
}

pub async fn run_search(app: &App, query: &str, page: u32) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        app.output.warn("Nothing to search for");
        return Ok(());
    }

    let catalog = app.catalog()?;
    let results = app
        .fetch(&format!("Searching for \"{}\"...", query), catalog.search(query, page))
        .await?;

    if app.output.emit(&results)? {
        return Ok(());
    }
    if results.is_empty() {
        app.output.warn(format!("No results for \"{}\"", query));
        return Ok(());
    }
    app.output.println(render::heading(&format!("Results for \"{}\"", query)));
    app.output.println(render::search_table(&results.results).to_string());
    app.output.println("Open one with `reelshelf movie <id>` or `reelshelf tv <id>`");
    Ok(())
}

/// A random title from the first trending page, like a home-page hero.
pub async fn run_featured(app: &App, tv: bool) -> Result<()> {
    let catalog = app.catalog()?;
    let pool: Vec<MediaItem> = if tv {
        let shows = app.fetch("Fetching trending TV shows...", catalog.trending_tv(1)).await?;
        shows.results.into_iter().map(MediaItem::from).collect()
    } else {
        let movies = app.fetch("Fetching trending movies...", catalog.trending_movies(1)).await?;
        movies.results.into_iter().map(MediaItem::from).collect()
    };

    let Some(item) = pick_random(&pool, &mut rand::thread_rng()).cloned() else {
        app.output.warn("No results");
        return Ok(());
    };

    let assets = app.assets();
    let backdrop = assets.resolve(item.backdrop_path(), "original");
    if app.output.emit(&json!({ "item": item, "backdrop_url": backdrop }))? {
        return Ok(());
    }

    app.output.println(render::heading(&format!(
        "Featured: {} ({})",
        item.title(),
        render::year(item.year())
    )));
    app.output.println(format!("Rating: {}", render::rating(item.vote_average())));
    if !item.overview().is_empty() {
        app.output.println(render::truncate(item.overview(), 300));
    }
    app.output.println(format!("Backdrop: {}", backdrop));
    app.output.println(format!("More: reelshelf {} {}", item.kind(), item.id()));
    Ok(())
}
