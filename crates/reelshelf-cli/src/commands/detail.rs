use super::{render, App};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::Cell;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reelshelf_catalog::Catalog;
use reelshelf_core::{
    load_movie_page, load_tv_page, suggest_movies, suggest_tv_shows, Collection, MoviePage, TvPage,
};
use reelshelf_models::{MediaItem, MediaKey, MediaKind, Movie, Video};
use serde_json::json;
use tracing::warn;

/// Watchlist / My List membership of one title.
fn membership(app: &App, key: MediaKey) -> (bool, bool) {
    let store = app.store();
    (
        store.contains(Collection::Watchlist, key),
        store.contains(Collection::MyList, key),
    )
}

fn record_view(app: &App, item: &MediaItem) {
    // Best effort
    if let Err(e) = app.store().add_recently_viewed(item) {
        warn!("Failed to record {} in recently viewed: {}", item.key(), e);
    }
}

fn print_header(app: &App, item: &MediaItem, extra: &[String]) {
    let assets = app.assets();
    app.output.println(render::heading(&format!(
        "{} ({})",
        item.title(),
        render::year(item.year())
    )));

    let mut facts = vec![
        format!("{} {}", item.kind(), item.id()),
        format!("Rating {}", render::rating(item.vote_average())),
    ];
    facts.extend(extra.iter().cloned());
    app.output.println(facts.join("  ·  "));

    let genres = reelshelf_core::genre_labels(item);
    if !genres.is_empty() {
        app.output.println(format!("Genres: {}", genres.join(", ")));
    }
    if !item.overview().is_empty() {
        app.output.println(format!("\n{}\n", item.overview()));
    }
    app.output.println(format!("Poster: {}", assets.resolve(item.poster_path(), app.image_size())));
}

/// `Label: a, b, c`, skipped when there is nothing to list.
fn print_names<S: AsRef<str>>(app: &App, label: &str, names: &[S]) {
    if names.is_empty() {
        return;
    }
    let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    app.output.println(format!("{}: {}", label, names.join(", ")));
}

fn print_credits(app: &App, movie: &Movie) {
    let Some(credits) = &movie.credits else {
        return;
    };
    if let Some(director) = credits.director() {
        app.output.println(format!("Director: {}", director.name));
    }
    let cast: Vec<String> = credits
        .top_cast(10)
        .iter()
        .map(|c| {
            if c.character.is_empty() {
                c.name.clone()
            } else {
                format!("{} ({})", c.name, c.character)
            }
        })
        .collect();
    print_names(app, "Cast", &cast);
}

fn print_trailer(app: &App, trailer: Option<&Video>) {
    if let Some(url) = trailer.and_then(|t| t.watch_url()) {
        app.output.println(format!("Trailer: {}", url));
    }
}

fn print_membership(app: &App, (watchlist, my_list): (bool, bool)) {
    app.output.println(format!(
        "Watchlist {}   My List {}",
        render::check(watchlist),
        render::check(my_list)
    ));
}

fn print_suggestions(app: &App, suggestions: &[MediaItem]) {
    if suggestions.is_empty() {
        return;
    }
    app.output.println(render::heading("You might also like"));
    app.output.println(render::media_table(suggestions).to_string());
}

pub async fn run_movie(app: &App, id: u64) -> Result<()> {
    let catalog = app.catalog()?;
    let MoviePage { movie, videos, backdrops } =
        app.fetch("Loading movie...", load_movie_page(&catalog, id)).await?;

    let suggestions = match suggest_movies(&catalog, &movie, 1).await {
        Ok(s) => s,
        Err(e) => {
            warn!("Could not load suggestions for movie {}: {}", id, e);
            Vec::new()
        }
    };

    let item = MediaItem::from(movie.clone());
    record_view(app, &item);
    let membership = membership(app, item.key());
    let trailer = videos.iter().find(|v| v.is_trailer());

    if app.output.emit(&json!({
        "movie": movie,
        "trailer": trailer,
        "backdrops": backdrops,
        "in_watchlist": membership.0,
        "in_my_list": membership.1,
        "suggestions": suggestions,
    }))? {
        return Ok(());
    }

    let mut extra = Vec::new();
    if let Some(runtime) = render::runtime(movie.runtime_minutes) {
        extra.push(runtime);
    }
    if let Some(imdb) = &movie.imdb_id {
        extra.push(imdb.clone());
    }
    print_header(app, &item, &extra);
    print_credits(app, &movie);
    let companies: Vec<&str> = movie.production_companies.iter().map(|c| c.name.as_str()).collect();
    print_names(app, "Production", &companies);
    print_trailer(app, trailer);
    print_membership(app, membership);
    app.output.println(format!("Watch: reelshelf watch movie {}", id));
    print_suggestions(app, &suggestions);
    Ok(())
}

pub async fn run_tv(app: &App, id: u64) -> Result<()> {
    let catalog = app.catalog()?;
    let TvPage { show, videos, backdrops } = app.fetch("Loading TV show...", load_tv_page(&catalog, id)).await?;

    let mut rng = StdRng::from_entropy();
    let suggestions = match suggest_tv_shows(&catalog, &show, 1, &mut rng).await {
        Ok(s) => s,
        Err(e) => {
            warn!("Could not load suggestions for tv show {}: {}", id, e);
            Vec::new()
        }
    };

    let item = MediaItem::from(show.clone());
    record_view(app, &item);
    let membership = membership(app, item.key());
    let trailer = videos.iter().find(|v| v.is_trailer());

    if app.output.emit(&json!({
        "show": show,
        "trailer": trailer,
        "backdrops": backdrops,
        "in_watchlist": membership.0,
        "in_my_list": membership.1,
        "suggestions": suggestions,
    }))? {
        return Ok(());
    }

    let mut extra = Vec::new();
    if let Some(n) = show.number_of_seasons {
        extra.push(format!("{} season{}", n, if n == 1 { "" } else { "s" }));
    }
    if let Some(minutes) = show.episode_run_time.first() {
        extra.push(format!("{} min", minutes));
    }
    if let Some(status) = &show.status {
        extra.push(status.clone());
    }
    print_header(app, &item, &extra);
    print_names(app, "Created by", &show.created_by);
    let networks: Vec<&str> = show.networks.iter().map(|n| n.name.as_str()).collect();
    print_names(app, "Networks", &networks);
    print_trailer(app, trailer);
    print_membership(app, membership);

    if !show.seasons.is_empty() {
        let mut table = render::new_table(vec!["Season", "Name", "Episodes", "Aired"]);
        for season in &show.seasons {
            table.add_row(vec![
                Cell::new(season.season_number),
                Cell::new(&season.name),
                Cell::new(season.episode_count),
                Cell::new(
                    season
                        .air_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ]);
        }
        app.output.println(render::heading("Seasons"));
        app.output.println(table.to_string());
    }
    let first_season = show
        .seasons
        .iter()
        .map(|s| s.season_number)
        .find(|n| *n > 0)
        .unwrap_or(1);
    app.output.println(format!(
        "Watch: reelshelf watch tv {} --season {} --episode 1",
        id, first_season
    ));
    print_suggestions(app, &suggestions);
    Ok(())
}

/// Details of one title as a [`MediaItem`], for adding it to a list.
pub async fn fetch_item(app: &App, key: MediaKey) -> Result<MediaItem> {
    let catalog = app.catalog()?;
    let item = match key.kind {
        MediaKind::Movie => MediaItem::from(app.fetch("Loading movie...", catalog.movie_details(key.id)).await?),
        MediaKind::Tv => MediaItem::from(app.fetch("Loading TV show...", catalog.tv_details(key.id)).await?),
    };
    if item.key() != key {
        return Err(eyre!("Catalog returned {} when asked for {}", item.key(), key));
    }
    Ok(item)
}
