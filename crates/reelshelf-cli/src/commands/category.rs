use super::{catalog_failure, render, App};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::Cell;
use reelshelf_core::genres::genre_slug;
use reelshelf_core::{all_genres, movies_in_category, DiscoveryError};
use serde_json::json;

pub async fn run_category(app: &App, genre: Option<String>, page: u32) -> Result<()> {
    let Some(genre) = genre else {
        return list_categories(app);
    };

    let catalog = app.catalog()?;
    let result = app
        .spin(&format!("Fetching {} movies...", genre), movies_in_category(&catalog, &genre, page))
        .await;

    let movies = match result {
        Ok(movies) => movies,
        Err(DiscoveryError::Lookup(e)) => {
            app.output.info("Run `reelshelf category` for the list of categories");
            return Err(eyre!("{}", e));
        }
        Err(DiscoveryError::Catalog(e)) => return Err(catalog_failure(e)),
    };

    if app.output.emit(&movies)? {
        return Ok(());
    }
    if movies.is_empty() {
        app.output.warn(format!("No results for {} on page {}", genre, movies.page));
        if movies.has_next() {
            app.output.info(format!("Try --page {}", movies.page + 1));
        }
        return Ok(());
    }

    app.output.println(render::heading(&format!("{} movies", genre)));
    app.output.println(render::media_table(&movies.results).to_string());
    app.output.println(format!("Page {}", movies.page));
    Ok(())
}

fn list_categories(app: &App) -> Result<()> {
    let genres: Vec<_> = all_genres().collect();
    let listed: Vec<_> = genres
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name, "slug": genre_slug(name) }))
        .collect();
    if app.output.emit(&listed)? {
        return Ok(());
    }

    let mut table = render::new_table(vec!["ID", "Category"]);
    for (id, name) in genres {
        table.add_row(vec![Cell::new(id), Cell::new(genre_slug(name))]);
    }
    app.output.println(render::heading("Categories"));
    app.output.println(table.to_string());
    Ok(())
}
