use super::App;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use reelshelf_core::Collection;

pub async fn run_clear(app: &App, all: bool, store: bool, settings: bool) -> Result<()> {
    if !(all || store || settings) {
        app.output.warn("No clear option specified. Use --store, --settings, or --all");
        app.output.println("\nExample: reelshelf clear --store");
        return Ok(());
    }

    if all || store {
        clear_store(app)?;
    }
    if all || settings {
        app.settings_store()
            .reset()
            .map_err(|e| eyre!("Failed to reset settings: {}", e))?;
        app.output.success("Settings reset to defaults");
    }
    Ok(())
}

fn clear_store(app: &App) -> Result<()> {
    let mut store = app.store();
    for collection in Collection::ALL {
        store
            .clear(collection)
            .map_err(|e| eyre!("Failed to clear {}: {}", collection, e))?;
    }
    app.output.success(format!(
        "Cleared watchlist, my list and history in {}",
        app.config.store_dir(&app.paths).display()
    ));
    Ok(())
}
