use super::{detail, render, App};
use crate::{ListAction, ListName};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use reelshelf_core::Collection;
use reelshelf_models::{MediaKey, WatchStateEntry};
use serde_json::json;
use tracing::info;

impl From<ListName> for Collection {
    fn from(name: ListName) -> Self {
        match name {
            ListName::Watchlist => Collection::Watchlist,
            ListName::MyList => Collection::MyList,
            ListName::Recent => Collection::RecentlyViewed,
        }
    }
}

pub async fn run_list(app: &App, name: ListName, action: Option<ListAction>) -> Result<()> {
    let collection = Collection::from(name);
    match action.unwrap_or(ListAction::Show) {
        ListAction::Show => show(app, collection),
        ListAction::Add { kind, id } => add(app, collection, MediaKey::new(kind.into(), id)).await,
        ListAction::Remove { kind, id } => remove(app, collection, MediaKey::new(kind.into(), id)),
        ListAction::Toggle { kind, id } => toggle(app, collection, MediaKey::new(kind.into(), id)).await,
        ListAction::Clear => clear(app, collection),
    }
}

fn show(app: &App, collection: Collection) -> Result<()> {
    let entries = app.store().get_all(collection);
    if app.output.emit(&entries)? {
        return Ok(());
    }
    if entries.is_empty() {
        app.output.info(format!("{} is empty", collection));
        return Ok(());
    }
    app.output.println(render::heading(collection.label()));
    app.output.println(render::entry_table(&entries).to_string());
    Ok(())
}

async fn entry_for(app: &App, key: MediaKey) -> Result<WatchStateEntry> {
    let item = detail::fetch_item(app, key).await?;
    Ok(WatchStateEntry::from_item(&item))
}

fn report(app: &App, collection: Collection, key: MediaKey, title: &str, member: bool, changed: bool) {
    info!(collection = collection.storage_key(), item = %key, member, changed, "List updated");
    if app.output.emit(&json!({
        "collection": collection.storage_key(),
        "key": key,
        "title": title,
        "member": member,
        "changed": changed,
    }))
    .unwrap_or(false)
    {
        return;
    }

    match (member, changed) {
        (true, true) => app.output.success(format!("Added {} to {}", title, collection)),
        (true, false) => app.output.info(format!("{} is already in {}", title, collection)),
        (false, true) => app.output.success(format!("Removed {} from {}", title, collection)),
        (false, false) => app.output.info(format!("{} is not in {}", title, collection)),
    }
}

async fn add(app: &App, collection: Collection, key: MediaKey) -> Result<()> {
    let mut store = app.store();
    if collection != Collection::RecentlyViewed {
        if let Some(existing) = store.get_all(collection).into_iter().find(|e| e.key() == key) {
            report(app, collection, key, &existing.title, true, false);
            return Ok(());
        }
    }

    let entry = entry_for(app, key).await?;
    let title = entry.title.clone();
    let changed = store
        .add(collection, entry)
        .map_err(|e| eyre!("Failed to update {}: {}", collection, e))?;
    report(app, collection, key, &title, true, changed);
    Ok(())
}

fn remove(app: &App, collection: Collection, key: MediaKey) -> Result<()> {
    let mut store = app.store();
    let title = store
        .get_all(collection)
        .into_iter()
        .find(|e| e.key() == key)
        .map(|e| e.title)
        .unwrap_or_else(|| key.to_string());
    let changed = store
        .remove(collection, key)
        .map_err(|e| eyre!("Failed to update {}: {}", collection, e))?;
    report(app, collection, key, &title, false, changed);
    Ok(())
}

async fn toggle(app: &App, collection: Collection, key: MediaKey) -> Result<()> {
    if app.store().contains(collection, key) {
        return remove(app, collection, key);
    }
    let entry = entry_for(app, key).await?;
    let title = entry.title.clone();
    let member = app
        .store()
        .toggle(collection, entry)
        .map_err(|e| eyre!("Failed to update {}: {}", collection, e))?;
    report(app, collection, key, &title, member, true);
    Ok(())
}

fn clear(app: &App, collection: Collection) -> Result<()> {
    app.store()
        .clear(collection)
        .map_err(|e| eyre!("Failed to clear {}: {}", collection, e))?;
    app.output.success(format!("Cleared {}", collection));
    Ok(())
}
