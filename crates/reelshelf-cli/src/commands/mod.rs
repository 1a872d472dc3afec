pub mod browse;
pub mod category;
pub mod clear;
pub mod config;
pub mod detail;
pub mod list;
pub mod progress;
pub mod render;
pub mod settings;
pub mod watch;

use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use reelshelf_catalog::{CatalogClient, CatalogError};
use reelshelf_config::{Config, PathManager};
use reelshelf_core::{AssetResolver, FileBackend, SettingsStore, WatchStateStore};
use std::future::Future;

/// Everything a command handler needs: resolved paths, loaded config and
/// the output sink.
pub struct App {
    pub paths: PathManager,
    pub config: Config,
    pub output: Output,
}

impl App {
    pub fn new(paths: PathManager, config: Config, output: Output) -> Self {
        Self { paths, config, output }
    }

    pub fn catalog(&self) -> Result<CatalogClient> {
        CatalogClient::new(&self.config.api).map_err(|e| eyre!("Failed to create catalog client: {}", e))
    }

    fn backend(&self) -> FileBackend {
        FileBackend::new(self.config.store_dir(&self.paths))
    }

    pub fn store(&self) -> WatchStateStore<FileBackend> {
        WatchStateStore::new(self.backend())
    }

    pub fn settings_store(&self) -> SettingsStore<FileBackend> {
        SettingsStore::new(self.backend())
    }

    pub fn assets(&self) -> AssetResolver {
        AssetResolver::from_config(&self.config)
    }

    pub fn image_size(&self) -> &str {
        &self.config.images.default_size
    }

    pub async fn spin<F: Future>(&self, msg: &str, fut: F) -> F::Output {
        let spinner = progress::Spinner::start(msg, self.output.is_human());
        let result = fut.await;
        spinner.finish();
        result
    }

    /// Run a catalog request behind a spinner.
    pub async fn fetch<T, F>(&self, msg: &str, fut: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, CatalogError>>,
    {
        self.spin(msg, fut).await.map_err(catalog_failure)
    }
}

/// User-facing wording for the two catalog failure kinds.
pub fn catalog_failure(err: CatalogError) -> color_eyre::Report {
    if err.is_schema() {
        eyre!("Failed to load: {}", err)
    } else {
        eyre!("Request failed: {}", err)
    }
}
