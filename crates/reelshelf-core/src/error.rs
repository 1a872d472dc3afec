use crate::genres::LookupError;
use reelshelf_catalog::CatalogError;
use thiserror::Error;

/// Failure of a catalog-backed discovery flow (category browsing).
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl DiscoveryError {
    pub fn is_invalid_category(&self) -> bool {
        matches!(self, DiscoveryError::Lookup(_))
    }
}
