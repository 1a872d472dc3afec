pub mod api;
pub mod client;
pub mod error;
pub mod request;
pub mod traits;

pub use client::CatalogClient;
pub use error::{CatalogError, ClientBuildError, Result};
pub use request::RequestId;
pub use traits::Catalog;
