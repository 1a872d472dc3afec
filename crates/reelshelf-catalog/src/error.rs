use crate::request::RequestId;
use thiserror::Error;

/// Failure of a single catalog request.
///
/// `Transport` and `Status` are both network-level failures (the caller shows
/// a retry-less error banner); `Schema` means the payload arrived but could
/// not be turned into a valid view model.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{request} request failed: {source}")]
    Transport {
        request: RequestId,
        #[source]
        source: reqwest::Error,
    },

    #[error("{request} request returned HTTP {status}")]
    Status { request: RequestId, status: u16 },

    #[error("invalid {request} response: {reason}")]
    Schema { request: RequestId, reason: String },
}

impl CatalogError {
    pub fn schema(request: RequestId, reason: impl Into<String>) -> Self {
        CatalogError::Schema {
            request,
            reason: reason.into(),
        }
    }

    pub fn request(&self) -> RequestId {
        match self {
            CatalogError::Transport { request, .. }
            | CatalogError::Status { request, .. }
            | CatalogError::Schema { request, .. } => *request,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, CatalogError::Transport { .. } | CatalogError::Status { .. })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, CatalogError::Schema { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failure to set up a [`crate::CatalogClient`] from configuration.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid catalog endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let status = CatalogError::Status { request: RequestId::TrendingMovie, status: 502 };
        assert!(status.is_transport());
        assert!(!status.is_schema());
        assert_eq!(status.to_string(), "trendingMovie request returned HTTP 502");

        let schema = CatalogError::schema(RequestId::TvData, "missing name");
        assert!(schema.is_schema());
        assert_eq!(schema.request(), RequestId::TvData);
    }
}
