use serde::{Deserialize, Serialize};

/// One page of a paginated catalog listing. Pagination is always caller-driven.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(page: u32, results: Vec<T>) -> Self {
        Self {
            page,
            results,
            total_pages: None,
            total_results: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Keep the page metadata but replace the result set (used after filtering).
    pub fn with_results<U>(self, results: Vec<U>) -> Page<U> {
        Page {
            page: self.page,
            results,
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }

    pub fn has_next(&self) -> bool {
        self.total_pages.map(|total| self.page < total).unwrap_or(false)
    }
}
