//! Query-string models.

use serde::Deserialize;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::pagination::PaginationRequest;

/// Query parameters for paginated list endpoints
///
/// Values are signed so that out-of-range input reaches the page window
/// calculator and is reported as an invalid argument instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListQuery {
    /// Page and page size with defaults applied and the page size capped.
    pub fn resolve(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(DEFAULT_PAGE_NUMBER as i64);
        let per_page = self
            .per_page
            .unwrap_or(DEFAULT_PAGE_SIZE as i64)
            .min(MAX_PAGE_SIZE as i64);
        (page, per_page)
    }
}

/// Query parameters for previewing a page window directly
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub total_count: i64,
    pub page_size: Option<i64>,
    pub current_page: Option<i64>,
}

impl From<&WindowQuery> for PaginationRequest {
    fn from(query: &WindowQuery) -> Self {
        let mut request = PaginationRequest::new(query.total_count);
        if let Some(page_size) = query.page_size {
            request = request.page_size(page_size);
        }
        if let Some(current_page) = query.current_page {
            request = request.current_page(current_page);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_and_cap() {
        let query = ListQuery {
            page: None,
            per_page: None,
        };
        assert_eq!(query.resolve(), (1, 10));

        let query = ListQuery {
            page: Some(3),
            per_page: Some(500),
        };
        assert_eq!(query.resolve(), (3, 100));
    }

    #[test]
    fn test_window_query_into_request() {
        let query = WindowQuery {
            total_count: 95,
            page_size: None,
            current_page: Some(5),
        };
        let request = PaginationRequest::from(&query);
        assert_eq!(request, PaginationRequest::new(95).current_page(5));
    }
}
