//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::pagination::PaginationResult;

/// Page window plus its ready-to-render range label
#[derive(Debug, Serialize, ToSchema)]
pub struct PageWindowResponse {
    /// Page numbers, ellipsis flags and record range
    pub window: PaginationResult,
    /// Record range label, e.g. "41–50 of 95"
    #[schema(example = "41–50 of 95")]
    pub label: String,
}

impl From<PaginationResult> for PageWindowResponse {
    fn from(window: PaginationResult) -> Self {
        let label = window.range_label();
        Self { window, label }
    }
}

/// Paginated list response
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T: Serialize> {
    /// Whether the request was successful
    pub success: bool,
    /// Items on the requested page
    pub data: Vec<T>,
    /// Total number of items
    pub total: u64,
    /// Current page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Page window to render below the list
    pub pagination: PageWindowResponse,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Wrap one page of items. `page` and `per_page` must already have been
    /// accepted by the window calculator, so both are positive.
    pub fn new(data: Vec<T>, page: i64, per_page: i64, window: PaginationResult) -> Self {
        Self {
            success: true,
            data,
            total: window.total_count(),
            page: page as u64,
            per_page: per_page as u64,
            pagination: window.into(),
        }
    }
}
