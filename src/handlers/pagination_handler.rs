//! Direct access to the page window calculator.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::constants::MSG_PAGINATION_WINDOW;
use crate::errors::ApiError;
use crate::models::{ApiResponse, PageWindowResponse, WindowQuery};
use crate::pagination::PaginationRequest;

/// Compute the page window for arbitrary inputs
///
/// Lets clients that page through data from elsewhere render the same
/// pagination bar as the built-in lists.
#[utoipa::path(
    get,
    path = "/api/pagination",
    tag = "Pagination",
    params(
        ("total_count" = i64, Query, description = "Number of records in the result set"),
        ("page_size" = Option<i64>, Query, description = "Records per page (default: 10)"),
        ("current_page" = Option<i64>, Query, description = "1-based current page (default: 1)")
    ),
    responses(
        (status = 200, description = "Page window, under `data`", body = ApiResponse<PageWindowResponse>),
        (status = 400, description = "Invalid argument", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_page_window(query: web::Query<WindowQuery>) -> Result<HttpResponse, ApiError> {
    let request = PaginationRequest::from(&*query);
    debug!("Computing page window for {:?}", request);

    let window = request.compute()?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_PAGINATION_WINDOW,
        PageWindowResponse::from(window),
    )))
}
