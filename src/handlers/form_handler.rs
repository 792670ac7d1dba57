//! Form handlers for the forms list and the "create form" modal.

use actix_web::{web, HttpResponse};
use log::{info, warn};
use validator::Validate;

use crate::constants::{
    CODE_FORM_NOT_FOUND, ERR_FORM_NOT_FOUND, HEADER_TOTAL_COUNT, MSG_FORM_CREATED, MSG_FORM_FOUND,
};
use crate::errors::ApiError;
use crate::models::{ApiResponse, CreateFormRequest, FormResponse, ListQuery, PaginatedResponse};
use crate::services::FormService;
use crate::validators::validation_errors_to_api_error;

/// List forms page by page
#[utoipa::path(
    get,
    path = "/api/forms",
    tag = "Forms",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of forms", body = PaginatedResponse<FormResponse>,
            headers(("x-total-count" = u64, description = "Total number of forms"))),
        (status = 400, description = "Invalid page or page size", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_forms(
    form_service: web::Data<FormService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let (page, per_page) = query.resolve();
    let (forms, window) = form_service.list_forms(page, per_page).await?;

    Ok(HttpResponse::Ok()
        .insert_header((HEADER_TOTAL_COUNT, window.total_count().to_string()))
        .json(PaginatedResponse::new(forms, page, per_page, window)))
}

/// Get a specific form by ID
#[utoipa::path(
    get,
    path = "/api/forms/{id}",
    tag = "Forms",
    params(
        ("id" = String, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Form found, under `data`", body = ApiResponse<FormResponse>),
        (status = 400, description = "Malformed ID", body = crate::models::ErrorResponse),
        (status = 404, description = "Form not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_form(
    form_service: web::Data<FormService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let form_id = path.into_inner();

    let form = form_service
        .get_form_by_id(&form_id)
        .await?
        .ok_or_else(|| {
            warn!("Form not found with id: {}", form_id);
            ApiError::not_found(CODE_FORM_NOT_FOUND, ERR_FORM_NOT_FOUND)
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_FORM_FOUND,
        FormResponse::from(form),
    )))
}

/// Create a form from the "create form" modal
#[utoipa::path(
    post,
    path = "/api/forms",
    tag = "Forms",
    request_body = CreateFormRequest,
    responses(
        (status = 201, description = "Form created, under `data`", body = ApiResponse<FormResponse>),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_form(
    form_service: web::Data<FormService>,
    body: web::Json<CreateFormRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(|e| {
        let err = validation_errors_to_api_error(e);
        warn!("Validation failed for create form: {}", err);
        err
    })?;

    let form = form_service.create_form(body.into_inner()).await?;
    info!("Form {} created through the API", form.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        MSG_FORM_CREATED,
        FormResponse::from(form),
    )))
}
