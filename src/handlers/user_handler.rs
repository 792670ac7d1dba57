//! User handlers for the users list and the "create user" form.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{
    CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND, HEADER_TOTAL_COUNT, MSG_USER_CREATED, MSG_USER_FOUND,
};
use crate::errors::ApiError;
use crate::models::{ApiResponse, CreateUserRequest, ListQuery, PaginatedResponse, UserResponse};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// List users page by page
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of users", body = PaginatedResponse<UserResponse>,
            headers(("x-total-count" = u64, description = "Total number of users"))),
        (status = 400, description = "Invalid page or page size", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_users(
    user_service: web::Data<UserService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let (page, per_page) = query.resolve();

    let (users, window) = user_service.list_users(page, per_page).await?;
    debug!("Returning {} users for page {}", users.len(), page);

    Ok(HttpResponse::Ok()
        .insert_header((HEADER_TOTAL_COUNT, window.total_count().to_string()))
        .json(PaginatedResponse::new(users, page, per_page, window)))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found, under `data`", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let user = user_service
        .get_user_by_id(&user_id)
        .await?
        .ok_or_else(|| {
            warn!("User not found with id: {}", user_id);
            ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND)
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_USER_FOUND,
        UserResponse::from(user),
    )))
}

/// Create a user from the "create user" form
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created, under `data`", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(|e| {
        let err = validation_errors_to_api_error(e);
        warn!("Validation failed for create user: {}", err);
        err
    })?;

    let user = user_service.create_user(body.into_inner()).await?;
    info!("User {} created through the API", user.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        MSG_USER_CREATED,
        UserResponse::from(user),
    )))
}
