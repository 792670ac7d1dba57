use utoipa::OpenApi;

use crate::models::{
    ApiResponse, ChartSeries, CreateFormRequest, CreateUserRequest, DashboardResponse, ErrorResponse,
    FormResponse, HealthResponse, PageWindowResponse, PaginatedResponse, SeriesData,
    UserResponse,
};
use crate::pagination::PaginationResult;

/// OpenAPI documentation for the admin dashboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admin Dashboard API",
        version = "0.1.0",
        description = "Mock REST backend for the admin dashboard: paginated users and forms, create workflows, and dashboard charts.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "Users list and creation"),
        (name = "Forms", description = "Forms list and creation"),
        (name = "Dashboard", description = "Dashboard chart data"),
        (name = "Pagination", description = "Page window calculator")
    ),
    paths(
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::get_forms,
        crate::handlers::get_form,
        crate::handlers::create_form,
        crate::handlers::get_dashboard,
        crate::handlers::get_page_window,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreateUserRequest,
            CreateFormRequest,
            UserResponse,
            FormResponse,
            PaginatedResponse<UserResponse>,
            PaginatedResponse<FormResponse>,
            ApiResponse<UserResponse>,
            ApiResponse<FormResponse>,
            ApiResponse<PageWindowResponse>,
            ApiResponse<DashboardResponse>,
            PageWindowResponse,
            PaginationResult,
            DashboardResponse,
            ChartSeries,
            SeriesData,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
