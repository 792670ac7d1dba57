use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::MSG_SERVER_RUNNING;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // OpenAPI document
            .route("/openapi.json", web::get().to(openapi_json))
            // Users list and "create user" form
            .service(
                web::scope("/users")
                    .route("", web::get().to(handlers::get_users))
                    .route("", web::post().to(handlers::create_user))
                    .route("/{id}", web::get().to(handlers::get_user)),
            )
            // Forms list and "create form" modal
            .service(
                web::scope("/forms")
                    .route("", web::get().to(handlers::get_forms))
                    .route("", web::post().to(handlers::create_form))
                    .route("/{id}", web::get().to(handlers::get_form)),
            )
            // Dashboard charts
            .route("/dashboard", web::get().to(handlers::get_dashboard))
            // Page window preview
            .route("/pagination", web::get().to(handlers::get_page_window)),
    );
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
