//! Dashboard page handler.

use actix_web::{web, HttpResponse};

use crate::constants::MSG_DASHBOARD;
use crate::models::{ApiResponse, DashboardResponse};
use crate::services::DashboardService;

/// Chart data for the dashboard page
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard chart cards, under `data`", body = ApiResponse<DashboardResponse>)
    )
)]
pub async fn get_dashboard(dashboard_service: web::Data<DashboardService>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(
        MSG_DASHBOARD,
        dashboard_service.overview(),
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use super::*;
    use crate::routes::configure_routes;

    #[actix_web::test]
    async fn test_get_dashboard() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(DashboardService::new()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let charts = body["data"]["charts"].as_array().unwrap();
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0]["chart_type"], "area");
        assert_eq!(charts[0]["categories"][0], "2022-06-10T00:00:00.000Z");
    }
}
