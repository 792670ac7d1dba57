use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use admin_dashboard::config::CONFIG;
use admin_dashboard::middleware::ResponseDelay;
use admin_dashboard::repositories::{FormRepository, UserRepository};
use admin_dashboard::routes;
use admin_dashboard::services::{DashboardService, FormService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Seed the mock store
    info!("Seeding mock store...");
    let user_service = UserService::new(Arc::new(UserRepository::new()), CONFIG.bcrypt_cost);
    user_service.seed(CONFIG.seed_users).await;
    let form_service = FormService::new(Arc::new(FormRepository::new()));
    form_service.seed(CONFIG.seed_forms).await;

    // Initialize services
    let user_service = web::Data::new(user_service);
    let form_service = web::Data::new(form_service);
    let dashboard_service = web::Data::new(DashboardService::new());
    let response_delay = ResponseDelay::new(Duration::from_millis(CONFIG.response_delay_ms));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(response_delay)
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(form_service.clone())
            .app_data(dashboard_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
