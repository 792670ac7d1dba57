//! Services organized by domain concern.

pub mod dashboard_service;
pub mod form_service;
pub mod seed;
pub mod user_service;

pub use dashboard_service::DashboardService;
pub use form_service::FormService;
pub use user_service::UserService;
