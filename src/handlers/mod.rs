//! HTTP request handlers organized by domain.

pub mod dashboard_handler;
pub mod form_handler;
pub mod pagination_handler;
pub mod user_handler;

pub use dashboard_handler::*;
pub use form_handler::*;
pub use pagination_handler::*;
pub use user_handler::*;
