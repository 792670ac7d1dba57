//! Response models for API endpoints.

pub mod api;
pub mod dashboard;
pub mod form;
pub mod pagination;
pub mod user;

pub use api::*;
pub use dashboard::*;
pub use form::*;
pub use pagination::*;
pub use user::*;
