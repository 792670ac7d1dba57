//! Request models for API endpoints.

pub mod form;
pub mod query;
pub mod user;

pub use form::*;
pub use query::*;
pub use user::*;
