//! Application constants module.
//!
//! This module centralizes the constant strings and numbers used throughout
//! the application: error messages, success messages, error codes,
//! pagination defaults, and the dashboard chart data.

pub mod dashboard;
pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;

pub use dashboard::*;
pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
