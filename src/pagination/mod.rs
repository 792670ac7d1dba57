//! Windowed pagination for list views.
//!
//! The calculator is a pure function: it holds no state and can be called
//! from any number of handlers at once.

pub mod error;
pub mod window;

pub use error::PaginationError;
pub use window::*;
