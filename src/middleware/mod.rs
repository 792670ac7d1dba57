//! Request middleware.

pub mod response_delay;

pub use response_delay::ResponseDelay;
