//! Custom validators and validation helpers.

pub mod common;
pub mod fields;

pub use common::*;
pub use fields::*;
