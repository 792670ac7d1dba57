//! Repository layer for the in-memory mock store.
//!
//! This module keeps record storage separate from business logic (services),
//! so the store can be swapped without touching handlers.

pub mod collection;
pub mod form_repository;
pub mod user_repository;

pub use collection::{MockCollection, Record};
pub use form_repository::FormRepository;
pub use user_repository::UserRepository;
