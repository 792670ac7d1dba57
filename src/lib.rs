//! Backend for the admin dashboard.
//!
//! Serves paginated users and forms from a seeded in-memory store, accepts
//! the dashboard's create workflows, and exposes the page window calculator
//! that drives every list view.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod pagination;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validators;
