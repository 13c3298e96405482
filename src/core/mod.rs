//! Catalog domain: models, storage, the course service and the dashboard view model

pub mod config;
pub mod dashboard;
pub mod filter;
pub mod hypermedia;
pub mod mapper;
pub mod models;
pub mod seed;
pub mod service;
pub mod store;

/// Returns the current version of the `course-catalog` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
