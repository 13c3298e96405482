//! Course catalog library
//!
//! Serves a curriculum's courses through a hypermedia JSON API and renders them as an HTML
//! dashboard. The CLI binary (`coursecatalog`) wires configuration, logging, and storage
//! around these modules.

pub mod api;
pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
