//! CLI command handlers for `coursecatalog`.
//!
//! Each command is implemented in its own submodule. The helpers here open the course
//! store the way every command needs it.

pub mod config;
pub mod dashboard;
pub mod seed;
pub mod serve;

use course_catalog::config::Config;
use course_catalog::core::seed::{load_curriculum, seed_courses};
use course_catalog::core::store::{CourseStore, MemoryCourseStore, SqliteCourseStore};
use course_catalog::{info, verbose};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

/// Boxed error used by command handlers
pub type CommandResult<T> = Result<T, Box<dyn Error>>;

/// Multi-thread runtime for the async parts of a command
pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}

/// Open the configured store
///
/// SQLite when `database.path` is set; otherwise an in-memory store loaded from
/// `paths.data_file`.
pub async fn open_store(config: &Config) -> CommandResult<Arc<dyn CourseStore>> {
    if !config.database.path.is_empty() {
        let path = Path::new(&config.database.path);
        info!("Opening course database at {}", path.display());
        return Ok(Arc::new(SqliteCourseStore::open(path)?));
    }

    let data_file = Path::new(&config.paths.data_file);
    verbose!("No database configured; loading {}", data_file.display());
    let store = MemoryCourseStore::new();
    let courses = load_curriculum(data_file)?;
    seed_courses(&store, courses).await?;
    Ok(Arc::new(store))
}
