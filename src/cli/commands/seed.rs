//! Seed command handler

use super::{runtime, CommandResult};
use course_catalog::config::Config;
use course_catalog::core::seed::{load_curriculum, seed_courses};
use course_catalog::core::store::SqliteCourseStore;
use course_catalog::verbose;
use std::path::{Path, PathBuf};

/// Import a curriculum file into the configured database; returns the number of courses
pub fn run(file: Option<&Path>, config: &Config) -> CommandResult<usize> {
    if config.database.path.is_empty() {
        return Err("database path is not configured (set it with `config set db_path <PATH>` or pass --db-path)".into());
    }

    let source = file.map_or_else(|| PathBuf::from(&config.paths.data_file), Path::to_path_buf);
    verbose!("Importing {}", source.display());
    let courses = load_curriculum(&source)?;
    let store = SqliteCourseStore::open(Path::new(&config.database.path))?;

    let count = runtime()?.block_on(seed_courses(&store, courses))?;
    println!("✓ Seeded {count} courses into {}", config.database.path);
    Ok(count)
}
