//! Curriculum import
//!
//! Reads the curriculum JSON document (`{"courses": [...]}`) and upserts every course into
//! a store, keyed by id. Running the import twice leaves the store unchanged.

use crate::core::models::Course;
use crate::core::store::{CourseStore, StoreError};
use crate::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while importing a curriculum file
#[derive(Error, Debug)]
pub enum SeedError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file is not a valid curriculum document
    #[error("Invalid curriculum JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A course could not be written
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Top-level shape of the curriculum file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurriculumData {
    /// Courses in file order
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Parse a curriculum document from a JSON string
///
/// # Errors
/// Returns an error if the JSON does not match the curriculum shape
pub fn parse_curriculum(json: &str) -> Result<Vec<Course>, SeedError> {
    let data: CurriculumData = serde_json::from_str(json)?;
    Ok(data.courses)
}

/// Read and parse a curriculum file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_curriculum(path: &Path) -> Result<Vec<Course>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let courses = parse_curriculum(&raw)?;
    debug!("Parsed {} courses from {}", courses.len(), path.display());
    Ok(courses)
}

/// Upsert every course into the store, in order; returns how many were written
///
/// # Errors
/// Returns the first store error; courses before it stay written
pub async fn seed_courses(store: &dyn CourseStore, courses: Vec<Course>) -> Result<usize, SeedError> {
    let count = courses.len();
    for course in courses {
        store.upsert(course).await?;
    }
    info!("Seeded {count} courses");
    Ok(count)
}
