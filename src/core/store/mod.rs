//! Course storage
//!
//! The catalog only ever reads courses by id, by product membership, in full, or as a
//! projection of their product lists. [`CourseStore`] captures exactly that surface plus the
//! upsert used by seeding, so any backend can sit behind the service.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryCourseStore;
pub use sqlite::SqliteCourseStore;

use crate::core::models::Course;
use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by a course store
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite failure
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// File system failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A course without id cannot be upserted
    #[error("Course '{naam}' has no id")]
    MissingId {
        /// Display name of the offending course
        naam: String,
    },

    /// The backend cannot serve requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Queryable collection of courses
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// All courses in store order
    async fn find_all(&self) -> Result<Vec<Course>, StoreError>;

    /// The course with the given id, if any
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, StoreError>;

    /// Courses whose product list contains `product_id`, in store order
    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Course>, StoreError>;

    /// Product list of every course, in store order
    async fn find_product_lists(&self) -> Result<Vec<Vec<String>>, StoreError>;

    /// Insert a course or replace the one with the same id
    async fn upsert(&self, course: Course) -> Result<(), StoreError>;

    /// Distinct product ids across all courses, in first-seen order
    async fn distinct_product_ids(&self) -> Result<Vec<String>, StoreError> {
        let lists = self.find_product_lists().await?;
        let mut seen = HashSet::new();
        Ok(lists
            .into_iter()
            .flatten()
            .filter(|product| seen.insert(product.clone()))
            .collect())
    }
}
