//! Course service
//!
//! Validates caller input, queries the [`CourseStore`], and maps results to DTOs. Every
//! call reads fresh from the store; nothing is cached between calls.

use crate::core::mapper::{to_course_dto, to_course_dtos};
use crate::core::models::CourseDto;
use crate::core::store::{CourseStore, StoreError};
use crate::debug;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the course service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required identifier was empty
    #[error("{0}")]
    Validation(String),

    /// No record matches the identifier
    #[error("{0}")]
    NotFound(String),

    /// Store access failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-only catalog operations over a course store
#[derive(Clone)]
pub struct CourseService {
    store: Arc<dyn CourseStore>,
}

impl CourseService {
    /// Create a service over the given store
    #[must_use]
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// All courses, in store order
    ///
    /// # Errors
    /// Returns [`ServiceError::Store`] if the store cannot be read
    pub async fn list_courses(&self) -> Result<Vec<CourseDto>, ServiceError> {
        let courses = self.store.find_all().await?;
        debug!("Listed {} courses", courses.len());
        Ok(to_course_dtos(&courses))
    }

    /// Distinct product ids referenced by any course, sorted
    ///
    /// # Errors
    /// Returns [`ServiceError::Store`] if the store cannot be read
    pub async fn list_products(&self) -> Result<Vec<String>, ServiceError> {
        let products: BTreeSet<String> =
            self.store.distinct_product_ids().await?.into_iter().collect();
        Ok(products.into_iter().collect())
    }

    /// Courses that deliver the given product
    ///
    /// An unknown product yields an empty list.
    ///
    /// # Errors
    /// Returns [`ServiceError::Validation`] when `product_id` is empty
    pub async fn list_courses_by_product(
        &self,
        product_id: &str,
    ) -> Result<Vec<CourseDto>, ServiceError> {
        if product_id.is_empty() {
            return Err(ServiceError::Validation("Product id is required.".to_string()));
        }
        let courses = self.store.find_by_product(product_id).await?;
        debug!("Product '{product_id}' matched {} courses", courses.len());
        Ok(to_course_dtos(&courses))
    }

    /// A single course by id
    ///
    /// # Errors
    /// Returns [`ServiceError::Validation`] when `id` is empty and
    /// [`ServiceError::NotFound`] when no course has that id
    pub async fn get_course_by_id(&self, id: &str) -> Result<CourseDto, ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::Validation("Course id is required.".to_string()));
        }
        self.store
            .find_by_id(id)
            .await?
            .map(|course| to_course_dto(&course))
            .ok_or_else(|| ServiceError::NotFound("Course not found".to_string()))
    }
}
