//! In-memory course store

use super::{CourseStore, StoreError};
use crate::core::models::Course;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Course store backed by a vector, keeping insertion order
#[derive(Debug, Default)]
pub struct MemoryCourseStore {
    courses: RwLock<Vec<Course>>,
}

impl MemoryCourseStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given courses as-is
    #[must_use]
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
        }
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn find_all(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, StoreError> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .find(|c| c.id.as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_product(&self, product_id: &str) -> Result<Vec<Course>, StoreError> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .filter(|c| c.has_product(product_id))
            .cloned()
            .collect())
    }

    async fn find_product_lists(&self) -> Result<Vec<Vec<String>>, StoreError> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .map(|c| c.producten.clone())
            .collect())
    }

    async fn upsert(&self, course: Course) -> Result<(), StoreError> {
        let Some(id) = course.id.clone() else {
            return Err(StoreError::MissingId { naam: course.naam });
        };

        let mut courses = self.courses.write().await;
        match courses.iter_mut().find(|c| c.id.as_deref() == Some(id.as_str())) {
            Some(existing) => *existing = course,
            None => courses.push(course),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Track;

    fn course(id: &str, products: &[&str]) -> Course {
        let mut course = Course::new(id, id, 1, 1, Track::Both, 5.0);
        for product in products {
            course.add_product(product);
        }
        course
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryCourseStore::with_courses(vec![course("a", &[]), course("b", &[])]);

        let found = store.find_by_id("b").await.unwrap();
        assert_eq!(found.and_then(|c| c.id), Some("b".to_string()));
        assert!(store.find_by_id("zzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_product_keeps_order() {
        let store = MemoryCourseStore::with_courses(vec![
            course("a", &["poster"]),
            course("b", &["report"]),
            course("c", &["report", "poster"]),
        ]);

        let ids: Vec<_> = store
            .find_by_product("poster")
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(store.find_by_product("video").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_distinct_products_deduplicates() {
        let store = MemoryCourseStore::with_courses(vec![
            course("a", &["report", "poster"]),
            course("b", &["report"]),
            course("c", &["poster", "demo"]),
        ]);

        let products = store.distinct_product_ids().await.unwrap();
        assert_eq!(products, vec!["report", "poster", "demo"]);
    }

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let store = MemoryCourseStore::new();
        store.upsert(course("a", &[])).await.unwrap();
        store.upsert(course("b", &[])).await.unwrap();

        let mut renamed = course("a", &["report"]);
        renamed.naam = "Renamed".to_string();
        store.upsert(renamed).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].naam, "Renamed");
        assert_eq!(all[0].producten, vec!["report"]);
    }

    #[tokio::test]
    async fn test_upsert_without_id_fails() {
        let store = MemoryCourseStore::new();
        let mut anonymous = course("a", &[]);
        anonymous.id = None;

        let err = store.upsert(anonymous).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingId { .. }));
    }
}
