//! Hypermedia link assembly for list endpoints
//!
//! Links are built from service output plus a resolver that turns a resource path into a
//! URL for the current request. Input order is kept as-is.

use crate::core::models::{CourseDto, LinkDto};

/// Relation label for course links
pub const REL_COURSE: &str = "course";

/// Relation label for product links
pub const REL_PRODUCT: &str = "product";

/// One link per course, pointing at `/courses/{id}`
pub fn course_links<F>(courses: &[CourseDto], resolve: F) -> Vec<LinkDto>
where
    F: Fn(&str) -> String,
{
    courses
        .iter()
        .map(|course| {
            LinkDto::new(
                resolve(&format!("/courses/{}", course.id)),
                REL_COURSE,
                &course.naam,
            )
        })
        .collect()
}

/// One link per product id, pointing at `/products/{id}/courses`
pub fn product_links<F>(product_ids: &[String], resolve: F) -> Vec<LinkDto>
where
    F: Fn(&str) -> String,
{
    product_ids
        .iter()
        .map(|product_id| {
            LinkDto::new(
                resolve(&format!("/products/{product_id}/courses")),
                REL_PRODUCT,
                product_id,
            )
        })
        .collect()
}
