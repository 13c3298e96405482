//! Route handlers
//!
//! JSON handlers wrap service output in an [`Envelope`]; list endpoints return hypermedia
//! links, the product-filter and single-course endpoints return course DTOs.

use super::envelope::Envelope;
use super::error::ApiError;
use super::middleware::RequestContext;
use super::AppState;
use crate::core::dashboard::{DashboardContext, DashboardRenderer, DEFAULT_TITLE};
use crate::core::hypermedia::{course_links, product_links};
use crate::core::models::{CourseDto, LinkDto};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::{Extension, Json};

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

/// `GET /courses`
pub async fn get_courses(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<Vec<LinkDto>> {
    let courses = state
        .service
        .list_courses()
        .await
        .map_err(|e| ApiError::from_service(e, &ctx))?;
    let links = course_links(&courses, |path| ctx.resource_url(path));
    Ok(Json(Envelope::list(&ctx, "All courses", links)))
}

/// `GET /products`
pub async fn get_products(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<Vec<LinkDto>> {
    let products = state
        .service
        .list_products()
        .await
        .map_err(|e| ApiError::from_service(e, &ctx))?;
    let links = product_links(&products, |path| ctx.resource_url(path));
    Ok(Json(Envelope::list(&ctx, "All products", links)))
}

/// `GET /products/:product_id/courses`
pub async fn get_courses_by_product(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    product_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Vec<CourseDto>> {
    let Path(product_id) = product_id.map_err(|e| ApiError::from_path_rejection(&e, &ctx))?;
    let courses = state
        .service
        .list_courses_by_product(&product_id)
        .await
        .map_err(|e| ApiError::from_service(e, &ctx))?;
    Ok(Json(Envelope::list(&ctx, "Courses by product", courses)))
}

/// `GET /courses/:id`
pub async fn get_course(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<CourseDto> {
    let Path(id) = id.map_err(|e| ApiError::from_path_rejection(&e, &ctx))?;
    let course = state
        .service
        .get_course_by_id(&id)
        .await
        .map_err(|e| ApiError::from_service(e, &ctx))?;
    Ok(Json(Envelope::item(&ctx, "Course by id", course)))
}

/// Dashboard page
pub async fn courses_view(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<Html<String>, ApiError> {
    let courses = state
        .service
        .list_courses()
        .await
        .map_err(|e| ApiError::from_service(e, &ctx))?;
    let dashboard = DashboardContext::from_courses(DEFAULT_TITLE, courses);
    DashboardRenderer::new()
        .render(&dashboard)
        .map(Html)
        .map_err(|e| ApiError::internal(&e, &ctx))
}

/// Anything no route matched
pub async fn not_found(Extension(ctx): Extension<RequestContext>) -> ApiError {
    ApiError::route_not_found(&ctx)
}
