//! Course dashboard
//!
//! Builds the view model for the HTML dashboard (phase charts and the year × block grid)
//! and renders it through an askama template. The rendered page is self-contained: the
//! client-side filter script is embedded, so the same output can be served or written to a
//! file.

pub mod chart;
pub mod grid;

pub use chart::{derive_chart, derive_segments, ChartSegment, CourseChart, GradientStop};
pub use grid::{group_into_grid, CourseCard, CourseGrid, GridCell, GridRow};

use crate::core::models::{CourseDto, Phase, Track};
use crate::warn;
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Client filter script embedded in every page
const FILTER_SCRIPT: &str = include_str!("../../../static/courses.js");

/// Default page title
pub const DEFAULT_TITLE: &str = "Curriculum overview";

/// Everything needed to render the dashboard
#[derive(Debug, Clone)]
pub struct DashboardContext {
    /// Page title
    pub title: String,
    /// Courses grouped by year and block
    pub grid: CourseGrid,
    /// Number of courses shown on the page (grid plus year-long)
    pub course_count: usize,
    /// Number of courses left out because they fit no grid slot
    pub unplaced_count: usize,
}

impl DashboardContext {
    /// Derive charts for every course and group them into the grid
    ///
    /// Courses that end up outside both the grid and the year-long bucket are reported with
    /// a warning; they are not rendered.
    #[must_use]
    pub fn from_courses(title: &str, courses: Vec<CourseDto>) -> Self {
        let cards = courses.into_iter().map(CourseCard::new).collect();
        let grid = group_into_grid(cards);

        for card in &grid.unplaced {
            warn!(
                "Course '{}' (jaar {}, blok {}) does not fit the year/block grid and is not shown",
                card.course.id, card.course.jaar, card.course.blok
            );
        }

        Self {
            title: title.to_string(),
            course_count: grid.placed_count() + grid.year_long.len(),
            unplaced_count: grid.unplaced.len(),
            grid,
        }
    }

    /// Total ECTS over every course on the page
    #[must_use]
    pub fn total_ects(&self) -> f32 {
        self.grid
            .rows
            .iter()
            .flat_map(|row| &row.cells)
            .flat_map(|cell| &cell.courses)
            .chain(&self.grid.year_long)
            .map(|card| card.course.ects)
            .sum()
    }
}

#[derive(Template)]
#[template(path = "courses.html")]
struct CoursesPage<'a> {
    title: &'a str,
    grid: &'a CourseGrid,
    course_count: usize,
    unplaced_count: usize,
    total_ects: String,
    phases: [Phase; 4],
    tracks: [Track; 3],
    filter_script: &'a str,
}

/// HTML renderer for the course dashboard
pub struct DashboardRenderer;

impl DashboardRenderer {
    /// Create a new renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the dashboard page
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    pub fn render(&self, ctx: &DashboardContext) -> Result<String, askama::Error> {
        CoursesPage {
            title: &ctx.title,
            grid: &ctx.grid,
            course_count: ctx.course_count,
            unplaced_count: ctx.unplaced_count,
            total_ects: format!("{:.1}", ctx.total_ects()),
            phases: Phase::ALL,
            tracks: Track::ALL,
            filter_script: FILTER_SCRIPT,
        }
        .render()
    }

    /// Render the dashboard page and write it to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    pub fn generate(&self, ctx: &DashboardContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let page = self.render(ctx)?;
        fs::write(output_path, page)?;
        Ok(())
    }
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapper::to_course_dto;
    use crate::core::models::{Course, PhaseScores};

    fn dto(id: &str, jaar: u32, blok: u32, track: Track) -> CourseDto {
        to_course_dto(
            &Course::new(id, &format!("Course {id}"), jaar, blok, track, 5.0)
                .with_scores(PhaseScores::new(5.0, 2.0, 8.0, 1.0)),
        )
    }

    #[test]
    fn test_context_counts() {
        let ctx = DashboardContext::from_courses(
            DEFAULT_TITLE,
            vec![
                dto("a", 1, 1, Track::Both),
                dto("b", 1, 0, Track::DataScience),
                dto("c", 7, 2, Track::SoftwareEngineering),
            ],
        );

        assert_eq!(ctx.course_count, 2);
        assert_eq!(ctx.unplaced_count, 1);
        assert_eq!(ctx.grid.placed_count(), 1);
        assert_eq!(ctx.grid.year_long.len(), 1);
        assert!((ctx.total_ects() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_render_contains_filter_attributes() {
        let ctx = DashboardContext::from_courses(
            DEFAULT_TITLE,
            vec![dto("SE1", 1, 2, Track::SoftwareEngineering)],
        );

        let html = DashboardRenderer::new().render(&ctx).unwrap();

        assert!(html.contains("Curriculum overview"));
        assert!(html.contains("data-track=\"SE\""));
        assert!(html.contains("data-score-analyse=\"5\""));
        assert!(html.contains("data-score-ontwerp=\"2\""));
        assert!(html.contains("data-phase=\"implementatie\""));
        assert!(html.contains("conic-gradient("));
        assert!(html.contains("applyFilters"));
    }

    #[test]
    fn test_header_counts_only_shown_courses() {
        let ctx = DashboardContext::from_courses(
            DEFAULT_TITLE,
            vec![dto("a", 1, 1, Track::Both), dto("lost", 9, 1, Track::Both)],
        );

        let html = DashboardRenderer::new().render(&ctx).unwrap();
        assert!(html.contains("1 courses &middot; 5.0 ECTS"));
        assert!(html.contains("1 not shown"));
    }

    #[test]
    fn test_render_escapes_names() {
        let mut course = dto("x", 2, 2, Track::Both);
        course.naam = "<script>alert(1)</script>".to_string();
        let ctx = DashboardContext::from_courses(DEFAULT_TITLE, vec![course]);

        let html = DashboardRenderer::new().render(&ctx).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
