//! Year × block grid for the dashboard
//!
//! Courses are placed in a 4×4 matrix by `(jaar, blok)`. Block 0 marks a year-long course,
//! which goes to a separate bucket whatever its year. Any other course outside years 1-4 or
//! blocks 1-4 is not placed anywhere.

use super::chart::{derive_chart, CourseChart};
use crate::core::models::CourseDto;

/// Number of study years shown
pub const YEARS: u32 = 4;

/// Number of blocks per year
pub const BLOCKS: u32 = 4;

/// A course together with its derived chart
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCard {
    /// Course data
    pub course: CourseDto,
    /// Derived phase chart
    pub chart: CourseChart,
}

impl CourseCard {
    /// Build a card, deriving the chart from the course's scores
    #[must_use]
    pub fn new(course: CourseDto) -> Self {
        let chart = derive_chart(&course);
        Self { course, chart }
    }

    /// Programming language or an empty string
    #[must_use]
    pub fn language(&self) -> &str {
        self.course.programmeertaal.as_deref().unwrap_or("")
    }
}

/// One grid cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridCell {
    /// Block number (1-based)
    pub blok: u32,
    /// Courses in this cell, in input order
    pub courses: Vec<CourseCard>,
}

/// One row of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// Study year (1-based)
    pub jaar: u32,
    /// Cells for blocks 1..=4
    pub cells: Vec<GridCell>,
}

/// Courses grouped by year and block
#[derive(Debug, Clone, PartialEq)]
pub struct CourseGrid {
    /// Rows for years 1..=4
    pub rows: Vec<GridRow>,
    /// Courses with block 0
    pub year_long: Vec<CourseCard>,
    /// Courses that fit neither the grid nor the year-long bucket
    pub unplaced: Vec<CourseCard>,
}

impl CourseGrid {
    fn empty() -> Self {
        let rows = (1..=YEARS)
            .map(|jaar| GridRow {
                jaar,
                cells: (1..=BLOCKS)
                    .map(|blok| GridCell {
                        blok,
                        courses: Vec::new(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            rows,
            year_long: Vec::new(),
            unplaced: Vec::new(),
        }
    }

    /// Courses at `(jaar, blok)`; empty for coordinates outside the grid
    #[must_use]
    pub fn cell(&self, jaar: u32, blok: u32) -> &[CourseCard] {
        if !(1..=YEARS).contains(&jaar) || !(1..=BLOCKS).contains(&blok) {
            return &[];
        }
        &self.rows[(jaar - 1) as usize].cells[(blok - 1) as usize].courses
    }

    /// Number of courses placed in the 4×4 matrix
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.cells)
            .map(|cell| cell.courses.len())
            .sum()
    }
}

/// Group cards into the year × block grid
#[must_use]
pub fn group_into_grid(cards: Vec<CourseCard>) -> CourseGrid {
    let mut grid = CourseGrid::empty();

    for card in cards {
        let (jaar, blok) = (card.course.jaar, card.course.blok);
        if blok == 0 {
            grid.year_long.push(card);
        } else if (1..=YEARS).contains(&jaar) && (1..=BLOCKS).contains(&blok) {
            grid.rows[(jaar - 1) as usize].cells[(blok - 1) as usize]
                .courses
                .push(card);
        } else {
            grid.unplaced.push(card);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapper::to_course_dto;
    use crate::core::models::{Course, Track};

    fn card(id: &str, jaar: u32, blok: u32) -> CourseCard {
        CourseCard::new(to_course_dto(&Course::new(id, id, jaar, blok, Track::Both, 5.0)))
    }

    #[test]
    fn test_courses_land_in_their_cell() {
        let grid = group_into_grid(vec![card("a", 1, 1), card("b", 4, 4), card("c", 1, 1)]);

        let ids: Vec<&str> = grid.cell(1, 1).iter().map(|c| c.course.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(grid.cell(4, 4).len(), 1);
        assert!(grid.cell(2, 3).is_empty());
        assert_eq!(grid.placed_count(), 3);
    }

    #[test]
    fn test_grid_shape() {
        let grid = group_into_grid(Vec::new());

        assert_eq!(grid.rows.len(), 4);
        for (i, row) in grid.rows.iter().enumerate() {
            assert_eq!(row.jaar as usize, i + 1);
            let blocks: Vec<u32> = row.cells.iter().map(|c| c.blok).collect();
            assert_eq!(blocks, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_block_zero_goes_to_year_long_once() {
        let grid = group_into_grid(vec![card("project", 2, 0), card("a", 2, 1)]);

        assert_eq!(grid.year_long.len(), 1);
        assert_eq!(grid.year_long[0].course.id, "project");
        let in_matrix = grid
            .rows
            .iter()
            .flat_map(|r| &r.cells)
            .flat_map(|c| &c.courses)
            .any(|c| c.course.id == "project");
        assert!(!in_matrix);
    }

    #[test]
    fn test_block_zero_ignores_year() {
        let grid = group_into_grid(vec![card("minor", 0, 0), card("odd", 9, 0)]);

        assert_eq!(grid.year_long.len(), 2);
        assert_eq!(grid.placed_count(), 0);
    }

    #[test]
    fn test_out_of_range_year_is_not_placed() {
        let grid = group_into_grid(vec![card("lost", 5, 2), card("early", 0, 1)]);

        assert_eq!(grid.placed_count(), 0);
        assert!(grid.year_long.is_empty());
        assert_eq!(grid.unplaced.len(), 2);
        assert!(grid.cell(5, 2).is_empty());
    }
}
