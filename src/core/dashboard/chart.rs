//! Radial phase chart derivation
//!
//! Turns a course's four phase scores into proportional angular segments. Segments are
//! laid out in canonical phase order starting at 0 degrees; the last one ends at 360 when
//! the total score is positive. A zero total yields four zero-width segments.

use crate::core::models::{CourseDto, Phase, PhaseScores};
use std::fmt::Write;

/// Degrees per percentage point
const DEGREES_PER_PERCENT: f64 = 3.6;

/// One coloured slice of a course's phase chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSegment {
    /// Phase the slice represents
    pub phase: Phase,
    /// Raw score for the phase
    pub score: f64,
    /// Fill colour
    pub color: &'static str,
    /// Start angle in degrees
    pub start: f64,
    /// End angle in degrees
    pub end: f64,
}

impl ChartSegment {
    /// Angular width in degrees
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Share of the full circle as a percentage
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.span() / DEGREES_PER_PERCENT
    }

    /// Rounded percentage for display (e.g. "25%")
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.percent())
    }
}

/// A colour stop range of a conic gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Fill colour
    pub color: &'static str,
    /// Start angle in degrees
    pub start: f64,
    /// End angle in degrees
    pub end: f64,
}

/// Chart for a single course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseChart {
    /// Segments in canonical phase order
    pub segments: [ChartSegment; 4],
    /// Sum of the four scores
    pub total: f64,
}

impl CourseChart {
    /// Gradient stops covering the circle, one per segment
    #[must_use]
    pub fn gradient(&self) -> Vec<GradientStop> {
        self.segments
            .iter()
            .map(|s| GradientStop {
                color: s.color,
                start: s.start,
                end: s.end,
            })
            .collect()
    }

    /// CSS `conic-gradient(...)` value, angles printed with two decimals
    #[must_use]
    pub fn gradient_css(&self) -> String {
        let mut css = String::from("conic-gradient(");
        for (i, stop) in self.gradient().iter().enumerate() {
            if i > 0 {
                css.push_str(", ");
            }
            let _ = write!(css, "{} {:.2}deg {:.2}deg", stop.color, stop.start, stop.end);
        }
        css.push(')');
        css
    }

    /// Whether every segment is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total <= 0.0
    }
}

/// Derive the phase chart for a set of scores
#[must_use]
pub fn derive_segments(scores: &PhaseScores) -> CourseChart {
    let total = scores.total();
    let mut start = 0.0;

    let segments = Phase::ALL.map(|phase| {
        let score = scores.get(phase);
        let pct = if total > 0.0 { score / total * 100.0 } else { 0.0 };
        let span = pct * DEGREES_PER_PERCENT;
        let segment = ChartSegment {
            phase,
            score,
            color: phase.color(),
            start,
            end: start + span,
        };
        start += span;
        segment
    });

    CourseChart { segments, total }
}

/// Derive the phase chart for a course
#[must_use]
pub fn derive_chart(course: &CourseDto) -> CourseChart {
    derive_segments(&course.phase_scores)
}
