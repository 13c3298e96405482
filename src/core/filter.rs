//! Dashboard filter state
//!
//! Models the dashboard's client-side filters as explicit state plus a pure visibility
//! check. A course is visible when it matches the selected track (or the selection is
//! "all") and, for every active phase, scores strictly above [`PHASE_THRESHOLD`]. Active
//! phases narrow the result; with none active every course passes the phase check.
//!
//! The script embedded in the dashboard page applies the same rule in the browser.

use crate::core::models::{CourseDto, Phase, PhaseScores, Track};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A phase filter passes only for scores strictly above this value
pub const PHASE_THRESHOLD: f64 = 3.0;

/// Track selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackFilter {
    /// No track restriction
    #[default]
    All,
    /// Only courses with exactly this track
    Only(Track),
}

impl TrackFilter {
    /// Whether a course with `track` passes the selection
    #[must_use]
    pub fn matches(self, track: Track) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == track,
        }
    }
}

impl FromStr for TrackFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Track>().map(Self::Only)
    }
}

impl fmt::Display for TrackFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(track) => write!(f, "{track}"),
        }
    }
}

/// The attributes a rendered course card exposes to the filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardAttributes {
    /// Course track
    pub track: Track,
    /// Phase scores
    pub scores: PhaseScores,
}

impl CardAttributes {
    /// Attributes of a course DTO
    #[must_use]
    pub const fn from_dto(course: &CourseDto) -> Self {
        Self {
            track: course.track,
            scores: course.phase_scores,
        }
    }

    /// Attributes read back from raw data-attribute values
    ///
    /// `score_of` returns the raw attribute text for a phase, if present. Missing or
    /// unparsable scores count as 0.
    ///
    /// # Errors
    /// Returns an error if `track` is not a known track code
    pub fn from_data_attributes<'a, F>(track: &str, score_of: F) -> Result<Self, String>
    where
        F: Fn(Phase) -> Option<&'a str>,
    {
        let mut scores = PhaseScores::default();
        for phase in Phase::ALL {
            let score = score_of(phase)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|value| value.is_finite())
                .unwrap_or(0.0);
            scores.set(phase, score);
        }
        Ok(Self {
            track: track.parse()?,
            scores,
        })
    }
}

impl From<&CourseDto> for CardAttributes {
    fn from(course: &CourseDto) -> Self {
        Self::from_dto(course)
    }
}

/// Active phase toggles and track selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active_phases: BTreeSet<Phase>,
    active_track: TrackFilter,
}

impl FilterState {
    /// No phase filters, all tracks
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a phase toggle; returns whether the phase is now active
    pub fn toggle_phase(&mut self, phase: Phase) -> bool {
        if self.active_phases.remove(&phase) {
            false
        } else {
            self.active_phases.insert(phase);
            true
        }
    }

    /// Replace the track selection
    pub fn select_track(&mut self, track: TrackFilter) {
        self.active_track = track;
    }

    /// Deactivate every phase toggle
    pub fn clear_phases(&mut self) {
        self.active_phases.clear();
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Active phases in canonical order
    pub fn active_phases(&self) -> impl Iterator<Item = Phase> + '_ {
        self.active_phases.iter().copied()
    }

    /// Whether a phase toggle is active
    #[must_use]
    pub fn is_phase_active(&self, phase: Phase) -> bool {
        self.active_phases.contains(&phase)
    }

    /// Current track selection
    #[must_use]
    pub const fn active_track(&self) -> TrackFilter {
        self.active_track
    }

    /// Visibility of a single card under the current state
    #[must_use]
    pub fn is_visible(&self, card: &CardAttributes) -> bool {
        let tracks_match = self.active_track.matches(card.track);
        let phases_match = self
            .active_phases
            .iter()
            .all(|phase| card.scores.get(*phase) > PHASE_THRESHOLD);
        tracks_match && phases_match
    }

    /// Visibility of every card, in input order
    #[must_use]
    pub fn visibility(&self, cards: &[CardAttributes]) -> Vec<bool> {
        cards.iter().map(|card| self.is_visible(card)).collect()
    }
}
