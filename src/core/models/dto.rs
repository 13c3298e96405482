//! API-facing shapes
//!
//! `CourseDto` is what the JSON API returns for a course; `LinkDto` is a hypermedia link
//! descriptor built per response.

use super::course::{PhaseScores, Track};
use serde::{Deserialize, Serialize};

/// Course representation returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    /// Course id (empty string when the stored record had none)
    pub id: String,
    /// Display name
    pub naam: String,
    /// Study year
    pub jaar: u32,
    /// Block within the year
    pub blok: u32,
    /// Track classification
    pub track: Track,
    /// ECTS credits
    pub ects: f32,
    /// Programming language, serialised as `null` when absent
    pub programmeertaal: Option<String>,
    /// Competency scores per phase
    pub phase_scores: PhaseScores,
    /// Product ids
    pub producten: Vec<String>,
}

/// Hypermedia link descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDto {
    /// Target URL
    pub href: String,
    /// Relation label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    /// Human readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LinkDto {
    /// Create a link with relation and title
    #[must_use]
    pub fn new(href: String, rel: &str, title: &str) -> Self {
        Self {
            href,
            rel: Some(rel.to_string()),
            title: Some(title.to_string()),
        }
    }
}
