//! Course model
//!
//! The stored form of a curriculum course together with the closed enumerations it is
//! built from: the four assessment phases and the track classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four curriculum phases a course is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Analysis
    Analyse,
    /// Design
    Ontwerp,
    /// Implementation
    Implementatie,
    /// Evaluation
    Evaluatie,
}

impl Phase {
    /// All phases in canonical order. Chart segments follow this order.
    pub const ALL: [Self; 4] = [
        Self::Analyse,
        Self::Ontwerp,
        Self::Implementatie,
        Self::Evaluatie,
    ];

    /// Position of the phase in [`Phase::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Analyse => 0,
            Self::Ontwerp => 1,
            Self::Implementatie => 2,
            Self::Evaluatie => 3,
        }
    }

    /// Wire key used in JSON and in `data-phase` attributes
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Analyse => "analyse",
            Self::Ontwerp => "ontwerp",
            Self::Implementatie => "implementatie",
            Self::Evaluatie => "evaluatie",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analyse => "Analyse",
            Self::Ontwerp => "Ontwerp",
            Self::Implementatie => "Implementatie",
            Self::Evaluatie => "Evaluatie",
        }
    }

    /// Name of the HTML data-attribute carrying this phase's score on a course card
    #[must_use]
    pub const fn data_attribute(self) -> &'static str {
        match self {
            Self::Analyse => "data-score-analyse",
            Self::Ontwerp => "data-score-ontwerp",
            Self::Implementatie => "data-score-implementatie",
            Self::Evaluatie => "data-score-evaluatie",
        }
    }

    /// Fixed chart colour
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Analyse => "#4e79a7",
            Self::Ontwerp => "#f28e2b",
            Self::Implementatie => "#59a14f",
            Self::Evaluatie => "#e15759",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown phase: {s}"))
    }
}

/// Scores for the four phases, stored in canonical phase order
///
/// Serialises as `{"analyse": .., "ontwerp": .., "implementatie": .., "evaluatie": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PhaseScoresRepr", into = "PhaseScoresRepr")]
pub struct PhaseScores([f64; 4]);

#[derive(Serialize, Deserialize)]
struct PhaseScoresRepr {
    #[serde(default)]
    analyse: f64,
    #[serde(default)]
    ontwerp: f64,
    #[serde(default)]
    implementatie: f64,
    #[serde(default)]
    evaluatie: f64,
}

impl From<PhaseScoresRepr> for PhaseScores {
    fn from(repr: PhaseScoresRepr) -> Self {
        Self::new(repr.analyse, repr.ontwerp, repr.implementatie, repr.evaluatie)
    }
}

impl From<PhaseScores> for PhaseScoresRepr {
    fn from(scores: PhaseScores) -> Self {
        let [analyse, ontwerp, implementatie, evaluatie] = scores.0;
        Self {
            analyse,
            ontwerp,
            implementatie,
            evaluatie,
        }
    }
}

impl PhaseScores {
    /// Create scores from the four phase values, in canonical order
    #[must_use]
    pub const fn new(analyse: f64, ontwerp: f64, implementatie: f64, evaluatie: f64) -> Self {
        Self([analyse, ontwerp, implementatie, evaluatie])
    }

    /// Score for a single phase
    #[must_use]
    pub const fn get(&self, phase: Phase) -> f64 {
        self.0[phase.index()]
    }

    /// Replace the score for a single phase
    pub fn set(&mut self, phase: Phase, score: f64) {
        self.0[phase.index()] = score;
    }

    /// `(phase, score)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Phase, f64)> + '_ {
        Phase::ALL.into_iter().map(|phase| (phase, self.get(phase)))
    }

    /// Sum of all four scores
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Curriculum specialisation of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    /// Software Engineering
    #[serde(rename = "SE")]
    SoftwareEngineering,
    /// Data Science
    #[serde(rename = "DS")]
    DataScience,
    /// Shared by both tracks
    Both,
}

impl Track {
    /// All tracks, in display order
    pub const ALL: [Self; 3] = [Self::SoftwareEngineering, Self::DataScience, Self::Both];

    /// Short code as stored and rendered (`SE`, `DS`, `Both`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::SoftwareEngineering => "SE",
            Self::DataScience => "DS",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "se" => Ok(Self::SoftwareEngineering),
            "ds" => Ok(Self::DataScience),
            "both" => Ok(Self::Both),
            _ => Err(format!("Unknown track: {s}")),
        }
    }
}

/// A course as held by the course store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable unique identifier (e.g., "SE1-OOP")
    #[serde(default)]
    pub id: Option<String>,

    /// Display name
    pub naam: String,

    /// Study year (1-4, 0 for year-long courses)
    pub jaar: u32,

    /// Block within the year (1-4, 0 for year-long courses)
    pub blok: u32,

    /// Track classification
    pub track: Track,

    /// ECTS credits (can be fractional)
    pub ects: f32,

    /// Main programming language, when the course has one
    #[serde(default)]
    pub programmeertaal: Option<String>,

    /// Competency scores per phase
    pub phase_scores: PhaseScores,

    /// Product ids the course delivers, in display order
    #[serde(default)]
    pub producten: Vec<String>,
}

impl Course {
    /// Create a new course with zero scores and no products
    #[must_use]
    pub fn new(id: &str, naam: &str, jaar: u32, blok: u32, track: Track, ects: f32) -> Self {
        Self {
            id: Some(id.to_string()),
            naam: naam.to_string(),
            jaar,
            blok,
            track,
            ects,
            programmeertaal: None,
            phase_scores: PhaseScores::default(),
            producten: Vec::new(),
        }
    }

    /// Builder-style setter for the phase scores
    #[must_use]
    pub const fn with_scores(mut self, scores: PhaseScores) -> Self {
        self.phase_scores = scores;
        self
    }

    /// Builder-style setter for the programming language
    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.programmeertaal = Some(language.to_string());
        self
    }

    /// Add a product id, ignoring duplicates
    pub fn add_product(&mut self, product_id: &str) {
        if !self.producten.iter().any(|p| p == product_id) {
            self.producten.push(product_id.to_string());
        }
    }

    /// Whether the course lists the given product
    #[must_use]
    pub fn has_product(&self, product_id: &str) -> bool {
        self.producten.iter().any(|p| p == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("c1", "Object Oriented Programming", 1, 2, Track::Both, 5.0);

        assert_eq!(course.id.as_deref(), Some("c1"));
        assert_eq!(course.naam, "Object Oriented Programming");
        assert_eq!(course.jaar, 1);
        assert_eq!(course.blok, 2);
        assert!((course.ects - 5.0).abs() < f32::EPSILON);
        assert!(course.programmeertaal.is_none());
        assert!(course.producten.is_empty());
        assert!(course.phase_scores.total().abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_product_ignores_duplicates() {
        let mut course = Course::new("c1", "Databases", 1, 3, Track::DataScience, 5.0);

        course.add_product("erd");
        course.add_product("erd");
        course.add_product("sql-script");

        assert_eq!(course.producten, vec!["erd", "sql-script"]);
        assert!(course.has_product("erd"));
        assert!(!course.has_product("poster"));
    }

    #[test]
    fn test_phase_order_is_canonical() {
        let keys: Vec<&str> = Phase::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, ["analyse", "ontwerp", "implementatie", "evaluatie"]);
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[test]
    fn test_phase_from_str() {
        assert_eq!("Ontwerp".parse::<Phase>(), Ok(Phase::Ontwerp));
        assert!("testen".parse::<Phase>().is_err());
    }

    #[test]
    fn test_track_codes() {
        assert_eq!("SE".parse::<Track>(), Ok(Track::SoftwareEngineering));
        assert_eq!("ds".parse::<Track>(), Ok(Track::DataScience));
        assert_eq!("Both".parse::<Track>(), Ok(Track::Both));
        assert!("AI".parse::<Track>().is_err());
        assert_eq!(Track::DataScience.to_string(), "DS");
    }

    #[test]
    fn test_deserialize_seed_entry() {
        let json = r#"{
            "id": "DS2-ML",
            "naam": "Machine Learning",
            "jaar": 2,
            "blok": 1,
            "track": "DS",
            "ects": 7.5,
            "programmeertaal": null,
            "phaseScores": {"analyse": 8, "ontwerp": 4, "implementatie": 6, "evaluatie": 7},
            "producten": ["model-report", "notebook"]
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id.as_deref(), Some("DS2-ML"));
        assert_eq!(course.track, Track::DataScience);
        assert!(course.programmeertaal.is_none());
        assert!((course.phase_scores.get(Phase::Analyse) - 8.0).abs() < f64::EPSILON);
        assert!((course.phase_scores.get(Phase::Evaluatie) - 7.0).abs() < f64::EPSILON);
        assert!((course.phase_scores.total() - 25.0).abs() < f64::EPSILON);
        assert_eq!(course.producten.len(), 2);
    }

    #[test]
    fn test_phase_scores_serialize_as_named_fields() {
        let scores = PhaseScores::new(1.0, 2.0, 3.0, 4.0);
        let value = serde_json::to_value(scores).unwrap();
        assert_eq!(value["analyse"], 1.0);
        assert_eq!(value["ontwerp"], 2.0);
        assert_eq!(value["implementatie"], 3.0);
        assert_eq!(value["evaluatie"], 4.0);
    }
}
