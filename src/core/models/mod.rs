//! Data models for the course catalog

pub mod course;
pub mod dto;

pub use course::{Course, Phase, PhaseScores, Track};
pub use dto::{CourseDto, LinkDto};
