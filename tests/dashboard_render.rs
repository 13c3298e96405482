//! Integration tests for the rendered dashboard page

use course_catalog::core::dashboard::{DashboardContext, DashboardRenderer, DEFAULT_TITLE};
use course_catalog::core::filter::{CardAttributes, FilterState, TrackFilter};
use course_catalog::core::mapper::to_course_dtos;
use course_catalog::core::models::{Phase, Track};
use course_catalog::core::seed::load_curriculum;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sample_context() -> DashboardContext {
    let courses = load_curriculum(Path::new("samples/curriculum.data.json")).expect("load sample");
    DashboardContext::from_courses(DEFAULT_TITLE, to_course_dtos(&courses))
}

/// Attributes of every `<article class="course" ...>` tag, in document order
fn course_tags(html: &str) -> Vec<HashMap<String, String>> {
    html.match_indices("<article class=\"course\"")
        .map(|(start, _)| {
            let rest = &html[start..];
            let tag = &rest[..rest.find('>').expect("tag end")];
            let mut attributes = HashMap::new();
            for part in tag.split("\" ") {
                let part = part.trim_start_matches("<article ").trim_end_matches('"');
                if let Some((name, value)) = part.split_once("=\"") {
                    attributes.insert(name.trim().to_string(), value.to_string());
                }
            }
            attributes
        })
        .collect()
}

fn card_from_tag(tag: &HashMap<String, String>) -> CardAttributes {
    CardAttributes::from_data_attributes(&tag["data-track"], |phase| {
        tag.get(phase.data_attribute()).map(String::as_str)
    })
    .expect("valid track attribute")
}

#[test]
fn every_course_card_is_rendered_once() {
    let ctx = sample_context();
    let html = DashboardRenderer::new().render(&ctx).expect("render");

    let tags = course_tags(&html);
    assert_eq!(tags.len(), ctx.course_count);
    for tag in &tags {
        for phase in Phase::ALL {
            assert!(tag.contains_key(phase.data_attribute()), "missing {phase} score");
        }
    }
}

#[test]
fn year_long_courses_sit_outside_the_grid() {
    let html = DashboardRenderer::new()
        .render(&sample_context())
        .expect("render");

    let (grid, year_long) = html.split_once("Year-long courses").expect("year-long section");
    assert!(!grid.contains("data-course-id=\"PROJ1\""));
    assert!(year_long.contains("data-course-id=\"PROJ1\""));
    assert!(year_long.contains("data-course-id=\"GRAD4\""));
}

#[test]
fn rendered_attributes_drive_the_filter() {
    let html = DashboardRenderer::new()
        .render(&sample_context())
        .expect("render");
    let tags = course_tags(&html);
    let cards: Vec<CardAttributes> = tags.iter().map(card_from_tag).collect();

    let mut state = FilterState::new();
    assert!(state.visibility(&cards).iter().all(|visible| *visible));

    state.toggle_phase(Phase::Analyse);
    state.toggle_phase(Phase::Evaluatie);
    state.select_track(TrackFilter::Only(Track::DataScience));
    let visible: Vec<&str> = tags
        .iter()
        .zip(state.visibility(&cards))
        .filter(|(_, visible)| *visible)
        .map(|(tag, _)| tag["data-course-id"].as_str())
        .collect();

    assert_eq!(visible, vec!["STAT1", "ML2"]);
}

#[test]
fn generate_writes_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("courses.html");

    DashboardRenderer::new()
        .generate(&sample_context(), &path)
        .expect("generate");

    let content = fs::read_to_string(&path).expect("read page");
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("PHASE_THRESHOLD"));
}
