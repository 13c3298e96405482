//! Mapping from stored courses to API DTOs

use crate::core::models::{Course, CourseDto};

/// Map a stored course to its API representation
///
/// The DTO owns copies of every field, so later changes to the stored record never leak
/// into a response that has already been built.
#[must_use]
pub fn to_course_dto(course: &Course) -> CourseDto {
    CourseDto {
        id: course.id.clone().unwrap_or_default(),
        naam: course.naam.clone(),
        jaar: course.jaar,
        blok: course.blok,
        track: course.track,
        ects: course.ects,
        programmeertaal: course.programmeertaal.clone(),
        phase_scores: course.phase_scores,
        producten: course.producten.clone(),
    }
}

/// Map a slice of stored courses, preserving order
#[must_use]
pub fn to_course_dtos(courses: &[Course]) -> Vec<CourseDto> {
    courses.iter().map(to_course_dto).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Phase, PhaseScores, Track};

    fn sample_course() -> Course {
        let mut course = Course::new("c1", "Web Development", 1, 1, Track::SoftwareEngineering, 5.0)
            .with_scores(PhaseScores::new(2.0, 5.0, 9.0, 3.0))
            .with_language("TypeScript");
        course.add_product("portfolio");
        course
    }

    #[test]
    fn test_maps_all_fields() {
        let dto = to_course_dto(&sample_course());

        assert_eq!(dto.id, "c1");
        assert_eq!(dto.naam, "Web Development");
        assert_eq!(dto.jaar, 1);
        assert_eq!(dto.blok, 1);
        assert_eq!(dto.track, Track::SoftwareEngineering);
        assert_eq!(dto.programmeertaal.as_deref(), Some("TypeScript"));
        assert!((dto.phase_scores.get(Phase::Implementatie) - 9.0).abs() < f64::EPSILON);
        assert_eq!(dto.producten, vec!["portfolio"]);
    }

    #[test]
    fn test_missing_id_becomes_empty_string() {
        let mut course = sample_course();
        course.id = None;

        assert_eq!(to_course_dto(&course).id, "");
    }

    #[test]
    fn test_null_language_stays_null() {
        let mut course = sample_course();
        course.programmeertaal = None;

        let dto = to_course_dto(&course);
        assert!(dto.programmeertaal.is_none());

        let json = serde_json::to_value(&dto).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("programmeertaal"));
        assert!(object["programmeertaal"].is_null());
    }

    #[test]
    fn test_products_are_copied() {
        let mut course = sample_course();
        let dto = to_course_dto(&course);

        course.add_product("demo-video");

        assert_eq!(dto.producten, vec!["portfolio"]);
        assert_eq!(course.producten.len(), 2);
    }

    #[test]
    fn test_list_mapping_preserves_order() {
        let courses = vec![
            Course::new("b", "Second", 1, 2, Track::Both, 5.0),
            Course::new("a", "First", 1, 1, Track::Both, 5.0),
        ];

        let ids: Vec<String> = to_course_dtos(&courses).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
