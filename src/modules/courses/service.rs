use anyhow::anyhow;
use coursebook_core::AppError;
use coursebook_core::filter::find_by_id;
use coursebook_data::Directory;
use coursebook_models::{Course, CourseFilterParams};

pub struct CourseService;

impl CourseService {
    /// Courses matching every constraint in `params` (topics, attendees and
    /// instructor), in directory order.
    pub fn get_courses<'a>(directory: &'a Directory, params: &CourseFilterParams) -> Vec<&'a Course> {
        directory
            .courses()
            .iter()
            .filter(|course| params.admits(course))
            .collect()
    }

    pub fn get_course_by_id(directory: &Directory, id: i64) -> Result<&Course, AppError> {
        find_by_id(directory.courses(), id)
            .ok_or_else(|| AppError::not_found(anyhow!("course with id not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursebook_core::UNCONSTRAINED_ID;

    fn course(id: i64, instructor_id: i64, topics: &[&str], attendees: &[i64]) -> Course {
        Course {
            id,
            instructor_id,
            name: format!("course-{id}"),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            attendees: attendees.to_vec(),
        }
    }

    fn directory() -> Directory {
        Directory::new(
            vec![],
            vec![],
            vec![
                course(1, 1, &["rust", "systems"], &[1, 2]),
                course(2, 2, &["rust"], &[2, 3]),
                course(3, 1, &["python"], &[3]),
            ],
        )
    }

    fn ids(courses: Vec<&Course>) -> Vec<i64> {
        courses.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_filters_are_anded() {
        let directory = directory();
        let params = CourseFilterParams {
            topic: vec!["RUST".to_string()],
            attendee: vec!["2".to_string()],
            instructor: 2,
        };
        assert_eq!(ids(CourseService::get_courses(&directory, &params)), vec![2]);
    }

    #[test]
    fn test_instructor_sentinel_is_unconstrained() {
        let directory = directory();
        let params = CourseFilterParams {
            topic: vec!["rust".to_string()],
            attendee: vec![],
            instructor: UNCONSTRAINED_ID,
        };
        assert_eq!(ids(CourseService::get_courses(&directory, &params)), vec![1, 2]);
    }

    #[test]
    fn test_attendee_is_string_compared() {
        let directory = directory();
        let params = CourseFilterParams {
            attendee: vec!["03".to_string()],
            ..CourseFilterParams::default()
        };
        assert!(CourseService::get_courses(&directory, &params).is_empty());
    }

    #[test]
    fn test_get_course_by_id() {
        let directory = directory();
        assert_eq!(CourseService::get_course_by_id(&directory, 3).unwrap().name, "course-3");
        assert_eq!(
            CourseService::get_course_by_id(&directory, 42).unwrap_err().message(),
            "course with id not found"
        );
    }
}
