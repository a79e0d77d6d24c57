use anyhow::anyhow;
use coursebook_core::AppError;
use coursebook_core::filter::find_by_id;
use coursebook_data::Directory;
use coursebook_models::{Instructor, InstructorFilterParams};

pub struct InstructorService;

impl InstructorService {
    pub fn get_instructors<'a>(
        directory: &'a Directory,
        params: &InstructorFilterParams,
    ) -> Vec<&'a Instructor> {
        directory
            .instructors()
            .iter()
            .filter(|instructor| params.admits(instructor))
            .collect()
    }

    pub fn get_instructor_by_id(directory: &Directory, id: i64) -> Result<&Instructor, AppError> {
        find_by_id(directory.instructors(), id)
            .ok_or_else(|| AppError::not_found(anyhow!("instructor with id not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructor(id: i64, expertise: &[&str]) -> Instructor {
        Instructor {
            id,
            name: format!("instructor-{id}"),
            email: format!("instructor{id}@example.com"),
            company: "Acme".to_string(),
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_get_instructors_by_expertise() {
        let directory = Directory::new(
            vec![],
            vec![
                instructor(1, &["databases"]),
                instructor(2, &["Compilers", "databases"]),
            ],
            vec![],
        );
        let params = InstructorFilterParams {
            expertise: vec!["compilers".to_string()],
        };

        let found = InstructorService::get_instructors(&directory, &params);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let directory = Directory::new(
            vec![],
            vec![instructor(5, &["a"]), instructor(5, &["b"])],
            vec![],
        );

        let found = InstructorService::get_instructor_by_id(&directory, 5).unwrap();
        assert_eq!(found.expertise, vec!["a".to_string()]);
    }

    #[test]
    fn test_missing_instructor() {
        let directory = Directory::default();
        let err = InstructorService::get_instructor_by_id(&directory, 1).unwrap_err();
        assert_eq!(err.message(), "instructor with id not found");
    }
}
